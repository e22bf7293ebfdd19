// web_app/components/movie.rs - Movie display components
//
// - MovieCard: poster, title, rating, language and year
// - MovieList: keyed list of cards
// - TrendingSection: numbered posters of the most searched terms

use leptos::prelude::*;
use crate::web_app::model::{Movie, SearchCountRecord};

/// Card for a single movie
#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let poster = movie.poster_src();
    let rating = movie.rating_label();
    let year = movie.release_year();

    view! {
        <div class="movie-card">
            <img src=poster alt=movie.title.clone() loading="lazy" />

            <div class="mt-4">
                <h3>{movie.title.clone()}</h3>

                <div class="content">
                    <div class="rating">
                        <img src="/star.svg" alt="Star Icon" />
                        <p>{rating}</p>
                    </div>
                    <span>"•"</span>
                    <p class="lang">{movie.original_language.clone()}</p>
                    <span>"•"</span>
                    <p class="year">{year}</p>
                </div>
            </div>
        </div>
    }
}

/// Result list keyed by movie id
#[component]
pub fn MovieList(movies: Vec<Movie>) -> impl IntoView {
    view! {
        <ul>
            <For
                each=move || movies.clone()
                key=|movie| movie.id
                children=move |movie: Movie| {
                    view! {
                        <li>
                            <MovieCard movie=movie />
                        </li>
                    }
                }
            />
        </ul>
    }
}

/// Trending searches, numbered from 1
#[component]
pub fn TrendingSection(records: Vec<SearchCountRecord>) -> impl IntoView {
    view! {
        <section class="trending">
            <h2>"Trending Movies"</h2>
            <ul>
                {records
                    .into_iter()
                    .enumerate()
                    .map(|(index, record)| {
                        view! {
                            <li>
                                <p>{index + 1}</p>
                                <img src=record.poster_url alt=record.search_term />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
