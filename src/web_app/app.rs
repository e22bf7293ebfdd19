// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet and the router. There is a single
// page; every other path gets the 404 view.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::SearchPage;

pub const APP_TITLE: &str = "Movie Finder";
pub const APP_DESCRIPTION: &str = "Search movies from TMDB and see what everyone else is searching for";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content=APP_DESCRIPTION />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/movie_finder.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=SearchPage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main>
            <div class="wrapper text-center">
                <h1>"404"</h1>
                <p class="text-light-200 mb-8">"Page not found"</p>
                <a href="/" class="text-gradient">"Back to search"</a>
            </div>
        </main>
    }
}
