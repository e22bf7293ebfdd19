// web_app/pages/search.rs - Search page component
//
// The page owns the whole UI state and wires it up:
// - keystrokes update the raw term and restart the debounce timer
// - a settled term triggers a catalog request (fenced by sequence number)
// - trending searches load once on mount

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::model::GENERIC_FETCH_ERROR;
use crate::web_app::server_fns::{get_trending, search_movies};
use crate::web_app::state::{Debouncer, ResultsView, SearchAction, SearchState};

/// Message to show for a failed `search_movies` call
///
/// Server-side failures already carry a user-facing message; anything else
/// (request, decoding) means the server was not reached properly.
pub fn failure_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) if !message.is_empty() => message.clone(),
        _ => GENERIC_FETCH_ERROR.to_string(),
    }
}

/// Main search page component
#[component]
pub fn SearchPage() -> impl IntoView {
    let state = RwSignal::new(SearchState::default());
    let debouncer = StoredValue::new(Debouncer::default());
    let pending_timer = StoredValue::new(None::<TimeoutHandle>);

    // Raw keystrokes: update the box immediately, restart the quiet period
    let on_input = Callback::new(move |value: String| {
        state.update(|s| s.reduce(SearchAction::InputChanged(value.clone())));

        let ticket = debouncer.try_update_value(|d| d.push(value)).unwrap_or_default();
        let delay = debouncer.with_value(|d| d.delay());

        if let Some(previous) = pending_timer.get_value() {
            previous.clear();
        }
        let handle = set_timeout_with_handle(
            move || {
                if let Some(settled) = debouncer.try_update_value(|d| d.settle(ticket)).flatten() {
                    state.update(|s| s.reduce(SearchAction::TermSettled(settled)));
                }
            },
            delay,
        )
        .ok();
        pending_timer.set_value(handle);
    });

    let search_term = Signal::derive(move || state.with(|s| s.search_term.clone()));
    let debounced_term = Memo::new(move |_| state.with(|s| s.debounced_term.clone()));

    // Fetch whenever the settled term changes (and once on mount for discovery)
    Effect::new(move |_| {
        let term = debounced_term.get();
        let request = state
            .try_update(|s| {
                s.reduce(SearchAction::FetchStarted);
                s.latest_request()
            })
            .unwrap_or_default();

        spawn_local(async move {
            let action = match search_movies(term).await {
                Ok(movies) => SearchAction::FetchSucceeded { request, movies },
                Err(err) => {
                    leptos::logging::error!("Error fetching movies: {err}");
                    SearchAction::FetchFailed {
                        request,
                        message: failure_message(&err),
                    }
                }
            };
            state.update(|s| s.reduce(action));
        });
    });

    // Trending searches, loaded once
    Effect::new(move |_| {
        spawn_local(async move {
            let records = get_trending().await.unwrap_or_default();
            state.update(|s| s.reduce(SearchAction::TrendingLoaded(records)));
        });
    });

    view! {
        <main>
            <div class="pattern" />

            <div class="wrapper">
                <header>
                    <img src="/hero.svg" alt="Hero Banner" />
                    <h1>
                        "Find " <span class="text-gradient">"Movies"</span>
                        " You'll Enjoy Without the Hassle"
                    </h1>
                    <SearchBar value=search_term on_input=on_input />
                </header>

                {move || {
                    state
                        .with(SearchState::show_trending)
                        .then(|| {
                            let records = state.with(|s| s.trending.clone());
                            view! { <TrendingSection records=records /> }
                        })
                }}

                <section class="all-movies">
                    <h2>"All Movies"</h2>

                    {move || match state.with(SearchState::results_view) {
                        ResultsView::Loading => view! {
                            <Loading message="Loading movies..." />
                        }.into_any(),
                        ResultsView::Error(message) => view! {
                            <ErrorDisplay error=message />
                        }.into_any(),
                        ResultsView::Results(movies) if movies.is_empty() => view! {
                            <EmptyResults />
                        }.into_any(),
                        ResultsView::Results(movies) => view! {
                            <MovieList movies=movies />
                        }.into_any(),
                    }}
                </section>
            </div>
        </main>
    }
}
