// tests/search_state_tests.rs
// Search page state transitions without a browser

use movie_finder::web_app::model::{Movie, SearchCountRecord, GENERIC_FETCH_ERROR};
use movie_finder::web_app::state::{ResultsView, SearchAction, SearchState};

fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: None,
        popularity: 1.0,
        vote_average: 6.0,
        release_date: None,
        original_language: "en".to_string(),
        overview: String::new(),
    }
}

fn record(term: &str, count: i64) -> SearchCountRecord {
    SearchCountRecord {
        id: format!("doc-{term}"),
        search_term: term.to_string(),
        count,
        movie_id: 1,
        poster_url: "/no-movie.svg".to_string(),
    }
}

/// Start a request and return its sequence number
fn start(state: &mut SearchState) -> u64 {
    state.reduce(SearchAction::FetchStarted);
    state.latest_request()
}

#[test]
fn test_successful_fetch_lifecycle() {
    let mut state = SearchState::default();

    let request = start(&mut state);
    assert_eq!(state.results_view(), ResultsView::Loading);

    state.reduce(SearchAction::FetchSucceeded {
        request,
        movies: vec![movie(1, "Heat"), movie(2, "Ronin")],
    });

    assert!(!state.is_loading);
    assert!(state.error_message.is_none());
    match state.results_view() {
        ResultsView::Results(movies) => {
            assert_eq!(movies.len(), 2);
            assert_eq!(movies[0].title, "Heat");
        }
        other => panic!("expected results, got {:?}", other),
    }
}

#[test]
fn test_failed_fetch_clears_list_and_shows_message() {
    let mut state = SearchState::default();
    let request = start(&mut state);
    state.reduce(SearchAction::FetchSucceeded {
        request,
        movies: vec![movie(1, "Heat")],
    });

    let request = start(&mut state);
    state.reduce(SearchAction::FetchFailed {
        request,
        message: GENERIC_FETCH_ERROR.to_string(),
    });

    assert!(state.movies.is_empty());
    assert!(!state.is_loading);
    assert_eq!(
        state.results_view(),
        ResultsView::Error(GENERIC_FETCH_ERROR.to_string())
    );
}

#[test]
fn test_new_request_clears_previous_error() {
    let mut state = SearchState::default();
    let request = start(&mut state);
    state.reduce(SearchAction::FetchFailed {
        request,
        message: "Movie not found!".to_string(),
    });

    let request = start(&mut state);
    assert!(state.error_message.is_none());

    state.reduce(SearchAction::FetchSucceeded {
        request,
        movies: vec![],
    });
    assert_eq!(state.results_view(), ResultsView::Results(vec![]));
}

#[test]
fn test_stale_response_is_ignored() {
    let mut state = SearchState::default();

    let slow = start(&mut state);
    let fast = start(&mut state);
    assert!(fast > slow);

    state.reduce(SearchAction::FetchSucceeded {
        request: fast,
        movies: vec![movie(2, "Batman Begins")],
    });
    // The older request finishes last and must not overwrite the newer list
    state.reduce(SearchAction::FetchSucceeded {
        request: slow,
        movies: vec![movie(1, "Bat*21")],
    });

    assert_eq!(state.movies, vec![movie(2, "Batman Begins")]);
}

#[test]
fn test_stale_failure_is_ignored() {
    let mut state = SearchState::default();

    let slow = start(&mut state);
    let fast = start(&mut state);
    state.reduce(SearchAction::FetchSucceeded {
        request: fast,
        movies: vec![movie(3, "Alien")],
    });
    state.reduce(SearchAction::FetchFailed {
        request: slow,
        message: GENERIC_FETCH_ERROR.to_string(),
    });

    assert!(state.error_message.is_none());
    assert_eq!(state.movies.len(), 1);
}

#[test]
fn test_loading_stays_on_until_latest_request_answers() {
    let mut state = SearchState::default();

    let first = start(&mut state);
    let _second = start(&mut state);
    state.reduce(SearchAction::FetchSucceeded {
        request: first,
        movies: vec![movie(1, "Heat")],
    });

    assert_eq!(state.results_view(), ResultsView::Loading);
}

#[test]
fn test_render_branches_are_exclusive() {
    let mut state = SearchState::default();

    let request = start(&mut state);
    state.reduce(SearchAction::FetchSucceeded {
        request,
        movies: vec![movie(1, "Heat")],
    });
    assert_eq!(state.results_view(), ResultsView::Results(vec![movie(1, "Heat")]));

    // Previous movies are still held, but loading wins
    let request = start(&mut state);
    assert!(!state.movies.is_empty());
    assert_eq!(state.results_view(), ResultsView::Loading);

    state.reduce(SearchAction::FetchFailed {
        request,
        message: "boom".to_string(),
    });
    assert_eq!(state.results_view(), ResultsView::Error("boom".to_string()));

    let request = start(&mut state);
    assert_eq!(state.results_view(), ResultsView::Loading);
    state.reduce(SearchAction::FetchSucceeded {
        request,
        movies: vec![movie(2, "Ronin")],
    });
    assert_eq!(state.results_view(), ResultsView::Results(vec![movie(2, "Ronin")]));
}

#[test]
fn test_first_paint_shows_loading() {
    // Nothing has been requested yet, the discovery fetch is about to start
    let state = SearchState::default();
    assert_eq!(state.latest_request(), 0);
    assert_eq!(state.results_view(), ResultsView::Loading);
}

#[test]
fn test_trending_section_visibility() {
    let mut state = SearchState::default();
    assert!(!state.show_trending());

    state.reduce(SearchAction::TrendingLoaded(vec![
        record("batman", 5),
        record("alien", 2),
    ]));
    assert!(state.show_trending());
    assert_eq!(state.trending[0].search_term, "batman");

    state.reduce(SearchAction::TrendingLoaded(vec![]));
    assert!(!state.show_trending());
}

#[test]
fn test_keystrokes_do_not_start_requests() {
    let mut state = SearchState::default();
    for value in ["i", "in", "inc"] {
        state.reduce(SearchAction::InputChanged(value.to_string()));
    }

    assert_eq!(state.search_term, "inc");
    assert!(state.debounced_term.is_empty());
    assert_eq!(state.latest_request(), 0);
    assert!(!state.is_loading);
}
