// web_app/state/mod.rs - Client-side UI state and its reducer
//
// The search page owns a single `SearchState` and changes it only through
// `SearchState::reduce`. Keeping the transitions here (instead of inside
// view closures) lets the behaviour be tested without a browser.

pub mod debounce;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE};

use crate::web_app::model::{Movie, SearchCountRecord};

/// Everything the search page renders from
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    /// Raw text in the search box, updated on every keystroke
    pub search_term: String,
    /// Text that survived the debounce quiet period
    pub debounced_term: String,
    pub movies: Vec<Movie>,
    pub trending: Vec<SearchCountRecord>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    latest_request: u64,
}

/// State transitions driven by input, timers and server responses
#[derive(Clone, Debug, PartialEq)]
pub enum SearchAction {
    InputChanged(String),
    TermSettled(String),
    /// A catalog request is about to be sent; it becomes the latest request
    FetchStarted,
    FetchSucceeded { request: u64, movies: Vec<Movie> },
    FetchFailed { request: u64, message: String },
    TrendingLoaded(Vec<SearchCountRecord>),
}

/// The mutually exclusive states of the results section
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsView {
    Loading,
    Error(String),
    Results(Vec<Movie>),
}

impl SearchState {
    pub fn reduce(&mut self, action: SearchAction) {
        match action {
            SearchAction::InputChanged(value) => {
                self.search_term = value;
            }
            SearchAction::TermSettled(value) => {
                self.debounced_term = value;
            }
            SearchAction::FetchStarted => {
                self.latest_request += 1;
                self.is_loading = true;
                self.error_message = None;
            }
            SearchAction::FetchSucceeded { request, movies } => {
                if !self.is_latest(request) {
                    return;
                }
                self.movies = movies;
                self.error_message = None;
                self.is_loading = false;
            }
            SearchAction::FetchFailed { request, message } => {
                if !self.is_latest(request) {
                    return;
                }
                self.movies.clear();
                self.error_message = Some(message);
                self.is_loading = false;
            }
            SearchAction::TrendingLoaded(records) => {
                self.trending = records;
            }
        }
    }

    /// Sequence number of the most recently started catalog request
    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    fn is_latest(&self, request: u64) -> bool {
        request == self.latest_request
    }

    /// Which branch the results section should render
    ///
    /// Before the first request starts (including the server-rendered
    /// page) the section shows the loading state.
    pub fn results_view(&self) -> ResultsView {
        if self.is_loading || self.latest_request == 0 {
            ResultsView::Loading
        } else if let Some(message) = &self.error_message {
            ResultsView::Error(message.clone())
        } else {
            ResultsView::Results(self.movies.clone())
        }
    }

    /// The trending section is hidden until at least one record exists
    pub fn show_trending(&self) -> bool {
        !self.trending.is_empty()
    }
}
