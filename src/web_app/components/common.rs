// web_app/components/common.rs - Reusable UI components
//
// Small stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12" role="status">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-light-100/10 border-t-indigo-400"></div>
            <span class="mt-4 text-light-200 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <p class="text-red-500 text-center py-8">{error}</p>
    }
}

/// Shown when a search returns nothing
#[component]
pub fn EmptyResults() -> impl IntoView {
    view! {
        <p class="text-light-200 text-center py-8">"No movies found."</p>
    }
}
