// web_app/components/search.rs - Search input
//
// The input reports every keystroke; debouncing happens in the page that
// owns the state, not here.

use leptos::prelude::*;

/// Placeholder text of the search box
pub const SEARCH_PLACEHOLDER: &str = "Search through thousands of movies";

/// Search bar component
#[component]
pub fn SearchBar(
    /// Raw text currently in the box
    value: Signal<String>,
    /// Called with the new text on every keystroke
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search">
            <div>
                <img src="/search.svg" alt="search" />
                <input
                    type="text"
                    placeholder=SEARCH_PLACEHOLDER
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
