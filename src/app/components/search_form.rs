//! Query input and search trigger

use dioxus::prelude::*;

use crate::shared::hooks::SearchHandle;

/// Text input plus button; Enter submits too.
///
/// The button is disabled while a search is in flight.
#[component]
pub fn SearchForm(search: SearchHandle) -> Element {
    let mut query = use_signal(String::new);
    let busy = search.is_busy();

    rsx! {
        div { class: "c-search-form",
            input {
                r#type: "text",
                id: "location-input",
                class: "c-search-form__input",
                placeholder: "Enter a city, airport, or neighborhood (e.g. Paris, JFK)",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
                onkeypress: move |evt| {
                    if evt.key() == Key::Enter {
                        search.submit(query());
                    }
                },
            }

            button {
                id: "search-button",
                class: "c-btn c-btn--primary",
                disabled: busy,
                onclick: move |_| search.submit(query()),
                if busy {
                    "Searching..."
                } else {
                    "Search"
                }
            }
        }
    }
}
