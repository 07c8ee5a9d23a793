//! Type, sort and free-text filter controls

use dioxus::prelude::*;

use crate::domain::models::{LocationKind, SortOption};
use crate::shared::hooks::SearchHandle;

#[component]
pub fn FilterBar(search: SearchHandle) -> Element {
    let criteria = search.session.read().criteria().clone();
    let type_value = criteria.type_filter.as_value().to_string();
    let sort_value = criteria.sort_option.as_value();
    let search_text = criteria.search_text;

    let type_options: Vec<(&'static str, &'static str)> = std::iter::once(("all", "All types"))
        .chain(LocationKind::ALL.iter().map(|kind| (kind.code(), kind.label())))
        .collect();
    let sort_options: Vec<(&'static str, &'static str)> = SortOption::ALL
        .iter()
        .map(|option| (option.as_value(), option.label()))
        .collect();

    rsx! {
        div { class: "c-filters", id: "filters-section",
            div { class: "c-filters__group",
                label { class: "c-filters__label", r#for: "type-filter", "Location type" }
                select {
                    id: "type-filter",
                    class: "c-filters__control",
                    value: "{type_value}",
                    onchange: move |evt| search.set_type_filter(&evt.value()),
                    for (value, label) in type_options {
                        option { value: value, "{label}" }
                    }
                }
            }

            div { class: "c-filters__group",
                label { class: "c-filters__label", r#for: "sort-option", "Sort by" }
                select {
                    id: "sort-option",
                    class: "c-filters__control",
                    value: "{sort_value}",
                    onchange: move |evt| search.set_sort_option(&evt.value()),
                    for (value, label) in sort_options {
                        option { value: value, "{label}" }
                    }
                }
            }

            div { class: "c-filters__group",
                label { class: "c-filters__label", r#for: "search-filter", "Filter results" }
                input {
                    r#type: "text",
                    id: "search-filter",
                    class: "c-filters__control",
                    placeholder: "Filter by name or country...",
                    value: "{search_text}",
                    oninput: move |evt| search.set_search_text(evt.value()),
                }
            }
        }
    }
}
