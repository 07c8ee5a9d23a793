use dioxus::prelude::*;

use crate::app::components::{EmptyState, LoadingText, LocationCard};
use crate::shared::view_state::{NO_MATCHES_MESSAGE, RenderState};

/// Results region. Errors are shown by the banner, so they render nothing here.
#[component]
pub fn ResultsPanel(state: RenderState) -> Element {
    match state {
        RenderState::Idle | RenderState::Error(_) => rsx! {},
        RenderState::Loading => rsx! {
            LoadingText { message: "Searching for locations...".to_string() }
        },
        RenderState::NoResults(message) => rsx! {
            EmptyState { icon: "🚗".to_string(), message }
        },
        RenderState::NoMatches => rsx! {
            EmptyState { icon: "🔍".to_string(), message: NO_MATCHES_MESSAGE.to_string() }
        },
        RenderState::Results { summary, cards } => rsx! {
            div { class: "c-results", id: "results",
                div { class: "c-results__count", "{summary}" }
                for (i, card) in cards.into_iter().enumerate() {
                    LocationCard { key: "{i}", card }
                }
            }
        },
    }
}
