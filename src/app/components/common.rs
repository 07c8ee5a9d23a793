use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading", id: "loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Error region: one message, line breaks kept (BEM: c-error)
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "c-error", id: "error-message", role: "alert",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Neutral empty result (BEM: c-empty-state)
#[component]
pub fn EmptyState(icon: String, message: String) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__icon", "{icon}" }
            div { class: "c-empty-state__text", "{message}" }
        }
    }
}
