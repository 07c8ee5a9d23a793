use dioxus::prelude::*;
use dioxus::document;

use crate::app::components::{ErrorBanner, FilterBar, ResultsPanel, SearchForm};
use crate::app::layouts::AppHeader;
use crate::shared::hooks::use_search_session;
use crate::shared::view_state::RenderState;

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Location finder initialized");
    });

    rsx! {
        Layout { FinderPage {} }
    }
}

#[component]
fn Layout(children: Element) -> Element {
    // Built by build.rs from assets/css/main.css
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            {children}
        }
    }
}

/// Search form, error banner, filters and results, top to bottom.
#[component]
fn FinderPage() -> Element {
    let search = use_search_session();
    let session = search.session.read();
    let mode = session.mode().unwrap_or_default();
    let filters_visible = session.filters_visible();
    let state = session.render_state();
    drop(session);

    let error = match &state {
        RenderState::Error(message) => Some(message.clone()),
        _ => None,
    };

    rsx! {
        AppHeader { mode }

        main { class: "c-layout__main",
            SearchForm { search }

            if let Some(message) = error {
                ErrorBanner { message }
            }

            if filters_visible {
                FilterBar { search }
            }

            ResultsPanel { state }
        }
    }
}
