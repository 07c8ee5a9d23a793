//! Search session hook
//!
//! Wraps the single [`SearchSession`] of the page in a signal and exposes the
//! UI actions. The session is never borrowed across the network await: the
//! search is started, detached, awaited, then its outcome stored.

use dioxus::prelude::*;

use crate::config::ApiConfig;
use crate::domain::models::{SortOption, TypeFilter};
use crate::shared::state::SearchSession;
use crate::shared::view_state::RenderState;

/// Handle returned by [`use_search_session`]
#[derive(Clone, Copy, PartialEq)]
pub struct SearchHandle {
    pub session: Signal<SearchSession>,
}

impl SearchHandle {
    /// Runs a search for the raw input text.
    ///
    /// Validation errors are shown right away; otherwise the request runs in a
    /// spawned task and the busy state ends when it resolves, success or not.
    pub fn submit(&self, input: String) {
        let mut session = self.session;
        let pending = match session.write().begin_search(&input) {
            Ok(pending) => pending,
            Err(e) => {
                tracing::debug!("Search not started: {}", e);
                return;
            }
        };

        spawn(async move {
            let outcome = pending.run().await;
            session.write().finish_search(outcome);
        });
    }

    pub fn set_type_filter(&self, value: &str) {
        let mut session = self.session;
        let type_filter = value.parse::<TypeFilter>().unwrap_or_default();
        session.write().set_type_filter(type_filter);
    }

    pub fn set_sort_option(&self, value: &str) {
        let mut session = self.session;
        let sort_option = value.parse::<SortOption>().unwrap_or_default();
        session.write().set_sort_option(sort_option);
    }

    pub fn set_search_text(&self, value: String) {
        let mut session = self.session;
        session.write().set_search_text(value);
    }

    pub fn is_busy(&self) -> bool {
        self.session.read().is_busy()
    }

    pub fn render_state(&self) -> RenderState {
        self.session.read().render_state()
    }
}

/// Hook owning the page's search session
pub fn use_search_session() -> SearchHandle {
    let session = use_signal(|| SearchSession::new(&ApiConfig::load()));

    SearchHandle { session }
}
