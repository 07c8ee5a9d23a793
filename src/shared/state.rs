//! Session-scoped search state.
//!
//! One [`SearchSession`] owns the full result set of the last successful
//! search and the current filter criteria. The filtered view is always derived
//! from those two values, never stored.

use crate::config::ApiConfig;
use crate::domain::models::{
    FilterCriteria, FilteredView, ResultSet, SearchOutcome, SearchQuery, SortOption, TypeFilter,
};
use crate::domain::services::{SearchClient, apply};
use crate::shared::errors::SearchError;
use crate::shared::view_state::{NO_RESULTS_MESSAGE, RenderState};

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Busy,
    Ready,
    Empty,
    Failed(SearchError),
}

/// A validated search, detached from the session so the caller can await it
/// without holding the session borrowed.
#[derive(Debug, Clone)]
pub struct PendingSearch {
    query: SearchQuery,
    client: SearchClient,
}

impl PendingSearch {
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub async fn run(self) -> Result<SearchOutcome, SearchError> {
        self.client.fetch_locations(&self.query).await
    }
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    client: Result<SearchClient, SearchError>,
    all_results: Option<ResultSet>,
    criteria: FilterCriteria,
    phase: Phase,
}

impl SearchSession {
    /// Picks the transport once; a bad configuration is reported on the first
    /// search, before any request is made.
    pub fn new(config: &ApiConfig) -> Self {
        Self::from_client(SearchClient::from_config(config))
    }

    pub fn with_client(client: SearchClient) -> Self {
        Self::from_client(Ok(client))
    }

    fn from_client(client: Result<SearchClient, SearchError>) -> Self {
        Self {
            client,
            all_results: None,
            criteria: FilterCriteria::default(),
            phase: Phase::Idle,
        }
    }

    /// Transport name for display, `None` when unconfigured.
    pub fn mode(&self) -> Option<&'static str> {
        self.client.as_ref().ok().map(SearchClient::mode)
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Busy
    }

    /// Validates the input and marks the session busy.
    ///
    /// Validation failures are terminal: they are recorded like any other
    /// failure and returned. A call while busy is rejected without touching
    /// the state.
    pub fn begin_search(&mut self, input: &str) -> Result<PendingSearch, SearchError> {
        if self.is_busy() {
            return Err(SearchError::SearchInProgress);
        }

        match self.prepare(input) {
            Ok(pending) => {
                tracing::debug!(query = %pending.query, "Search started");
                self.all_results = None;
                self.phase = Phase::Busy;
                Ok(pending)
            }
            Err(err) => {
                self.fail(err.clone());
                Err(err)
            }
        }
    }

    fn prepare(&self, input: &str) -> Result<PendingSearch, SearchError> {
        let query = SearchQuery::parse(input).ok_or(SearchError::EmptyQuery)?;
        let client = self.client.clone()?;
        Ok(PendingSearch { query, client })
    }

    /// Stores the outcome and leaves the busy state, whatever happened.
    pub fn finish_search(&mut self, outcome: Result<SearchOutcome, SearchError>) {
        match outcome {
            Ok(SearchOutcome::Found(results)) => {
                self.all_results = Some(results);
                self.criteria = FilterCriteria::default();
                self.phase = Phase::Ready;
            }
            Ok(SearchOutcome::NoResults) => {
                self.all_results = None;
                self.phase = Phase::Empty;
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: SearchError) {
        tracing::warn!(error = %err, "Search failed");
        self.all_results = None;
        self.phase = Phase::Failed(err);
    }

    /// `begin_search`, the request, then `finish_search`.
    pub async fn run_search(&mut self, input: &str) -> Result<(), SearchError> {
        let pending = self.begin_search(input)?;
        let outcome = pending.run().await;
        let result = outcome.as_ref().map(|_| ()).map_err(|err| err.clone());
        self.finish_search(outcome);
        result
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.all_results.as_ref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn last_error(&self) -> Option<&SearchError> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.criteria.type_filter = type_filter;
    }

    pub fn set_sort_option(&mut self, sort_option: SortOption) {
        self.criteria.sort_option = sort_option;
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.criteria.search_text = search_text.into();
    }

    /// Filter controls are offered only while there is something to filter.
    pub fn filters_visible(&self) -> bool {
        self.phase == Phase::Ready && self.all_results.is_some()
    }

    /// Current results under the current criteria.
    pub fn view(&self) -> FilteredView {
        match &self.all_results {
            Some(results) => apply(results, &self.criteria),
            None => FilteredView::default(),
        }
    }

    pub fn render_state(&self) -> RenderState {
        match &self.phase {
            Phase::Idle => RenderState::Idle,
            Phase::Busy => RenderState::Loading,
            Phase::Failed(err) => RenderState::Error(err.to_string()),
            Phase::Empty => RenderState::NoResults(NO_RESULTS_MESSAGE.to_string()),
            Phase::Ready => RenderState::from_view(&self.view()),
        }
    }
}
