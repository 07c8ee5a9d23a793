//! Structured logging for the location finder
//!
//! Provides consistent, contextual logging across the search pipeline and the
//! proxy relay. Every event carries an `operation` field so logs from the
//! browser console and the relay can be filtered the same way.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SearchRequest,
    SearchResponse,
    SearchFailure,
    Filter,
    Relay,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SearchRequest => "search_request",
            LogOperation::SearchResponse => "search_response",
            LogOperation::SearchFailure => "search_failure",
            LogOperation::Filter => "filter",
            LogOperation::Relay => "relay",
        }
    }
}

/// First ten characters of the key, never the whole secret.
pub fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "MISSING".to_string();
    }
    let prefix: String = key.chars().take(10).collect();
    format!("{prefix}...")
}

/// Log an outgoing search request
pub fn log_search_request(mode: &str, url: &str, api_key: Option<&str>) {
    let masked = api_key.map(mask_api_key).unwrap_or_else(|| "none".to_string());
    tracing::info!(
        operation = LogOperation::SearchRequest.as_str(),
        mode = mode,
        url = url,
        api_key = %masked,
        "Sending location search"
    );
}

/// Log the status line of a search response
pub fn log_search_response(mode: &str, status: u16, status_text: &str) {
    tracing::debug!(
        operation = LogOperation::SearchResponse.as_str(),
        mode = mode,
        status = status,
        status_text = status_text,
        "Location search responded"
    );
}

/// Log a search that produced records (or a valid empty answer)
pub fn log_search_success(mode: &str, result_count: usize) {
    tracing::info!(
        operation = LogOperation::SearchResponse.as_str(),
        mode = mode,
        result_count = result_count,
        "Location search succeeded"
    );
}

/// Log a failed search attempt
pub fn log_search_failure(mode: &str, url: &str, status: Option<u16>, error: &str) {
    tracing::error!(
        operation = LogOperation::SearchFailure.as_str(),
        mode = mode,
        url = url,
        status = status,
        error = error,
        "Location search failed"
    );
}

/// Log a filter/sort recomputation
pub fn log_filter_applied(total: usize, kept: usize, type_filter: &str, sort: &str) {
    tracing::trace!(
        operation = LogOperation::Filter.as_str(),
        total = total,
        kept = kept,
        type_filter = type_filter,
        sort = sort,
        "Filters applied"
    );
}

/// Log a request forwarded by the relay
pub fn log_relay_forward(query: &str, url: &str) {
    tracing::info!(
        operation = LogOperation::Relay.as_str(),
        query = query,
        url = url,
        "Relaying location search"
    );
}

/// Log the upstream answer seen by the relay
pub fn log_relay_upstream(status: u16) {
    if status == 200 {
        tracing::info!(
            operation = LogOperation::Relay.as_str(),
            upstream_status = status,
            "Upstream search succeeded"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::Relay.as_str(),
            upstream_status = status,
            "Upstream search returned an error"
        );
    }
}

/// Log a relay transport error
pub fn log_relay_error(kind: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::Relay.as_str(),
        kind = kind,
        error = error,
        "Relay could not reach the upstream API"
    );
}
