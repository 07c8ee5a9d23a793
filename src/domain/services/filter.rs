//! Client-side filtering and sorting of a result set.

use std::cmp::Ordering;

use crate::domain::models::{FilterCriteria, FilteredView, LocationRecord, ResultSet, SortOption};
use crate::shared::logging::log_filter_applied;
use crate::shared::text::locale_cmp;

/// Rank given to records the API sent without an `index`.
pub const MISSING_INDEX_RANK: i64 = 999;

/// Filters by type, then by free text, then sorts.
///
/// Works on a copy; `results` is never touched. The sort is stable, so records
/// with equal keys keep their API order.
pub fn apply(results: &ResultSet, criteria: &FilterCriteria) -> FilteredView {
    let needle = criteria.normalized_search_text();

    let mut records: Vec<LocationRecord> = results
        .iter()
        .filter(|record| criteria.type_filter.matches(record))
        .filter(|record| needle.is_empty() || search_corpus(record).contains(&needle))
        .cloned()
        .collect();

    records.sort_by(|a, b| compare(a, b, criteria.sort_option));

    log_filter_applied(
        results.len(),
        records.len(),
        criteria.type_filter.as_value(),
        criteria.sort_option.as_value(),
    );

    FilteredView::new(records)
}

/// Every name the text filter looks at, lower-cased and space-joined.
pub fn search_corpus(record: &LocationRecord) -> String {
    let names = record.names();
    [
        names.full_name(),
        names.short_name(),
        names.display_name(),
        names.primary_display_name(),
        names.secondary_display_name(),
        record.country_name(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

/// primaryDisplayName → shortName → "".
fn sort_name(record: &LocationRecord) -> String {
    let names = record.names();
    names
        .primary_display_name()
        .or_else(|| names.short_name())
        .unwrap_or_default()
        .to_lowercase()
}

fn sort_country(record: &LocationRecord) -> String {
    record.country_name().unwrap_or_default().to_lowercase()
}

fn relevance_rank(record: &LocationRecord) -> i64 {
    record.index.unwrap_or(MISSING_INDEX_RANK)
}

fn compare(a: &LocationRecord, b: &LocationRecord, sort: SortOption) -> Ordering {
    match sort {
        SortOption::Name => locale_cmp(&sort_name(a), &sort_name(b)),
        SortOption::Country => locale_cmp(&sort_country(a), &sort_country(b)),
        SortOption::Relevance => relevance_rank(a).cmp(&relevance_rank(b)),
    }
}
