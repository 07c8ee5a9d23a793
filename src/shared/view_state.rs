//! What the results area should show, independent of any UI toolkit.

use crate::domain::models::{DisplayRecord, FilteredView};
use crate::domain::services::normalize;

/// Neutral message for a search that found nothing.
pub const NO_RESULTS_MESSAGE: &str = "No locations found. Try a different search term.";

/// Placeholder when the filters hide every result.
pub const NO_MATCHES_MESSAGE: &str =
    "No results match your filters. Try adjusting your search criteria.";

#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    /// Nothing searched yet.
    Idle,
    /// A search is in flight.
    Loading,
    /// The last attempt failed; stale results are gone.
    Error(String),
    /// The API answered without locations.
    NoResults(String),
    /// Results exist but the filters hide all of them.
    NoMatches,
    Results {
        summary: String,
        cards: Vec<DisplayRecord>,
    },
}

impl RenderState {
    /// Cards for a filtered view, or the no-matches placeholder.
    pub fn from_view(view: &FilteredView) -> Self {
        if view.is_empty() {
            return RenderState::NoMatches;
        }
        RenderState::Results {
            summary: results_summary(view.len()),
            cards: view.iter().map(normalize).collect(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RenderState::Error(_))
    }
}

/// `Found 1 location`, `Found 3 locations`.
pub fn results_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {count} location{plural}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{LocationRecord, RegionNames};

    #[test]
    fn summary_pluralizes() {
        assert_eq!(results_summary(1), "Found 1 location");
        assert_eq!(results_summary(0), "Found 0 locations");
        assert_eq!(results_summary(12), "Found 12 locations");
    }

    #[test]
    fn empty_view_is_no_matches() {
        assert_eq!(RenderState::from_view(&FilteredView::default()), RenderState::NoMatches);
    }

    #[test]
    fn view_renders_one_card_per_record() {
        let view = FilteredView::new(vec![
            LocationRecord {
                region_names: Some(RegionNames {
                    short_name: Some("Paris".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            LocationRecord::default(),
        ]);

        let RenderState::Results { summary, cards } = RenderState::from_view(&view) else {
            panic!("expected results");
        };
        assert_eq!(summary, "Found 2 locations");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].primary_name, "Paris");
        assert_eq!(cards[1].primary_name, "Unknown Location");
    }
}
