pub mod common;
pub mod filter_bar;
pub mod location_card;
pub mod results_panel;
pub mod search_form;

pub use common::{EmptyState, ErrorBanner, LoadingText};
pub use filter_bar::FilterBar;
pub use location_card::LocationCard;
pub use results_panel::ResultsPanel;
pub use search_form::SearchForm;
