#![cfg(not(target_arch = "wasm32"))]

mod common;

use serde_json::json;

use car_rental_location_finder::domain::models::{SortOption, TypeFilter};
use car_rental_location_finder::domain::services::{DirectClient, SearchClient};
use car_rental_location_finder::shared::errors::SearchError;
use car_rental_location_finder::shared::state::SearchSession;
use car_rental_location_finder::shared::view_state::{RenderState, NO_RESULTS_MESSAGE};

use common::{closed_port, json_upstream, paris_payload, serve};

fn session_for(base_url: &str) -> SearchSession {
    SearchSession::with_client(SearchClient::Direct(
        DirectClient::new("test-key", "expedia13.p.rapidapi.com").with_base_url(base_url),
    ))
}

#[tokio::test]
async fn paris_search_then_airport_filter() {
    let base = serve(json_upstream(200, paris_payload())).await;
    let mut session = session_for(&base);

    session.run_search("Paris").await.unwrap();
    assert!(!session.is_busy());
    assert!(session.filters_visible());

    let RenderState::Results { summary, cards } = session.render_state() else {
        panic!("expected results");
    };
    assert_eq!(summary, "Found 2 locations");
    assert_eq!(cards[0].primary_name, "Paris");
    assert_eq!(cards[0].type_label, "City");
    assert_eq!(cards[1].primary_name, "Paris (CDG - Charles de Gaulle)");
    assert_eq!(cards[1].type_label, "Airport");

    session.set_type_filter(TypeFilter::Only("AIRPORT".into()));
    let RenderState::Results { summary, cards } = session.render_state() else {
        panic!("expected results");
    };
    assert_eq!(summary, "Found 1 location");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].type_code, "AIRPORT");
    assert!(cards[0].details.iter().any(|row| row.value() == "CDG"));

    // Filtering never touches the stored results
    assert_eq!(session.results().map(|r| r.len()), Some(2));
}

#[tokio::test]
async fn text_filter_and_sort_over_fetched_results() {
    let base = serve(json_upstream(200, paris_payload())).await;
    let mut session = session_for(&base);
    session.run_search("Paris").await.unwrap();

    session.set_search_text("  CHARLES ");
    let view = session.view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].airport_code(), Some("CDG"));

    session.set_search_text("");
    session.set_sort_option(SortOption::Name);
    let names: Vec<_> = session
        .view()
        .iter()
        .map(|r| r.names().short_name().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Paris", "Paris (CDG - Charles de Gaulle)"]);
}

#[tokio::test]
async fn new_search_resets_filters() {
    let base = serve(json_upstream(200, paris_payload())).await;
    let mut session = session_for(&base);
    session.run_search("Paris").await.unwrap();
    session.set_type_filter(TypeFilter::Only("NEIGHBORHOOD".into()));
    assert_eq!(session.render_state(), RenderState::NoMatches);

    session.run_search("Paris").await.unwrap();
    assert_eq!(session.criteria().type_filter, TypeFilter::All);
    assert_eq!(session.view().len(), 2);
}

#[tokio::test]
async fn empty_answer_shows_neutral_message() {
    let base = serve(json_upstream(200, json!({ "status": true, "data": [] }))).await;
    let mut session = session_for(&base);

    session.run_search("Atlantis").await.unwrap();

    assert_eq!(
        session.render_state(),
        RenderState::NoResults(NO_RESULTS_MESSAGE.to_string())
    );
    assert!(!session.filters_visible());
}

#[tokio::test]
async fn failure_clears_results_and_busy_state() {
    let base = serve(json_upstream(200, paris_payload())).await;
    let mut session = session_for(&base);
    session.run_search("Paris").await.unwrap();

    let mut offline = session_for(&closed_port().await);
    offline.run_search("Paris").await.unwrap_err();
    assert!(!offline.is_busy());
    assert!(offline.results().is_none());
    assert!(matches!(offline.last_error(), Some(SearchError::NetworkFailure { .. })));
    assert!(offline.render_state().is_error());

    let err = session.run_search("   ").await.unwrap_err();
    assert_eq!(err, SearchError::EmptyQuery);
    assert!(session.results().is_none());
}
