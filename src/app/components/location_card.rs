use dioxus::prelude::*;

use crate::domain::models::{DetailRow, DisplayRecord};

/// One search result.
#[component]
pub fn LocationCard(card: DisplayRecord) -> Element {
    let type_class = card.type_class();

    rsx! {
        div { class: "c-location-card",
            div { class: "c-location-card__header",
                div {
                    div { class: "c-location-card__title", "{card.primary_name}" }
                    if !card.secondary_name.is_empty() {
                        div { class: "c-location-card__subtitle", "{card.secondary_name}" }
                    }
                }
                span { class: "c-type-badge c-type-badge--{type_class}", "{card.type_label}" }
            }
            div { class: "c-location-card__details",
                for (i, row) in card.details.iter().enumerate() {
                    DetailItem { key: "{i}", row: row.clone() }
                }
            }
        }
    }
}

#[component]
fn DetailItem(row: DetailRow) -> Element {
    let label = row.label();
    let value = row.value();
    let value_class = if row.is_coordinates() {
        "c-location-card__value c-location-card__value--coordinates"
    } else {
        "c-location-card__value"
    };

    rsx! {
        div { class: "c-location-card__item",
            div { class: "c-location-card__label", "{label}" }
            div { class: "{value_class}", "{value}" }
        }
    }
}
