use dioxus::prelude::*;

/// Page header; shows which transport searches go through.
///
/// `mode` is `"direct"`, `"proxy"`, or empty when unconfigured.
#[component]
pub fn AppHeader(mode: &'static str) -> Element {
    let mode_label = match mode {
        "proxy" => "Proxy mode",
        "direct" => "Direct mode",
        _ => "Not configured",
    };

    rsx! {
        header { class: "c-header",
            h1 { class: "c-header__title", "🚗 Car Rental Location Finder" }
            p { class: "c-header__subtitle",
                "Search pickup locations by city, airport, or neighborhood"
            }
            span { class: "c-header__mode", "{mode_label}" }
        }
    }
}
