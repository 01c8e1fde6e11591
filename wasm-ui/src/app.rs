//! Page bootstrap: configuration, bindings and widget mounting.

use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use shei_deli::ClientConfig;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::components::{SearchPanel, SearchPanelProps, StarRatingProps, StarRatingWidget};
use crate::dom::document;
use crate::forms::bind_forms;
use crate::nav::bind_cards;

/// Run [`init`] once the DOM is parsed.
pub fn start() {
    console::log!(format!(
        "shei-deli ui build {}@{} {}",
        env!("BUILD_HOST"),
        env!("BUILD_COMMIT"),
        env!("BUILD_TIMESTAMP")
    ));

    let Some(document) = document() else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| init()).forget();
    } else {
        init();
    }
}

/// Read settings from `<body data-api-base data-user-id>`.
pub fn read_config() -> ClientConfig {
    let body = document().and_then(|d| d.body());
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    ClientConfig::from_overrides(
        attr("data-api-base").as_deref(),
        attr("data-user-id").as_deref(),
    )
}

/// Wire up everything the current page offers.
pub fn init() {
    let config = Rc::new(read_config());

    bind_cards();
    bind_forms(config.clone());
    mount_star_ratings();
    mount_search(config);
}

fn elements(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Mount a star widget in every `[data-star-rating]` element.
///
/// `data-star-rating` holds the starting value, `data-interactive` makes
/// it clickable and `data-input` names the hidden field (default `rating`).
fn mount_star_ratings() {
    for host in elements("[data-star-rating]") {
        let rating = host
            .get_attribute("data-star-rating")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        let props = StarRatingProps {
            rating,
            interactive: host.has_attribute("data-interactive"),
            input_id: host
                .get_attribute("data-input")
                .unwrap_or_else(|| "rating".to_string())
                .into(),
        };
        yew::Renderer::<StarRatingWidget>::with_root_and_props(host, props).render();
    }
}

/// Mount the search panel into `#searchRoot` when the page has one.
fn mount_search(config: Rc<ClientConfig>) {
    let Some(root) = document().and_then(|d| d.get_element_by_id("searchRoot")) else {
        return;
    };
    let placeholder = root.get_attribute("data-placeholder");
    let props = SearchPanelProps {
        config,
        placeholder: placeholder
            .map(Into::into)
            .unwrap_or_else(|| "Search recipes...".into()),
    };
    yew::Renderer::<SearchPanel>::with_root_and_props(root, props).render();
}
