//! Click-to-navigate for server-rendered category and recipe cards.

use gloo::events::EventListener;
use shei_deli::Route;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{document, navigate};

fn bind(selector: &str, attr: &'static str, to_route: fn(Option<String>) -> Option<Route>) {
    let Some(cards) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return;
    };

    for i in 0..cards.length() {
        let Some(card) = cards.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let target = card.clone();
        EventListener::new(&target, "click", move |_| {
            if let Some(route) = to_route(card.get_attribute(attr)) {
                navigate(&route);
            }
        })
        .forget();
    }
}

/// `.category-card[data-category]` goes to `/category/{key}`,
/// `.recipe-card[data-recipe-id]` goes to `/recipe/{id}`.
pub fn bind_cards() {
    bind(".category-card", "data-category", Route::from_category_attr);
    bind(".recipe-card", "data-recipe-id", Route::from_recipe_attr);
}
