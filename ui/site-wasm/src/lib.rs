//! Proximy web client WASM front-end.
//!
//! Pure Rust + WASM implementation of the site's client-side interactivity.
//! Modularised per concern; `<body data-page>` selects which page controller
//! runs, and a page missing the attribute initialises nothing.

pub mod animate;
pub mod dom;
pub mod events;
pub mod menu;
pub mod pages;
pub mod snippets;
pub mod store;
pub mod tabs;
pub mod theme;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let doc = gloo_utils::document();
    if doc.ready_state() == "loading" {
        events::on_event!(doc, "DOMContentLoaded", move |_| init());
    } else {
        init();
    }
}

/// Dispatch to the page controller named by `<body data-page>`.
fn init() {
    let page = dom::body_attr("data-page").unwrap_or_default();
    match page.as_str() {
        "landing" => pages::landing::init(),
        "auth" => pages::auth::init(),
        "dashboard" => pages::dashboard::init(),
        "billing" => pages::billing::init(),
        "history" => pages::history::init(),
        "settings" => pages::settings::init(),
        _ => {}
    }
}
