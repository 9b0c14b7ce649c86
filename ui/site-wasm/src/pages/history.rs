//! History page: theme sync, results navigation, entry animations.

use crate::events::on_click;
use crate::{animate, dom, menu, theme};

pub fn init() {
    theme::install(false);
    bind_see_results();
    menu::install_sidebar();
    entry_animations();
}

fn bind_see_results() {
    for button in dom::query_all(".see-results-btn") {
        on_click!(button, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let _ = dom::window().location().set_href(super::RESULTS_PATH);
        });
    }
}

fn entry_animations() {
    if let Some(greeting) = dom::query(".dashboard-greeting") {
        animate::reveal(
            &greeting,
            "translateY(-20px)",
            "translateY(0)",
            "all 0.5s ease",
            100,
        );
    }
    animate::reveal_all(
        &dom::query_all(".dashboard-card"),
        "translateY(20px)",
        "translateY(0)",
        "all 0.5s ease",
        200,
        100,
    );
    animate::reveal_all(
        &dom::query_all(".history-item"),
        "translateX(-20px)",
        "translateX(0)",
        "all 0.4s ease",
        400,
        100,
    );
}
