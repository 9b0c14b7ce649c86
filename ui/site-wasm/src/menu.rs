//! Mobile menu controllers.
//!
//! The dashboard-side pages share a sidebar + overlay pair toggled by one
//! button; the landing page uses a slide-in drawer whose overlay is created
//! at init and whose items get staggered animation delays.

use crate::dom;
use crate::events::{on_click, on_event};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Breakpoint below which a nav click also closes the sidebar.
const MOBILE_BREAKPOINT: f64 = 768.0;

/// Sidebar menu for the dashboard-side pages. No toggle or sidebar on the
/// page means nothing to wire.
pub fn install_sidebar() {
    let Some(toggle) = dom::query(".mobile-menu-toggle") else {
        return;
    };
    let Some(sidebar) = dom::by_id("dashboard-sidebar") else {
        return;
    };
    let overlay = dom::by_id("sidebar-overlay");

    {
        let sidebar = sidebar.clone();
        let overlay = overlay.clone();
        on_click!(toggle, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            dom::flip_class(&sidebar, "sidebar-visible");
            if let Some(overlay) = &overlay {
                dom::flip_class(overlay, "active");
            }
        });
    }

    if let Some(overlay_el) = overlay.clone() {
        let sidebar = sidebar.clone();
        let overlay = overlay_el.clone();
        on_click!(overlay_el, move |_| {
            dom::remove_class(&sidebar, "sidebar-visible");
            dom::remove_class(&overlay, "active");
        });
    }

    // Close the sidebar when a nav item is tapped on a small screen.
    for item in dom::query_all(".nav-item") {
        let sidebar = sidebar.clone();
        let overlay = overlay.clone();
        on_click!(item, move |_| {
            if dom::inner_width() <= MOBILE_BREAKPOINT {
                dom::remove_class(&sidebar, "sidebar-visible");
                if let Some(overlay) = &overlay {
                    dom::remove_class(overlay, "active");
                }
            }
        });
    }
}

/// Landing drawer menu. Returns early when the page has no toggle or nav.
pub fn install_landing_drawer() {
    let Some(toggle) = dom::query(".mobile-menu-toggle") else {
        return;
    };
    let Some(nav) = dom::query(".header-nav") else {
        return;
    };
    let actions = dom::query_within(&nav, ".header-actions");

    let overlay = dom::create_element("div");
    dom::add_class(&overlay, "mobile-menu-overlay");
    let _ = dom::body().append_child(&overlay);

    let open = {
        let toggle = toggle.clone();
        let nav = nav.clone();
        let overlay = overlay.clone();
        let actions = actions.clone();
        Rc::new(move || {
            // Overlay first, drawer on the next frame so its transition runs.
            dom::add_class(&overlay, "active");
            let toggle = toggle.clone();
            let nav = nav.clone();
            let actions = actions.clone();
            let frame = Closure::once(move || {
                dom::add_class(&nav, "mobile-nav-open");
                dom::add_class(&toggle, "active");
                let _ = toggle.set_attribute("aria-expanded", "true");
                dom::set_style(&dom::body(), "overflow", "hidden");

                let links = dom::query_all_within(&nav, ".nav-link");
                for (i, link) in links.iter().enumerate() {
                    dom::set_style(link, "--nav-item-index", &i.to_string());
                }
                if let Some(actions) = &actions {
                    dom::set_style(actions, "--nav-item-index", &links.len().to_string());
                }
            });
            let _ = dom::window().request_animation_frame(frame.as_ref().unchecked_ref());
            frame.forget();
        })
    };

    let close = {
        let toggle = toggle.clone();
        let nav = nav.clone();
        let overlay = overlay.clone();
        Rc::new(move || {
            dom::remove_class(&nav, "mobile-nav-open");
            dom::remove_class(&toggle, "active");
            let _ = toggle.set_attribute("aria-expanded", "false");
            // Drop the overlay once the drawer transition has finished.
            let overlay = overlay.clone();
            Timeout::new(400, move || {
                dom::remove_class(&overlay, "active");
                dom::clear_style(&dom::body(), "overflow");
            })
            .forget();
        })
    };

    {
        let nav = nav.clone();
        let open = open.clone();
        let close = close.clone();
        on_click!(toggle, move |_| {
            if dom::has_class(&nav, "mobile-nav-open") {
                close();
            } else {
                open();
            }
        });
    }

    {
        let close = close.clone();
        on_click!(overlay, move |_| close());
    }

    for link in dom::query_all_within(&nav, ".nav-link") {
        let close = close.clone();
        on_event!(link, "click", move |_| close());
    }

    if let Some(actions) = actions {
        for button in dom::query_all_within(&actions, ".btn") {
            let close = close.clone();
            on_event!(button, "click", move |_| close());
        }
    }
}
