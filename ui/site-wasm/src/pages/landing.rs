//! Landing page controller.
//!
//! Anchor navigation with a fixed-header offset, scroll-position discipline
//! on entry, the drawer menu, the pricing period toggle, the FAQ accordion,
//! and the scroll-triggered reveal choreography.

use crate::events::{on_click, on_event, on_mouse};
use crate::{dom, menu};
use gloo_console::log;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

/// Fallback header offset when the header has not been laid out.
const HEADER_FALLBACK: i32 = 108;
/// Left padding inside the pricing toggle container.
const TOGGLE_PADDING: i32 = 12;

pub fn init() {
    force_top_on_entry();
    bind_smooth_scroll();
    bind_header_scroll();
    menu::install_landing_drawer();
    bind_pricing_toggle();
    bind_faq();
    bind_hover_tilt();
    bind_ripple();
    scroll_to_hash();
    schedule_scroll_animations();
    log!("Landing page loaded successfully.");
}

fn current_hash() -> String {
    dom::window()
        .location()
        .hash()
        .unwrap_or_default()
}

fn has_hash() -> bool {
    current_hash().len() > 1
}

fn scroll_top_now() {
    dom::window().scroll_to_with_x_and_y(0.0, 0.0);
    if let Some(root) = dom::document().document_element() {
        root.set_scroll_top(0.0);
    }
    dom::body().set_scroll_top(0.0);
}

/// The browser must not restore a previous scroll position; start at the
/// top unless arriving with a hash.
fn force_top_on_entry() {
    if let Ok(history) = dom::window().history() {
        let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
    }
    if !has_hash() {
        scroll_top_now();
    }
    dom::on_load(|| {
        if !has_hash() {
            scroll_top_now();
        }
    });
}

fn header_offset() -> f64 {
    dom::query(".landing-header")
        .map(|h| dom::offset_height(&h))
        .filter(|h| *h > 0)
        .unwrap_or(HEADER_FALLBACK) as f64
}

fn scroll_to_smooth(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&opts);
}

fn is_home_page() -> bool {
    let path = dom::window().location().pathname().unwrap_or_default();
    path == "/" || path == "/index.html" || path.ends_with('/')
}

fn bind_smooth_scroll() {
    let header_height = header_offset();
    let is_home = is_home_page();

    for link in dom::query_all("a[href^=\"#\"]") {
        let link_el = link.clone();
        on_click!(link, move |e: web_sys::MouseEvent| {
            let Some(href) = dom::attr(&link_el, "href") else {
                return;
            };
            if href == "#" || href.len() <= 1 {
                return;
            }
            e.prevent_default();

            // Off the home page, anchors resolve against it.
            if !is_home {
                let _ = dom::window().location().set_href(&format!("/{href}"));
                return;
            }

            if let Some(target) = dom::query(&href) {
                let top = target.get_bounding_client_rect().top() + dom::page_y_offset();
                scroll_to_smooth(top - header_height);

                // Keep the URL in sync without re-scrolling.
                if let Ok(history) = dom::window().history() {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
                }

                // Collapse the drawer if it was open.
                if let Some(nav) = dom::query(".header-nav") {
                    if dom::has_class(&nav, "mobile-nav-open") {
                        if let Some(toggle) = dom::query(".mobile-menu-toggle") {
                            dom::click(&toggle);
                        }
                    }
                }
            }
        });
    }
}

/// Arriving with a hash (from another page) scrolls to its section once the
/// page has loaded and settled.
fn scroll_to_hash() {
    let hash = current_hash();
    if hash.len() <= 1 {
        return;
    }
    let Some(target) = dom::query(&hash) else {
        return;
    };
    dom::on_load(move || {
        Timeout::new(200, move || {
            let top = target.get_bounding_client_rect().top() + dom::page_y_offset();
            scroll_to_smooth(top - header_offset());
        })
        .forget();
    });
}

/// The header is transparent until the page scrolls past 50 px.
fn bind_header_scroll() {
    let Some(header) = dom::query(".landing-header") else {
        return;
    };
    on_event!(dom::window(), "scroll", move |_| {
        if dom::page_y_offset() > 50.0 {
            dom::add_class(&header, "scrolled");
        } else {
            dom::remove_class(&header, "scrolled");
        }
    });
}

// ── Pricing ──

fn update_slider(slider: &Element, button: &Element) {
    let Some(html) = button.dyn_ref::<HtmlElement>() else {
        return;
    };
    let width = html.offset_width();
    let left = html.offset_left();
    dom::set_style(slider, "width", &format!("{width}px"));
    // The slider sits at `left: 12px`, so shift relative to the padding.
    dom::set_style(
        slider,
        "transform",
        &format!("translateX({}px) translateY(-50%)", left - TOGGLE_PADDING),
    );
}

fn active_toggle_button() -> Option<Element> {
    dom::query(".pricing-toggle-btn.pricing-toggle-active")
}

fn update_features(list: &Element, features: &[String]) {
    if features.is_empty() {
        return;
    }
    for (i, item) in dom::query_all_within(list, ".pricing-feature").iter().enumerate() {
        if let (Some(span), Some(text)) = (dom::query_within(item, "span"), features.get(i)) {
            dom::set_text(&span, text);
        }
    }
}

fn update_pricing_data(yearly: bool) {
    let (price_attr, features_attr, period_label) = if yearly {
        ("data-yearly-price", "data-yearly-features", "/year")
    } else {
        ("data-monthly-price", "data-monthly-features", "/month")
    };

    for card in dom::query_all(".pricing-card") {
        if let (Some(price), Some(amount)) =
            (dom::attr(&card, price_attr), dom::query_within(&card, ".pricing-amount"))
        {
            dom::set_text(&amount, &price);
        }
        if let Some(period) = dom::query_within(&card, ".pricing-period") {
            dom::set_text(&period, period_label);
        }

        let features: Vec<String> = dom::attr(&card, features_attr)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        if let Some(list) = dom::query_within(&card, ".pricing-features") {
            update_features(&list, &features);
        }
    }
}

fn bind_pricing_toggle() {
    let buttons = dom::query_all(".pricing-toggle-btn");
    let periods = dom::query_all(".pricing-period");
    let Some(slider) = dom::query(".pricing-toggle-slider") else {
        return;
    };
    if buttons.is_empty() || periods.is_empty() {
        return;
    }

    // Position the slider once the initial layout is in.
    {
        let slider = slider.clone();
        Timeout::new(10, move || {
            if let Some(active) = active_toggle_button() {
                update_slider(&slider, &active);
            }
        })
        .forget();
    }

    // Re-position on resize, debounced.
    {
        let slider = slider.clone();
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        on_event!(dom::window(), "resize", move |_| {
            let slider = slider.clone();
            let timeout = Timeout::new(100, move || {
                if let Some(active) = active_toggle_button() {
                    update_slider(&slider, &active);
                }
            });
            // Replacing the handle cancels the previous pending run.
            *pending.borrow_mut() = Some(timeout);
        });
    }

    for button in &buttons {
        let all = buttons.clone();
        let clicked = button.clone();
        let slider = slider.clone();
        on_click!(button.clone(), move |_| {
            for b in &all {
                dom::remove_class(b, "pricing-toggle-active");
            }
            dom::add_class(&clicked, "pricing-toggle-active");
            update_slider(&slider, &clicked);

            let yearly = dom::attr(&clicked, "data-period").as_deref() == Some("yearly");
            update_pricing_data(yearly);
        });
    }

    bind_plan_ctas();
}

/// Clear one selection marker from every pricing card and demote its CTA.
fn reset_cards(marker: &str) {
    for card in dom::query_all(".pricing-card") {
        dom::remove_class(&card, marker);
        if let Some(cta) = dom::query_within(&card, ".pricing-cta") {
            dom::remove_class(&cta, "pricing-cta-primary");
            dom::add_class(&cta, "pricing-cta-secondary");
        }
    }
}

/// "Choose Plan" selects the card; clicking the card body marks it featured.
fn bind_plan_ctas() {
    for cta in dom::query_all(".pricing-cta") {
        let cta_el = cta.clone();
        on_click!(cta, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let Some(card) = dom::closest(&cta_el, ".pricing-card") else {
                return;
            };
            reset_cards("pricing-card-selected");
            dom::add_class(&card, "pricing-card-selected");
            dom::remove_class(&cta_el, "pricing-cta-secondary");
            dom::add_class(&cta_el, "pricing-cta-primary");
        });
    }

    for card in dom::query_all(".pricing-card") {
        let card_el = card.clone();
        on_click!(card, move |e: web_sys::MouseEvent| {
            let on_cta = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| dom::closest(&el, ".pricing-cta").is_some());
            if on_cta {
                return;
            }
            reset_cards("pricing-card-featured");
            dom::add_class(&card_el, "pricing-card-featured");
            if let Some(cta) = dom::query_within(&card_el, ".pricing-cta") {
                dom::remove_class(&cta, "pricing-cta-secondary");
                dom::add_class(&cta, "pricing-cta-primary");
            }
        });
    }
}

// ── FAQ ──

fn bind_faq() {
    let items = dom::query_all(".faq-item");

    for toggle in dom::query_all(".faq-toggle") {
        let items = items.clone();
        let toggle_el = toggle.clone();
        on_click!(toggle, move |e: web_sys::MouseEvent| {
            e.stop_propagation();
            let Some(current) = dom::closest(&toggle_el, ".faq-item") else {
                return;
            };

            // Exclusive accordion: collapse every other item.
            for item in &items {
                if *item != current {
                    dom::remove_class(item, "faq-item-expanded");
                    if let Some(icon) = dom::query_within(item, ".faq-icon-wrapper") {
                        dom::remove_class(&icon, "faq-icon-expanded");
                    }
                }
            }

            dom::flip_class(&current, "faq-item-expanded");
            if let Some(icon) = dom::query_within(&toggle_el, ".faq-icon-wrapper") {
                dom::flip_class(&icon, "faq-icon-expanded");
            }
        });
    }

    // The whole question row delegates to its toggle.
    for item in &items {
        if let Some(question) = dom::query_within(item, ".faq-question") {
            let item = item.clone();
            on_click!(question, move |_| {
                if let Some(toggle) = dom::query_within(&item, ".faq-toggle") {
                    dom::click(&toggle);
                }
            });
        }
    }

    let filters = dom::query_all(".faq-filter-btn");
    for button in &filters {
        let all = filters.clone();
        let clicked = button.clone();
        on_click!(button.clone(), move |_| {
            for b in &all {
                dom::remove_class(b, "faq-filter-active");
            }
            dom::add_class(&clicked, "faq-filter-active");
        });
    }
}

// ── Hover and click effects ──

fn bind_hover_tilt() {
    for card in dom::query_all(".validation-card") {
        let moved = card.clone();
        on_mouse!(card.clone(), "mousemove", move |e: web_sys::MouseEvent| {
            let rect = moved.get_bounding_client_rect();
            let x = e.client_x() as f64 - rect.left();
            let y = e.client_y() as f64 - rect.top();
            let center_x = rect.width() / 2.0;
            let center_y = rect.height() / 2.0;
            let rotate_x = (y - center_y) / 10.0;
            let rotate_y = (center_x - x) / 10.0;
            dom::set_style(
                &moved,
                "transform",
                &format!(
                    "perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) \
                     translateY(-12px) scale(1.03)"
                ),
            );
        });

        let left = card.clone();
        on_event!(card, "mouseleave", move |_| {
            dom::set_style(
                &left,
                "transform",
                "perspective(1000px) rotateX(0) rotateY(0) translateY(0) scale(1)",
            );
        });
    }
}

fn bind_ripple() {
    for button in dom::query_all(".btn, .pricing-cta, .hero-cta, .footer-hero-cta-button") {
        let btn = button.clone();
        on_click!(button, move |e: web_sys::MouseEvent| {
            let rect = btn.get_bounding_client_rect();
            let size = rect.width().max(rect.height());
            let x = e.client_x() as f64 - rect.left() - size / 2.0;
            let y = e.client_y() as f64 - rect.top() - size / 2.0;

            let ripple = dom::create_element("span");
            dom::set_style(&ripple, "width", &format!("{size}px"));
            dom::set_style(&ripple, "height", &format!("{size}px"));
            dom::set_style(&ripple, "left", &format!("{x}px"));
            dom::set_style(&ripple, "top", &format!("{y}px"));
            dom::add_class(&ripple, "ripple-effect");
            let _ = btn.append_child(&ripple);

            Timeout::new(600, move || ripple.remove()).forget();
        });
    }
}

// ── Scroll-triggered reveals ──

/// Reveal animations start 300 ms after load so the layout has settled and
/// nothing shakes.
fn schedule_scroll_animations() {
    dom::on_load(|| {
        Timeout::new(300, init_scroll_animations).forget();
    });
}

fn init_scroll_animations() {
    // One more frame so observed geometry is final.
    let frame = Closure::once(run_scroll_animations);
    let _ = dom::window().request_animation_frame(frame.as_ref().unchecked_ref());
    frame.forget();
}

fn make_observer<F>(threshold: f64, root_margin: &str, on_visible: F) -> IntersectionObserver
where
    F: Fn(Element) + 'static,
{
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(threshold));
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options).unwrap();
    cb.forget();
    observer
}

fn stagger(items: &[Element], step_ms: u32) {
    for (i, item) in items.iter().enumerate() {
        let item = item.clone();
        Timeout::new(i as u32 * step_ms, move || {
            dom::add_class(&item, "animate-in");
        })
        .forget();
    }
}

fn observe_later(observer: &IntersectionObserver, el: &Element, delay: u32) {
    let observer = observer.clone();
    let el = el.clone();
    Timeout::new(delay, move || observer.observe(&el)).forget();
}

fn run_scroll_animations() {
    let observer = make_observer(0.1, "0px 0px -100px 0px", |target| {
        dom::add_class(&target, "animate-in");
        let feature_items = dom::query_all_within(&target, ".feature-card-item.stagger-item");
        if !feature_items.is_empty() {
            stagger(&feature_items, 80);
        } else {
            stagger(&dom::query_all_within(&target, ".stagger-item"), 100);
        }
    });

    for section in dom::query_all("section") {
        dom::add_class(&section, "fade-in-up");
        observer.observe(&section);
    }

    // Hero sequence runs immediately on a fixed clock.
    if let Some(description) = dom::query(".hero-description") {
        Timeout::new(500, move || dom::add_class(&description, "animate-in")).forget();
    }
    if let Some(cta) = dom::query(".hero-cta") {
        Timeout::new(1000, move || dom::add_class(&cta, "animate-in")).forget();
    }
    for (i, item) in dom::query_all(".feature-item").into_iter().enumerate() {
        Timeout::new(900 + i as u32 * 100, move || {
            dom::add_class(&item, "animate-in");
        })
        .forget();
    }

    // Card grids reveal per card.
    for container in dom::query_all(".validation-cards, .pricing-cards") {
        let cards = dom::query_all_within(&container, ".validation-card, .pricing-card");
        for (i, card) in cards.iter().enumerate() {
            dom::add_class(card, "stagger-item");
            dom::add_class(card, "fade-in-up");
            observe_later(&observer, card, i as u32 * 50);
        }
    }

    // Feature lists animate only once their last item is on screen.
    let feature_list_observer = make_observer(0.95, "0px 0px 0px 0px", |target| {
        let items = dom::query_all_within(&target, ".feature-card-item.stagger-item");
        let Some(last) = items.last() else {
            return;
        };
        let rect = last.get_bounding_client_rect();
        if rect.top() < dom::inner_height() && rect.bottom() > 0.0 {
            stagger(&items, 80);
        }
    });

    for (i, card) in dom::query_all(".feature-card-light, .feature-card-dark")
        .into_iter()
        .enumerate()
    {
        for item in dom::query_all_within(&card, ".feature-card-item") {
            dom::add_class(&item, "stagger-item");
        }
        if dom::has_class(&card, "feature-card-dark") {
            for selector in [
                ".feature-card-brand",
                ".feature-card-title",
                ".feature-card-description",
            ] {
                if let Some(el) = dom::query_within(&card, selector) {
                    dom::add_class(&el, "stagger-item");
                }
            }
        }
        if let Some(list) = dom::query_within(&card, ".feature-card-list") {
            observe_later(&feature_list_observer, &list, i as u32 * 50);
        }
        observe_later(&observer, &card, i as u32 * 50);
    }

    if let Some(row) = dom::query(".features-row-dark") {
        observer.observe(&row);
        for item in dom::query_all_within(&row, ".feature-card-item") {
            dom::add_class(&item, "stagger-item");
        }
    }

    for selector in [
        ".footer-hero-cta",
        ".footer-newsletter",
        ".footer-main",
        ".footer-copyright",
    ] {
        if let Some(el) = dom::query(selector) {
            observer.observe(&el);
        }
    }
}
