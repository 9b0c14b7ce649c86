//! Timed visual sequences.
//!
//! Fire-and-forget `Timeout`s mirroring the site's `setTimeout` choreography:
//! press pulses, staggered entry reveals, temporary text/style swaps. None
//! of these are awaited or cancelled; overlapping triggers simply re-run the
//! sequence.

use crate::dom;
use gloo_timers::callback::Timeout;
use web_sys::Element;

/// Press feedback: scale down, then back to `scale(1)` after 150 ms.
pub fn press(el: &Element, scale: &str) {
    dom::set_style(el, "transform", &format!("scale({scale})"));
    let el = el.clone();
    Timeout::new(150, move || {
        dom::set_style(&el, "transform", "scale(1)");
    })
    .forget();
}

/// Entry reveal: park the element hidden at `from`, then transition to
/// `to` after `delay` ms.
pub fn reveal(el: &Element, from: &str, to: &str, transition: &str, delay: u32) {
    dom::set_style(el, "opacity", "0");
    dom::set_style(el, "transform", from);
    let el = el.clone();
    let to = to.to_owned();
    let transition = transition.to_owned();
    Timeout::new(delay, move || {
        dom::set_style(&el, "transition", &transition);
        dom::set_style(&el, "opacity", "1");
        dom::set_style(&el, "transform", &to);
    })
    .forget();
}

/// Staggered entry reveal for a collection: `base + index * step` ms each.
pub fn reveal_all(
    els: &[Element],
    from: &str,
    to: &str,
    transition: &str,
    base: u32,
    step: u32,
) {
    for (i, el) in els.iter().enumerate() {
        reveal(el, from, to, transition, base + (i as u32) * step);
    }
}

/// Swap an element's text for `restore_after` ms, then put the original
/// back.
pub fn swap_text(el: &Element, temporary: &str, restore_after: u32) {
    let original = dom::text(el);
    dom::set_text(el, temporary);
    let el = el.clone();
    Timeout::new(restore_after, move || {
        dom::set_text(&el, &original);
    })
    .forget();
}

/// Set an inline style, then clear it back to the stylesheet value after
/// `restore_after` ms.
pub fn style_for(el: &Element, prop: &'static str, value: &str, restore_after: u32) {
    dom::set_style(el, prop, value);
    let el = el.clone();
    Timeout::new(restore_after, move || {
        dom::clear_style(&el, prop);
    })
    .forget();
}

/// Set an inline style, then overwrite it with `restore` after
/// `restore_after` ms.
pub fn style_then(
    el: &Element,
    prop: &'static str,
    value: &str,
    restore: &str,
    restore_after: u32,
) {
    dom::set_style(el, prop, value);
    let el = el.clone();
    let restore = restore.to_owned();
    Timeout::new(restore_after, move || {
        dom::set_style(&el, prop, &restore);
    })
    .forget();
}
