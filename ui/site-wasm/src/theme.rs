//! Dark-mode restore and toggle projection.
//!
//! The stored preference is applied before any listener is wired, so the
//! page never flashes the wrong theme. The in-memory flag is the source of
//! truth; this module only projects it onto the body class and the switch
//! indicator, and a page without the indicator pair degrades to the body
//! class alone.

use crate::animate;
use crate::dom;
use crate::events::on_click;
use crate::store::LocalPrefs;
use px_ui_core::theme::ROOT_CLASS;
use px_ui_core::{ThemeToggle, ThemeVisual};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

/// Theme-related elements of the current page, resolved once.
#[derive(Clone)]
pub struct ThemeElements {
    pub toggle_btn: Option<Element>,
    pub thumb: Option<Element>,
    pub switch_track: Option<Element>,
}

impl ThemeElements {
    pub fn bind() -> Self {
        Self {
            toggle_btn: dom::query(".dark-mode-toggle"),
            thumb: dom::query(".toggle-thumb"),
            switch_track: dom::query(".toggle-switch"),
        }
    }
}

/// Project a visual state onto the page. Idempotent.
pub fn apply(els: &ThemeElements, visual: ThemeVisual) {
    dom::toggle_class(&dom::body(), ROOT_CLASS, visual.dark);
    if let (Some(thumb), Some(track)) = (&els.thumb, &els.switch_track) {
        dom::set_style(thumb, "transform", visual.thumb_transform);
        dom::set_style(track, "background", visual.switch_background);
    }
}

/// Restore the persisted theme and wire the toggle control. Dashboard passes
/// `press_feedback` for the click pulse on the control.
pub fn install(press_feedback: bool) {
    let els = ThemeElements::bind();
    let toggle = Rc::new(RefCell::new(ThemeToggle::restore(LocalPrefs)));
    apply(&els, toggle.borrow().visual());

    if let Some(btn) = els.toggle_btn.clone() {
        let els = els.clone();
        let btn_for_pulse = btn.clone();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            if press_feedback {
                animate::press(&btn_for_pulse, "0.95");
            }
            let visual = toggle.borrow_mut().toggle();
            apply(&els, visual);
        });
    }
}
