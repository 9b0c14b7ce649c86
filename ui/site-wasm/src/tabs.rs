//! DOM projection for the option/tab controller.
//!
//! Triggers and panes are matched by a shared key attribute; auxiliary
//! panels are matched by the rule targets of the page's `TabSet`. Applying
//! an [`Activation`] runs the full deactivate/activate cycle, so repeated
//! applications of the same key are harmless.

use crate::dom;
use px_ui_core::Activation;
use web_sys::Element;

/// One auxiliary panel and the inline `display` it gets while visible.
pub struct AuxPanel {
    pub target: &'static str,
    pub el: Element,
    pub display: &'static str,
}

pub struct TabsBinding {
    pub triggers: Vec<(Element, String)>,
    pub panes: Vec<(Element, String)>,
    pub trigger_active: &'static str,
    pub pane_active: &'static str,
    pub aux: Vec<AuxPanel>,
}

impl TabsBinding {
    /// Collect `(element, key)` pairs for a selector, keyed by `key_attr`.
    /// Elements without the attribute are skipped.
    pub fn collect(selector: &str, key_attr: &str) -> Vec<(Element, String)> {
        dom::query_all(selector)
            .into_iter()
            .filter_map(|el| {
                let key = dom::attr(&el, key_attr)?;
                Some((el, key))
            })
            .collect()
    }

    /// Key carrying the active marker in the initial markup, if any.
    pub fn initial_active(&self) -> Option<String> {
        self.triggers
            .iter()
            .find(|(el, _)| dom::has_class(el, self.trigger_active))
            .map(|(_, key)| key.clone())
    }

    pub fn keys(&self) -> Vec<String> {
        self.triggers.iter().map(|(_, key)| key.clone()).collect()
    }

    pub fn apply(&self, activation: &Activation) {
        for (el, key) in &self.triggers {
            dom::toggle_class(el, self.trigger_active, *key == activation.key);
        }
        for (el, key) in &self.panes {
            dom::toggle_class(el, self.pane_active, *key == activation.key);
        }
        for change in &activation.aux {
            if let Some(panel) = self.aux.iter().find(|p| p.target == change.target) {
                let display = if change.visible { panel.display } else { "none" };
                dom::set_style(&panel.el, "display", display);
            }
        }
    }
}
