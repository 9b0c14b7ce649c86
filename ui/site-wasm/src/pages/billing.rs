//! Billing page: theme sync and exclusive plan selection.
//!
//! A pricing card, its plan button, and the card's submit event all land in
//! the same activation path, so the selected pair can never disagree.

use crate::events::{on_click, on_event};
use crate::tabs::TabsBinding;
use crate::{animate, dom, menu, theme};
use px_ui_core::{Flags, TabSet};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;

pub fn init() {
    theme::install(false);
    bind_plan_selection();
    menu::install_sidebar();
    entry_animations();
}

fn bind_plan_selection() {
    let cards = dom::query_all(".pricing-card");
    let buttons = dom::query_all(".choose-plan-btn");
    if cards.is_empty() || cards.len() != buttons.len() {
        return;
    }

    // Cards and buttons are parallel collections keyed by position.
    let keyed = |els: &[web_sys::Element]| {
        els.iter()
            .enumerate()
            .map(|(i, el)| (el.clone(), i.to_string()))
            .collect::<Vec<_>>()
    };
    let binding = Rc::new(TabsBinding {
        triggers: keyed(&cards),
        panes: keyed(&buttons),
        trigger_active: "pricing-card--active",
        pane_active: "choose-plan-btn--active",
        aux: Vec::new(),
    });
    let tabs = Rc::new(RefCell::new(TabSet::new(binding.keys())));

    let select = {
        let tabs = tabs.clone();
        let binding = binding.clone();
        Rc::new(move |key: &str| {
            if let Some(activation) = tabs.borrow_mut().activate(key, &Flags::new()) {
                binding.apply(&activation);
            }
        })
    };

    for (index, card) in cards.iter().enumerate() {
        let key = index.to_string();

        {
            let select = select.clone();
            let key = key.clone();
            on_click!(card.clone(), move |e: web_sys::MouseEvent| {
                // Plan button clicks have their own handler.
                let on_button = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .is_some_and(|el| {
                        el.class_list().contains("choose-plan-btn")
                            || dom::closest(&el, ".choose-plan-btn").is_some()
                    });
                if on_button {
                    return;
                }
                select(&key);
            });
        }

        // The cards are forms; selecting a plan submits one.
        {
            let select = select.clone();
            let key = key.clone();
            on_event!(card.clone(), "submit", move |e: web_sys::Event| {
                e.prevent_default();
                select(&key);
            });
        }
    }

    for (index, button) in buttons.iter().enumerate() {
        let select = select.clone();
        let key = index.to_string();
        on_click!(button.clone(), move |e: web_sys::MouseEvent| {
            e.stop_propagation();
            e.prevent_default();
            select(&key);
        });
    }
}

fn entry_animations() {
    const TRANSITION: &str = "opacity 0.4s ease, transform 0.4s ease";
    if let Some(greeting) = dom::query(".dashboard-greeting") {
        animate::reveal(&greeting, "translateY(-10px)", "translateY(0)", TRANSITION, 100);
    }
    animate::reveal_all(
        &dom::query_all(".pricing-card"),
        "translateY(20px)",
        "translateY(0)",
        TRANSITION,
        200,
        100,
    );
    if let Some(history) = dom::query(".billing-history-section") {
        animate::reveal(&history, "translateY(20px)", "translateY(0)", TRANSITION, 600);
    }
}
