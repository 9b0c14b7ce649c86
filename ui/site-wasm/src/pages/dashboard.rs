//! Dashboard page controller.
//!
//! Owns the option/tab state, the API-key-generated flag that gates the
//! results section, and the page's cosmetic handlers (upload, snippets,
//! clipboard, entry animations).

use crate::events::{on_click, on_event};
use crate::tabs::{AuxPanel, TabsBinding};
use crate::{animate, dom, menu, snippets, theme};
use gloo_console::{error, log, warn};
use gloo_timers::callback::Timeout;
use px_ui_core::{AuxRule, AuxVisibility, Flags, TabSet};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, Element, HtmlInputElement, HtmlTextAreaElement};

const HISTORY_CARD: &str = "history-card";
const RESULTS_PLACEHOLDER: &str = "results-placeholder";
const RESULTS_SECTION: &str = "results-section";
/// Raised once a key has been generated; the results section on the API tab
/// is gated on it.
const API_KEY_FLAG: &str = "api-key-generated";

pub fn init() {
    theme::install(true);
    let flags = Rc::new(RefCell::new(Flags::new()));
    bind_option_tabs(&flags);
    bind_textarea();
    bind_nav_items();
    bind_buttons();
    bind_api_key(&flags);
    bind_language_tabs();
    bind_file_upload();
    bind_email_validation();
    bind_integrations();
    menu::install_sidebar();
    entry_animations();
    bind_progress_bar();
}

/// The aux table as shipped: which side panels each option key touches.
fn aux_rules() -> Vec<AuxRule> {
    vec![
        AuxRule::new(
            HISTORY_CARD,
            AuxVisibility::ExceptKeys(vec![
                "single-email".into(),
                "api".into(),
                "integrations".into(),
            ]),
        ),
        AuxRule::new(
            RESULTS_PLACEHOLDER,
            AuxVisibility::ForKeys(vec!["single-email".into()]),
        ),
        AuxRule::new(
            RESULTS_SECTION,
            AuxVisibility::ForKeysWhenFlag {
                keys: vec!["api".into()],
                flag: API_KEY_FLAG.into(),
            },
        ),
    ]
}

fn bind_option_tabs(flags: &Rc<RefCell<Flags>>) {
    let triggers = TabsBinding::collect(".option-btn", "data-option");
    let panes = TabsBinding::collect(".tab-pane", "data-tab");
    if triggers.is_empty() {
        return;
    }

    let mut aux = Vec::new();
    if let Some(el) = dom::query(".history-card") {
        aux.push(AuxPanel {
            target: HISTORY_CARD,
            el,
            display: "block",
        });
    }
    if let Some(el) = dom::by_id("results-placeholder") {
        aux.push(AuxPanel {
            target: RESULTS_PLACEHOLDER,
            el,
            display: "block",
        });
    }
    if let Some(el) = dom::by_id("results-section") {
        aux.push(AuxPanel {
            target: RESULTS_SECTION,
            el,
            display: "block",
        });
    }

    // Keys come from the panes: an option button without a matching pane is
    // a configuration mistake and activating it must be a no-op.
    let pane_keys: Vec<String> = panes.iter().map(|(_, key)| key.clone()).collect();
    let binding = Rc::new(TabsBinding {
        triggers,
        panes,
        trigger_active: "option-btn--active",
        pane_active: "tab-pane--active",
        aux,
    });
    let mut set = TabSet::new(pane_keys).with_rules(aux_rules());
    if let Some(initial) = binding.initial_active() {
        set = set.with_active(&initial);
    }
    let tabs = Rc::new(RefCell::new(set));

    for (trigger, key) in binding.triggers.clone() {
        {
            let tabs = tabs.clone();
            let binding = binding.clone();
            let flags = flags.clone();
            let key = key.clone();
            let clicked = trigger.clone();
            on_click!(trigger.clone(), move |e: web_sys::MouseEvent| {
                e.prevent_default();
                let activation = tabs.borrow_mut().activate(&key, &flags.borrow());
                let Some(activation) = activation else {
                    warn!(format!("no tab pane matches option {key:?}"));
                    return;
                };
                binding.apply(&activation);
                for (el, _) in &binding.triggers {
                    dom::set_style(el, "transform", "scale(1)");
                }
                animate::press(&clicked, "0.98");
            });
        }

        // Hover lift on inactive options.
        let enter = trigger.clone();
        on_event!(trigger.clone(), "mouseenter", move |_| {
            if !dom::has_class(&enter, "option-btn--active") {
                dom::set_style(&enter, "transform", "translateY(-2px)");
            }
        });
        let leave = trigger.clone();
        on_event!(trigger, "mouseleave", move |_| {
            if !dom::has_class(&leave, "option-btn--active") {
                dom::set_style(&leave, "transform", "translateY(0)");
            }
        });
    }
}

fn bind_textarea() {
    let Some(textarea) = dom::by_id_typed::<HtmlTextAreaElement>("email-list-textarea") else {
        return;
    };
    let label = dom::query(".dimension-label");

    {
        let textarea = textarea.clone();
        let label = label.clone();
        on_event!(textarea.clone(), "input", move |_| {
            let value = textarea.value();
            let lines = value.lines().filter(|line| !line.trim().is_empty()).count();
            let chars = value.encode_utf16().count();
            if let Some(label) = &label {
                dom::set_text(label, &format!("{chars} Fill × {lines}"));
                dom::set_style(label, "opacity", "0");
                dom::set_style(label, "transform", "scale(0.95)");
                let label = label.clone();
                Timeout::new(10, move || {
                    dom::set_style(&label, "transition", "all 0.2s ease");
                    dom::set_style(&label, "opacity", "1");
                    dom::set_style(&label, "transform", "scale(1)");
                })
                .forget();
            }
        });
    }

    let focused: Element = textarea.clone().into();
    on_event!(textarea, "focus", move |_| {
        animate::style_then(&focused, "transform", "scale(1.002)", "scale(1)", 200);
    });
}

fn bind_nav_items() {
    let items = dom::query_all(".nav-item");
    for item in &items {
        let enter = item.clone();
        on_event!(item.clone(), "mouseenter", move |_| {
            if !dom::has_class(&enter, "nav-item--active") {
                dom::set_style(&enter, "transform", "translateX(4px)");
            }
        });
        let leave = item.clone();
        on_event!(item.clone(), "mouseleave", move |_| {
            dom::set_style(&leave, "transform", "translateX(0)");
        });

        let clicked = item.clone();
        let all = items.clone();
        on_click!(item.clone(), move |e: web_sys::MouseEvent| {
            let href = dom::attr(&clicked, "href");
            if href.as_deref().is_none_or(|h| h == "#") {
                e.prevent_default();
            }
            for nav in &all {
                dom::remove_class(nav, "nav-item--active");
            }
            dom::add_class(&clicked, "nav-item--active");
            animate::press(&clicked, "0.98");
        });
    }
}

fn bind_buttons() {
    for button in dom::query_all(".see-results-btn") {
        let pressed = button.clone();
        on_click!(button, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            animate::press(&pressed, "0.95");
            let _ = dom::window().location().set_href(super::RESULTS_PATH);
        });
    }

    if let Some(upgrade) = dom::query(".upgrade-button") {
        let pressed = upgrade.clone();
        on_click!(upgrade, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            animate::press(&pressed, "0.98");
        });
    }

    if let Some(back) = dom::query(".back-button") {
        on_click!(back, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            if let Ok(history) = dom::window().history() {
                let _ = history.back();
            }
        });
    }
}

/// Write to the clipboard; on success the button's label reads "Copied" for
/// two seconds.
fn copy_to_clipboard(text: String, feedback: Element) {
    let clipboard = dom::window().navigator().clipboard();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => animate::swap_text(&feedback, "Copied", 2000),
            Err(err) => error!("failed to copy:", err),
        }
    });
}

fn bind_api_key(flags: &Rc<RefCell<Flags>>) {
    let generate = dom::query(".generate-api-btn");
    let key_section = dom::by_id("api-key-section");
    let key_display = dom::by_id("api-key-display");
    let results_section = dom::by_id("results-section");
    let api_content = dom::query(".api-content");

    if let (Some(generate), Some(section), Some(display)) = (generate, key_section, key_display) {
        let flags = flags.clone();
        let pressed = generate.clone();
        on_click!(generate, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            dom::set_style(&section, "display", "none");
            dom::set_style(&display, "display", "flex");
            if let Some(content) = &api_content {
                dom::add_class(content, "api-key-generated");
            }
            if let Some(results) = &results_section {
                dom::set_style(results, "display", "block");
            }
            flags.borrow_mut().set(API_KEY_FLAG, true);
            animate::press(&pressed, "0.95");
        });
    }

    if let Some(copy) = dom::query(".copy-api-btn") {
        let copy_btn = copy.clone();
        on_click!(copy, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let value = dom::query(".api-key-field .api-key-text")
                .map(|el| dom::text(&el).trim().to_string())
                .unwrap_or_default();
            let span = dom::query_within(&copy_btn, "span");
            if let (false, Some(span)) = (value.is_empty(), span) {
                copy_to_clipboard(value, span);
            }
        });
    }

    if let Some(copy) = dom::query(".copy-code-btn") {
        let copy_btn = copy.clone();
        on_click!(copy, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let code = dom::query(".code-content code")
                .map(|el| dom::text(&el))
                .unwrap_or_default();
            let span = dom::query_within(&copy_btn, "span");
            if let (false, Some(span)) = (code.is_empty(), span) {
                copy_to_clipboard(code, span);
            }
        });
    }
}

fn bind_language_tabs() {
    let tabs = dom::query_all(".language-tab");
    let code = dom::query(".code-content code");
    for tab in &tabs {
        let all = tabs.clone();
        let clicked = tab.clone();
        let code = code.clone();
        on_click!(tab.clone(), move |e: web_sys::MouseEvent| {
            e.prevent_default();
            for t in &all {
                dom::remove_class(t, "language-tab--active");
            }
            dom::add_class(&clicked, "language-tab--active");

            let lang = dom::attr(&clicked, "data-lang").unwrap_or_default();
            if let (Some(code), Some(sample)) = (&code, snippets::snippet(&lang)) {
                dom::set_inner_html(code, sample);
            }
            animate::press(&clicked, "0.95");
        });
    }
}

fn bind_file_upload() {
    let upload_area = dom::query(".upload-area");
    let select_btn = dom::query(".select-file-btn");
    let file_name = dom::query(".selected-file-name");

    let Ok(input) = dom::create_element("input").dyn_into::<HtmlInputElement>() else {
        return;
    };
    input.set_type("file");
    input.set_accept(".txt,.csv,.xlsx");
    dom::set_style(input.as_ref(), "display", "none");
    let _ = dom::body().append_child(&input);

    let show_name = Rc::new(move |name: String| {
        if let Some(label) = &file_name {
            dom::set_text(label, &name);
            dom::set_style(label, "display", "block");
        }
    });

    if let Some(area) = upload_area {
        {
            let area = area.clone();
            on_event!(area.clone(), "dragover", move |e: web_sys::Event| {
                e.prevent_default();
                dom::set_style(&area, "border-color", "var(--color-icon-primary)");
                dom::set_style(&area, "background", "#FFF7ED");
            });
        }
        {
            let area = area.clone();
            on_event!(area.clone(), "dragleave", move |e: web_sys::Event| {
                e.prevent_default();
                dom::set_style(&area, "border-color", "var(--color-border)");
                dom::set_style(&area, "background", "var(--color-bg-light)");
            });
        }
        {
            let show_name = show_name.clone();
            let drop_area = area.clone();
            on_event!(area, "drop", move |e: web_sys::Event| {
                e.prevent_default();
                dom::set_style(&drop_area, "border-color", "var(--color-border)");
                dom::set_style(&drop_area, "background", "var(--color-bg-light)");
                let files = e
                    .dyn_ref::<DragEvent>()
                    .and_then(|drag| drag.data_transfer())
                    .and_then(|dt| dt.files());
                if let Some(files) = files {
                    if let Some(file) = files.get(0) {
                        show_name(file.name());
                        log!("files dropped:", files.length());
                    }
                }
            });
        }
    }

    if let Some(btn) = select_btn {
        let input = input.clone();
        let pressed = btn.clone();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            input.click();
            animate::press(&pressed, "0.95");
        });
    }

    {
        let picked = input.clone();
        let show_name = show_name.clone();
        on_event!(input, "change", move |_| {
            if let Some(files) = picked.files() {
                if let Some(file) = files.get(0) {
                    show_name(file.name());
                    log!("files selected:", files.length());
                }
            }
        });
    }
}

fn bind_email_validation() {
    let validate_btn = dom::query(".validate-email-btn");
    let email_input = dom::query(".single-email-input").and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

    if let (Some(btn), Some(input)) = (validate_btn, email_input.clone()) {
        let pressed = btn.clone();
        on_click!(btn, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let email = dom::get_input_value(&input);
            if !email.is_empty() && email.contains('@') {
                log!("validating email:", email);
                animate::press(&pressed, "0.95");
            } else {
                animate::style_for(input.as_ref(), "border-color", "var(--color-error)", 2000);
            }
        });
    }

    for link in dom::query_all(".recent-email-link") {
        let link_el = link.clone();
        let input = email_input.clone();
        on_click!(link, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            if let Some(input) = &input {
                input.set_value(&dom::text(&link_el));
                let _ = input.focus();
            }
        });
    }
}

fn bind_integrations() {
    for button in dom::query_all(".connect-btn") {
        let btn = button.clone();
        on_click!(button, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            if let Some(card) = dom::closest(&btn, ".integration-card") {
                dom::set_style(&card, "border-color", "var(--color-icon-primary)");
                animate::style_for(&card, "border-width", "2px", 2000);
                if let Some(span) = dom::query_within(&btn, "span") {
                    animate::swap_text(&span, "Connected", 2000);
                }
                animate::style_for(&btn, "background", "#FFF7ED", 2000);
                animate::style_for(&btn, "border-color", "var(--color-icon-primary)", 2000);
            }
            animate::press(&btn, "0.95");
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
        &dom::query_all(".nav-item"),
        "translateX(-20px)",
        "translateX(0)",
        "all 0.3s ease",
        100,
        50,
    );
    if let Some(card) = dom::query(".credit-card") {
        animate::reveal(&card, "translateY(20px)", "translateY(0)", "all 0.5s ease", 400);
    }
    animate::reveal_all(
        &dom::query_all(".history-item"),
        "translateX(-20px)",
        "translateX(0)",
        "all 0.4s ease",
        600,
        100,
    );
}

/// Replay the progress bar's width as a one-second fill once the page has
/// loaded.
fn bind_progress_bar() {
    dom::on_load(|| {
        let Some(fill) = dom::query(".progress-fill") else {
            return;
        };
        let width = dom::style_value(&fill, "width");
        dom::set_style(&fill, "width", "0%");
        Timeout::new(500, move || {
            dom::set_style(&fill, "transition", "width 1s ease");
            dom::set_style(&fill, "width", &width);
        })
        .forget();
    });
}
