//! Settings page: theme sync, profile forms with save feedback.

use crate::events::on_event;
use crate::{animate, dom, menu, theme};
use gloo_console::log;
use px_ui_core::validate::{FieldKind, SETTINGS_PASSWORD_MIN, validate_field};
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

const SAVED_BACKGROUND: &str = "#10B981";
const SAVE_BACKGROUND: &str = "#F59D00";

pub fn init() {
    theme::install(false);
    menu::install_sidebar();
    bind_personal_info_form();
    bind_password_form();
    entry_animations();
}

fn save_feedback(form: &web_sys::Element) {
    let Some(button) = dom::query_within(form, ".settings-save-btn") else {
        return;
    };
    animate::swap_text(&button, "Saved!", 2000);
    animate::style_then(&button, "background", SAVED_BACKGROUND, SAVE_BACKGROUND, 2000);
}

fn bind_personal_info_form() {
    let Some(form) = dom::by_id("personal-info-form") else {
        return;
    };
    let form_el = form.clone();
    on_event!(form, "submit", move |e: web_sys::Event| {
        e.prevent_default();
        let first_name = dom::by_id_typed::<HtmlInputElement>("first-name")
            .map(|i| i.value())
            .unwrap_or_default();
        let last_name = dom::by_id_typed::<HtmlInputElement>("last-name")
            .map(|i| i.value())
            .unwrap_or_default();
        log!("personal info updated:", first_name, last_name);
        save_feedback(&form_el);
    });
}

fn bind_password_form() {
    let Some(form) = dom::by_id("password-form") else {
        return;
    };
    let form_el = form.clone();
    on_event!(form, "submit", move |e: web_sys::Event| {
        e.prevent_default();
        let new_password = dom::by_id_typed::<HtmlInputElement>("new-password")
            .map(|i| i.value())
            .unwrap_or_default();

        let check = validate_field(
            FieldKind::Password {
                min: SETTINGS_PASSWORD_MIN,
            },
            true,
            &new_password,
        );
        if check.is_err() {
            let _ = dom::window()
                .alert_with_message("New password must be at least 8 characters long");
            return;
        }

        log!("password update requested");
        save_feedback(&form_el);
        if let Some(form) = form_el.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    });
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
        &dom::query_all(".settings-card"),
        "translateY(20px)",
        "translateY(0)",
        "all 0.5s ease",
        200,
        100,
    );
}
