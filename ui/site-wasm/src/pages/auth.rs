//! Login/signup page controller.
//!
//! Blur validation with inline error messages, a simulated submit with a
//! loading state and auto-dismissing success banner, focus scaling, the
//! load-time spinner fade, and the password visibility toggles. Everything
//! is wired once the page has loaded, matching when the markup is complete.

use crate::events::{on_click, on_event};
use crate::{dom, theme};
use gloo_console::log;
use gloo_timers::callback::Timeout;
use px_ui_core::validate::{
    AUTH_PASSWORD_MIN, FieldError, FieldKind, validate_field, validate_retype,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

pub fn init() {
    dom::on_load(|| {
        theme::install(false);
        inject_banner_keyframes();
        bind_validation();
        bind_submit();
        bind_input_focus();
        bind_spinner();
        bind_password_toggles();
    });
}

fn form_inputs(form: &Element) -> Vec<HtmlInputElement> {
    dom::query_all_within(form, ".form-input")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

fn field_kind(input: &HtmlInputElement) -> FieldKind {
    match input.type_().as_str() {
        "email" => FieldKind::Email,
        "password" => FieldKind::Password {
            min: AUTH_PASSWORD_MIN,
        },
        _ => FieldKind::Text,
    }
}

fn validate_input(input: &HtmlInputElement) -> bool {
    let value = input.value();
    let required = input.has_attribute("required");
    let mut result = validate_field(field_kind(input), required, &value);

    // The retype field additionally has to match the password field.
    if result.is_ok() && input.id() == "signup-retype-password" {
        if let Some(password) = dom::by_id_typed::<HtmlInputElement>("signup-password") {
            result = validate_retype(&password.value(), &value);
        }
    }

    match result {
        Ok(()) => {
            clear_error(input);
            true
        }
        Err(err) => {
            show_error(input, &err);
            false
        }
    }
}

fn error_container(input: &HtmlInputElement) -> Option<Element> {
    let el: &Element = input.as_ref();
    dom::closest(el, ".form-group").or_else(|| el.parent_element())
}

fn show_error(input: &HtmlInputElement, err: &FieldError) {
    let el: &Element = input.as_ref();
    dom::add_class(el, "error");
    let error_color = dom::css_variable("--color-error");
    dom::set_style(el, "border-color", &error_color);

    let Some(container) = error_container(input) else {
        return;
    };
    if let Some(existing) = dom::query_within(&container, ".error-message") {
        existing.remove();
    }

    let message = dom::create_element("span");
    dom::add_class(&message, "error-message");
    let _ = message.set_attribute(
        "style",
        &format!(
            "display: block; color: {error_color}; font-size: 12px; margin-top: 4px; \
             font-family: SFProDisplayRegular, sans-serif;"
        ),
    );
    dom::set_text(&message, &err.to_string());
    let _ = container.append_child(&message);
}

fn clear_error(input: &HtmlInputElement) {
    let el: &Element = input.as_ref();
    dom::remove_class(el, "error");
    dom::clear_style(el, "border-color");
    if let Some(container) = error_container(input) {
        if let Some(message) = dom::query_within(&container, ".error-message") {
            message.remove();
        }
    }
}

fn bind_validation() {
    let Some(form) = dom::query(".login-form") else {
        return;
    };

    for input in form_inputs(&form) {
        {
            let input = input.clone();
            on_event!(input.clone(), "blur", move |_| {
                validate_input(&input);

                // Re-check the retype field once the password changes.
                if input.id() == "signup-password" {
                    if let Some(retype) =
                        dom::by_id_typed::<HtmlInputElement>("signup-retype-password")
                    {
                        if !retype.value().is_empty() {
                            validate_input(&retype);
                        }
                    }
                }
            });
        }

        let typed = input.clone();
        on_event!(input, "input", move |_| {
            let el: &Element = typed.as_ref();
            if dom::has_class(el, "error") {
                clear_error(&typed);
            }
            if typed.id() == "signup-password" {
                if let Some(retype) = dom::by_id_typed::<HtmlInputElement>("signup-retype-password")
                {
                    if !retype.value().is_empty() {
                        clear_error(&retype);
                    }
                }
            }
        });
    }
}

fn bind_submit() {
    let Some(form) = dom::query(".login-form") else {
        return;
    };
    let form_el = form.clone();
    on_event!(form, "submit", move |e: web_sys::Event| {
        e.prevent_default();

        let mut all_valid = true;
        for input in form_inputs(&form_el) {
            if !validate_input(&input) {
                all_valid = false;
            }
        }

        if all_valid {
            submit_form(&form_el);
        } else if let Some(first_error) = dom::query_within(&form_el, ".form-input.error") {
            if let Some(html) = first_error.dyn_ref::<web_sys::HtmlElement>() {
                let _ = html.focus();
            }
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Center);
            first_error.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });
}

fn submit_form(form: &Element) {
    let Some(button) = dom::query_within(form, ".login-button")
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        return;
    };

    dom::add_class(button.as_ref(), "loading");
    button.set_disabled(true);
    button.set_text_content(Some(""));

    let form = form.clone();
    Timeout::new(2000, move || {
        log!("form submitted");
        dom::remove_class(button.as_ref(), "loading");
        button.set_disabled(false);
        button.set_text_content(Some("Login"));
        show_success_banner(&form);
    })
    .forget();
}

fn show_success_banner(form: &Element) {
    let Some(card) = dom::query(".login-card") else {
        return;
    };
    // One banner at a time.
    if dom::query(".success-message").is_some() {
        return;
    }

    let is_signup = dom::has_class(form, "signup-form");
    let text = if is_signup {
        "Account created successfully!"
    } else {
        "Login successful!"
    };

    let background = dom::css_variable("--color-success");
    let color = dom::css_variable("--color-white");
    let banner = dom::create_element("div");
    dom::add_class(&banner, "success-message");
    let _ = banner.set_attribute(
        "style",
        &format!(
            "position: absolute; top: 20px; left: 50%; transform: translateX(-50%); \
             background: {background}; color: {color}; padding: 12px 24px; \
             border-radius: 8px; font-family: SFProDisplayRegular, sans-serif; \
             font-size: 14px; opacity: 0; \
             animation: slideDownFadeIn 0.4s ease-out forwards; z-index: 1000;"
        ),
    );
    dom::set_text(&banner, text);

    dom::set_style(&card, "position", "relative");
    let _ = card.append_child(&banner);

    Timeout::new(3000, move || {
        dom::set_style(&banner, "opacity", "0");
        dom::set_style(&banner, "transition", "opacity 0.3s ease-out");
        Timeout::new(300, move || banner.remove()).forget();
    })
    .forget();
}

fn bind_input_focus() {
    for input in dom::query_all(".form-input") {
        let focused = input.clone();
        on_event!(input.clone(), "focus", move |_| {
            if let Some(group) = dom::closest(&focused, ".form-group") {
                dom::set_style(&group, "transform", "scale(1.01)");
                dom::set_style(&group, "transition", "transform 0.2s ease-out");
            }
        });
        let blurred = input.clone();
        on_event!(input, "blur", move |_| {
            if let Some(group) = dom::closest(&blurred, ".form-group") {
                dom::set_style(&group, "transform", "scale(1)");
            }
        });
    }
}

fn bind_spinner() {
    let Some(spinner) = dom::by_id("spinner-body") else {
        return;
    };
    Timeout::new(500, move || {
        dom::set_style(&spinner, "opacity", "0");
        dom::set_style(&spinner, "transition", "opacity 0.3s ease-out");
        Timeout::new(300, move || {
            dom::set_style(&spinner, "display", "none");
        })
        .forget();
    })
    .forget();
}

fn bind_password_toggles() {
    for toggle in dom::query_all(".password-toggle") {
        let toggle_el = toggle.clone();
        on_click!(toggle, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let Some(wrapper) = dom::closest(&toggle_el, ".password-input-wrapper") else {
                return;
            };
            let Some(input) = dom::query_within(&wrapper, ".form-input")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let hide_icon = dom::query_within(&wrapper, ".password-icon--hide");
            let show_icon = dom::query_within(&wrapper, ".password-icon--show");

            if input.type_() == "password" {
                input.set_type("text");
                if let Some(icon) = &hide_icon {
                    dom::set_style(icon, "display", "none");
                }
                if let Some(icon) = &show_icon {
                    dom::set_style(icon, "display", "block");
                }
            } else {
                input.set_type("password");
                if let Some(icon) = &hide_icon {
                    dom::set_style(icon, "display", "block");
                }
                if let Some(icon) = &show_icon {
                    dom::set_style(icon, "display", "none");
                }
            }
        });
    }
}

/// The success banner's entry animation, injected once at load.
fn inject_banner_keyframes() {
    let Some(head) = dom::document().head() else {
        return;
    };
    let style = dom::create_element("style");
    style.set_text_content(Some(
        "@keyframes slideDownFadeIn {
            from {
                opacity: 0;
                transform: translateX(-50%) translateY(-10px);
            }
            to {
                opacity: 1;
                transform: translateX(-50%) translateY(0);
            }
        }",
    ));
    let _ = head.append_child(&style);
}
