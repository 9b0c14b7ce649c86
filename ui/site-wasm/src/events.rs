//! Event binding macros.
//!
//! Listener closures are handed to the browser for the page's lifetime, so
//! every macro leaks its `Closure` via `forget()`. The target expression is
//! evaluated before the closure so both may use the same binding.

/// Attach a click handler. The closure receives the `MouseEvent`.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let target = $el;
        let cb = ::wasm_bindgen::closure::Closure::wrap(
            Box::new($cb) as Box<dyn FnMut(::web_sys::MouseEvent)>
        );
        target
            .add_event_listener_with_callback(
                "click",
                ::wasm_bindgen::JsCast::unchecked_ref(cb.as_ref()),
            )
            .unwrap();
        cb.forget();
    }};
}

/// Attach a mouse handler for an arbitrary event name (`mousemove`, …).
macro_rules! on_mouse {
    ($el:expr, $name:expr, $cb:expr) => {{
        let target = $el;
        let cb = ::wasm_bindgen::closure::Closure::wrap(
            Box::new($cb) as Box<dyn FnMut(::web_sys::MouseEvent)>
        );
        target
            .add_event_listener_with_callback(
                $name,
                ::wasm_bindgen::JsCast::unchecked_ref(cb.as_ref()),
            )
            .unwrap();
        cb.forget();
    }};
}

/// Attach a handler for an arbitrary event name (`input`, `focus`, …).
macro_rules! on_event {
    ($el:expr, $name:expr, $cb:expr) => {{
        let target = $el;
        let cb = ::wasm_bindgen::closure::Closure::wrap(
            Box::new($cb) as Box<dyn FnMut(::web_sys::Event)>
        );
        target
            .add_event_listener_with_callback(
                $name,
                ::wasm_bindgen::JsCast::unchecked_ref(cb.as_ref()),
            )
            .unwrap();
        cb.forget();
    }};
}

pub(crate) use on_click;
pub(crate) use on_event;
pub(crate) use on_mouse;
