//! Confirmation-gated actions and a trailing-edge debounce.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Prompt the user with a native confirm dialog and run `action` only if
/// they affirm. Blocks the UI thread while the dialog is open, same as the
/// native dialog itself.
pub fn confirm_action(message: &str, action: impl FnOnce()) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.confirm_with_message(message).unwrap_or(false) {
        action();
    }
}

/// Wrap `f` so repeated calls collapse into one invocation once calls stop
/// arriving for `wait_ms`. Each call cancels the pending timer; the last
/// call's argument wins and superseded arguments are dropped.
pub fn debounce<T: Clone + 'static>(wait_ms: i32, f: impl Fn(T) + 'static) -> impl Fn(T) {
    let pending = Rc::new(Cell::new(None::<i32>));
    let f = Rc::new(f);

    move |value: T| {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(handle) = pending.take() {
            window.clear_timeout_with_handle(handle);
        }

        let f = Rc::clone(&f);
        let closure = Closure::once(move || f(value));
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            wait_ms,
        ) {
            Ok(handle) => pending.set(Some(handle)),
            Err(_) => log::warn!("debounce: setTimeout failed"),
        }
        closure.forget();
    }
}
