//! Tooltip / popover wiring for statically marked host elements.
//!
//! The host page marks elements with `data-tooltip="text"` or
//! `data-popover="..."`; initialization decorates them so the stylesheet can
//! render the widgets. No external widget library is involved.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// Mark every `[data-tooltip]` element so CSS renders the attribute value as
/// a hover tooltip.
pub fn init_tooltips() {
    for element in marked_elements("[data-tooltip]") {
        let _ = element.class_list().add_1("has-tooltip");
    }
}

/// Attach a click toggle to every `[data-popover]` element.
pub fn init_popovers() {
    for element in marked_elements("[data-popover]") {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok());
            if let Some(target) = target {
                let _ = target.class_list().toggle("popover--open");
            }
        });
        let _ = element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        // Listener lives for the page lifetime.
        closure.forget();
    }
}

fn marked_elements(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
