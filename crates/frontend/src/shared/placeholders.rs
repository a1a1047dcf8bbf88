//! Loading / error placeholders for named containers.
//!
//! A missing container is a silent no-op: list pages call these before their
//! markup exists and that must never surface as an error.

/// Spinner markup used while a container's content loads.
pub fn loading_markup() -> String {
    concat!(
        r#"<div class="spinner-container">"#,
        r#"<div class="spinner" role="status">"#,
        r#"<span class="visually-hidden">Loading...</span>"#,
        r#"</div></div>"#
    )
    .to_string()
}

/// Error alert markup. The message may contain markup and is injected
/// verbatim (caller contract).
pub fn error_markup(message: &str) -> String {
    format!(r#"<div class="alert alert--error" role="alert">{message}</div>"#)
}

/// Replace the container's content with a loading spinner.
pub fn show_loading(container_id: &str) {
    replace_contents(container_id, &loading_markup());
}

/// Replace the container's content with an error alert.
pub fn show_error(container_id: &str, message: &str) {
    replace_contents(container_id, &error_markup(message));
}

fn replace_contents(container_id: &str, html: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    match element {
        Some(element) => element.set_inner_html(html),
        None => log::debug!("placeholder target '{container_id}' not found, skipping"),
    }
}
