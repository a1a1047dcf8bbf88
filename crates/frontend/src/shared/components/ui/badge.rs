use crate::shared::badges::{resolve_priority, resolve_status};
use leptos::prelude::*;

/// Badge for a request or equipment status code.
///
/// Unknown codes render neutrally with the raw code as text.
#[component]
pub fn StatusBadge(
    /// Raw status code: "new", "in_progress", "done", "cancelled",
    /// "active", "under_maintenance", "scrapped", or anything else
    #[prop(into)]
    status: Signal<String>,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge {}", resolve_status(&status.get()).style_class)>
            {move || resolve_status(&status.get()).display_label().to_string()}
        </span>
    }
}

/// Badge for a priority code ("0".."3"; anything else shows as Normal).
#[component]
pub fn PriorityBadge(
    /// Raw priority code
    #[prop(into)]
    priority: Signal<String>,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge {}", resolve_priority(&priority.get()).style_class)>
            {move || resolve_priority(&priority.get()).display_label().to_string()}
        </span>
    }
}
