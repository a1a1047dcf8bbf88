//! Transient toast notifications.
//!
//! - Multiple toasts stack in arrival order and dismiss independently
//! - Each toast auto-dismisses after [`AUTO_DISMISS_MS`], unless closed
//!   earlier by the user; dismissal is idempotent so the timer firing after
//!   a manual close is a no-op

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen.
pub const AUTO_DISMISS_MS: u32 = 3000;

/// Display severity of a toast. Drives colour, title and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Capitalized header title, as the portal has always shown it.
    pub fn title(&self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "alert-circle",
            Severity::Warning => "alert-triangle",
            Severity::Info => "info",
        }
    }

    /// Lenient parse for callers holding a raw severity string.
    /// Anything unrecognized reads as `Info`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub severity: Severity,
    /// May contain markup; rendered verbatim (caller contract).
    pub message: String,
    /// Milliseconds since the epoch at creation.
    pub created_at: f64,
}

/// Centralized toast queue, provided to the page via context.
///
/// Queue state (push / dismiss / ordering) is plain signal bookkeeping with
/// no DOM dependency; only [`ToastService::show`] touches timers.
#[derive(Clone, Copy)]
pub struct ToastService {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Currently visible toasts, oldest first.
    pub fn entries(&self) -> Vec<ToastEntry> {
        self.entries.get()
    }

    /// Append a toast and return its id. Ids are a monotonic counter, so
    /// they stay unique for the process lifetime no matter how many toasts
    /// land in the same tick.
    pub fn push(&self, message: impl Into<String>, severity: Severity, created_at: f64) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.entries.update(|entries| {
            entries.push(ToastEntry {
                id,
                severity,
                message: message.into(),
                created_at,
            });
        });
        id
    }

    /// Remove a toast by id. Removes at most one entry; dismissing an id
    /// that is already gone is a no-op, which is what makes the manual
    /// close + auto-dismiss timer pair safe.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut removed = false;
        self.entries.update(|entries| {
            let before = entries.len();
            entries.retain(|entry| entry.id != id);
            removed = entries.len() != before;
        });
        removed
    }

    /// Show a toast and schedule its auto-dismissal.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.push(message, severity, js_sys::Date::now());
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
        id
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Show a toast through the context-provided [`ToastService`].
///
/// Missing context is a page-wiring problem; it logs and degrades to a no-op
/// rather than panicking inside an event handler.
pub fn notify(message: &str, severity: Severity) {
    match use_context::<ToastService>() {
        Some(svc) => {
            svc.show(message, severity);
        }
        None => log::warn!("notify: no ToastService in context, dropping: {message}"),
    }
}

/// Renders the toast stack. Mount once, near the end of the page body.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = expect_context::<ToastService>();

    view! {
        <div class="toast-container">
            <For
                each=move || svc.entries()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class=format!("toast toast--{}", entry.severity.as_str()) role="alert">
                            <div class="toast__header">
                                {icon(entry.severity.icon_name())}
                                <strong class="toast__title">{entry.severity.title()}</strong>
                                <button
                                    type="button"
                                    class="toast__close"
                                    aria-label="Close"
                                    on:click=move |_| {
                                        svc.dismiss(id);
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </div>
                            <div class="toast__body" inner_html=entry.message.clone()></div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_stack_in_arrival_order_with_distinct_ids() {
        let svc = ToastService::new();
        let a = svc.push("first", Severity::Info, 1.0);
        let b = svc.push("second", Severity::Success, 1.0);
        let c = svc.push("third", Severity::Error, 1.0);

        let entries = svc.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![a, b, c]
        );
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[2].severity, Severity::Error);
    }

    #[test]
    fn toasts_are_independently_removable() {
        let svc = ToastService::new();
        let a = svc.push("a", Severity::Info, 0.0);
        let b = svc.push("b", Severity::Info, 0.0);
        let c = svc.push("c", Severity::Info, 0.0);

        assert!(svc.dismiss(b));
        assert_eq!(
            svc.entries().iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![a, c]
        );
    }

    #[test]
    fn dismiss_is_idempotent() {
        let svc = ToastService::new();
        let id = svc.push("once", Severity::Warning, 0.0);
        assert!(svc.dismiss(id));
        // Simulates the auto-dismiss timer firing after a manual close.
        assert!(!svc.dismiss(id));
        assert!(svc.entries().is_empty());
    }

    #[test]
    fn ids_never_repeat_across_dismissals() {
        let svc = ToastService::new();
        let first = svc.push("x", Severity::Info, 0.0);
        svc.dismiss(first);
        let second = svc.push("y", Severity::Info, 0.0);
        assert_ne!(first, second);
    }

    #[test]
    fn severity_from_code_defaults_to_info() {
        assert_eq!(Severity::from_code("success"), Severity::Success);
        assert_eq!(Severity::from_code("error"), Severity::Error);
        assert_eq!(Severity::from_code("warning"), Severity::Warning);
        assert_eq!(Severity::from_code("info"), Severity::Info);
        assert_eq!(Severity::from_code("fatal"), Severity::Info);
        assert_eq!(Severity::default(), Severity::Info);
    }
}
