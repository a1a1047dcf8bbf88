//! Resolution of raw status / priority codes to badge label + style class.
//!
//! Resolution is total: every input, recognized or not, maps to exactly one
//! badge spec, so rendering code never has to handle a failure path.

use contracts::{EquipmentState, Priority, RequestState};

/// What a badge renders: display text plus the modifier class that picks its
/// colour in the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSpec {
    pub label: String,
    pub style_class: &'static str,
}

impl BadgeSpec {
    /// Label as actually rendered. A badge must never be visually empty, so
    /// an empty label (possible when an unknown status echoes an empty code)
    /// renders as a placeholder dash.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            "\u{2014}"
        } else {
            &self.label
        }
    }
}

fn request_state_class(state: RequestState) -> &'static str {
    match state {
        RequestState::New => "badge--info",
        RequestState::InProgress => "badge--warning",
        RequestState::Done => "badge--success",
        RequestState::Cancelled => "badge--neutral",
    }
}

fn equipment_state_class(state: EquipmentState) -> &'static str {
    match state {
        EquipmentState::Active => "badge--success",
        EquipmentState::UnderMaintenance => "badge--warning",
        EquipmentState::Scrapped => "badge--error",
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "badge--priority-low",
        Priority::Normal => "badge--priority-normal",
        Priority::High => "badge--priority-high",
        Priority::Critical => "badge--priority-critical",
    }
}

/// Resolve a status code (request or equipment lifecycle) to a badge.
///
/// Unknown codes fall back to the neutral class with the raw code as label.
pub fn resolve_status(code: &str) -> BadgeSpec {
    if let Some(state) = RequestState::from_code(code) {
        return BadgeSpec {
            label: state.label().to_string(),
            style_class: request_state_class(state),
        };
    }
    if let Some(state) = EquipmentState::from_code(code) {
        return BadgeSpec {
            label: state.label().to_string(),
            style_class: equipment_state_class(state),
        };
    }
    BadgeSpec {
        label: code.to_string(),
        style_class: "badge--neutral",
    }
}

/// Resolve a priority code (`"0"`..`"3"`) to a badge.
///
/// Unknown codes fall back to `Normal` rather than echoing the raw code.
/// The asymmetry with [`resolve_status`] is long-standing observed behavior
/// and callers rely on it.
pub fn resolve_priority(code: &str) -> BadgeSpec {
    let priority = Priority::from_code(code).unwrap_or(Priority::Normal);
    BadgeSpec {
        label: priority.label().to_string(),
        style_class: priority_class(priority),
    }
}
