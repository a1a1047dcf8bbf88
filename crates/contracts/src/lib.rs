//! Shared contracts between the maintenance portal backend and frontend.
//!
//! Holds the typed status / priority codes and the wire DTOs the frontend
//! renders. Presentation concerns (badge classes, labels markup) live in the
//! frontend crate.

pub mod maintenance;

pub use maintenance::{EquipmentState, Priority, RequestState, RequestSummary};
