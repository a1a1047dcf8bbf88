pub mod badge;

pub use badge::{PriorityBadge, StatusBadge};
