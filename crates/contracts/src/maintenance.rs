use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a maintenance request.
///
/// Wire form is the snake_case code (`"in_progress"` etc.), matching what the
/// portal endpoints emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    New,
    InProgress,
    Done,
    Cancelled,
}

impl RequestState {
    /// Stable wire code for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestState::New => "new",
            RequestState::InProgress => "in_progress",
            RequestState::Done => "done",
            RequestState::Cancelled => "cancelled",
        }
    }

    /// Human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            RequestState::New => "New",
            RequestState::InProgress => "In Progress",
            RequestState::Done => "Done",
            RequestState::Cancelled => "Cancelled",
        }
    }

    /// Parse a wire code. Unknown codes are data, not errors, so this
    /// returns `None` rather than failing.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(RequestState::New),
            "in_progress" => Some(RequestState::InProgress),
            "done" => Some(RequestState::Done),
            "cancelled" => Some(RequestState::Cancelled),
            _ => None,
        }
    }
}

/// Operational state of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentState {
    Active,
    UnderMaintenance,
    Scrapped,
}

impl EquipmentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentState::Active => "active",
            EquipmentState::UnderMaintenance => "under_maintenance",
            EquipmentState::Scrapped => "scrapped",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentState::Active => "Active",
            EquipmentState::UnderMaintenance => "Under Maintenance",
            EquipmentState::Scrapped => "Scrapped",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(EquipmentState::Active),
            "under_maintenance" => Some(EquipmentState::UnderMaintenance),
            "scrapped" => Some(EquipmentState::Scrapped),
            _ => None,
        }
    }
}

/// Request priority. Serialized as the numeric string code (`"0"`..`"3"`)
/// the backend stores in its selection field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "0")]
    Low,
    #[serde(rename = "1")]
    Normal,
    #[serde(rename = "2")]
    High,
    #[serde(rename = "3")]
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "0",
            Priority::Normal => "1",
            Priority::High => "2",
            Priority::Critical => "3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Priority::Low),
            "1" => Some(Priority::Normal),
            "2" => Some(Priority::High),
            "3" => Some(Priority::Critical),
            _ => None,
        }
    }
}

/// Wire form of a maintenance request as list endpoints return it.
///
/// State and priority stay raw strings here: the frontend resolves them to
/// badges at render time, and unknown codes must survive the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSummary {
    pub id: Uuid,
    pub name: String,
    pub state: String,
    pub priority: String,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_state_codes_round_trip() {
        for state in [
            RequestState::New,
            RequestState::InProgress,
            RequestState::Done,
            RequestState::Cancelled,
        ] {
            assert_eq!(RequestState::from_code(state.as_str()), Some(state));
        }
        assert_eq!(RequestState::from_code("archived"), None);
    }

    #[test]
    fn request_state_wire_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&RequestState::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::from_str::<RequestState>("\"cancelled\"").unwrap(),
            RequestState::Cancelled
        );
    }

    #[test]
    fn equipment_state_codes_round_trip() {
        for state in [
            EquipmentState::Active,
            EquipmentState::UnderMaintenance,
            EquipmentState::Scrapped,
        ] {
            assert_eq!(EquipmentState::from_code(state.as_str()), Some(state));
        }
        assert_eq!(
            serde_json::to_string(&EquipmentState::UnderMaintenance).unwrap(),
            "\"under_maintenance\""
        );
    }

    #[test]
    fn priority_serializes_as_numeric_string() {
        assert_eq!(serde_json::to_string(&Priority::Critical).unwrap(), "\"3\"");
        assert_eq!(
            serde_json::from_str::<Priority>("\"0\"").unwrap(),
            Priority::Low
        );
        assert_eq!(Priority::from_code("2"), Some(Priority::High));
        assert_eq!(Priority::from_code("9"), None);
        assert!(Priority::Low < Priority::Critical);
    }

    #[test]
    fn request_summary_tolerates_missing_schedule() {
        let json = r#"{
            "id": "7f8d2f74-5a1b-4f06-9f44-3a3d2a2e9c01",
            "name": "Replace hydraulic hose",
            "state": "in_progress",
            "priority": "2",
            "created_at": "2024-03-15T14:02:26Z"
        }"#;
        let summary: RequestSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.scheduled_date, None);
        assert_eq!(RequestState::from_code(&summary.state), Some(RequestState::InProgress));
    }
}
