use serde::{Deserialize, Serialize};

use super::{ActionItems, CaregiverSummary, Mood};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditEntry {
    pub timestamp: String,
    pub client_name: String,
    pub caregiver_email: String,
    pub summary: Option<String>,
    pub mood: Option<Mood>,
    pub observations: Vec<String>,
    pub action_items: Option<ActionItems>,
}

impl AuditEntry {
    pub fn new(client_name: &str, caregiver_email: &str, summary: &CaregiverSummary) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            client_name: client_name.to_string(),
            caregiver_email: caregiver_email.to_string(),
            summary: summary.today_summary.clone(),
            mood: summary.mood,
            observations: summary.notable_observations.clone(),
            action_items: summary.action_items.clone(),
        }
    }
}
