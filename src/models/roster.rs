use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientRecord {
    pub client_name: String,
    pub client_phone_number: String,
    #[serde(default)]
    pub caregiver_name: String,
    #[serde(default)]
    pub caregiver_email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub users: Vec<ClientRecord>,
}

impl Roster {
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        crate::store::read_json(path)
    }

    pub fn find_by_phone(&self, phone: &str) -> Option<&ClientRecord> {
        self.users.iter().find(|u| u.client_phone_number == phone)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ClientRecord> {
        self.users.iter().find(|u| u.client_name == name)
    }
}
