use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::CallRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
    Unknown,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "Positive",
            Mood::Neutral => "Neutral",
            Mood::Negative => "Negative",
            Mood::Unknown => "Unknown",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Mood::Positive,
            "neutral" => Mood::Neutral,
            "negative" => Mood::Negative,
            _ => Mood::Unknown,
        }
    }
}

impl From<String> for Mood {
    fn from(s: String) -> Self {
        Mood::parse(&s)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ActionItems {
    List(Vec<String>),
    Text(String),
}

impl ActionItems {
    pub fn is_empty(&self) -> bool {
        match self {
            ActionItems::List(items) => items.iter().all(|i| i.trim().is_empty()),
            ActionItems::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for ActionItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionItems::List(items) => f.write_str(&items.join(", ")),
            ActionItems::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CaregiverSummary {
    #[serde(default)]
    pub today_summary: Option<String>,
    #[serde(default, deserialize_with = "blank_mood_as_none")]
    pub mood: Option<Mood>,
    #[serde(default, deserialize_with = "list_or_text")]
    pub notable_observations: Vec<String>,
    #[serde(default)]
    pub action_items: Option<ActionItems>,
}

impl CaregiverSummary {
    pub fn fallback(placeholder: &str) -> Self {
        Self {
            today_summary: Some(placeholder.to_string()),
            mood: Some(Mood::Unknown),
            notable_observations: Vec::new(),
            action_items: Some(ActionItems::List(Vec::new())),
        }
    }
}

fn blank_mood_as_none<'de, D>(deserializer: D) -> Result<Option<Mood>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|s| !s.trim().is_empty())
        .map(Mood::from))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrText {
    List(Vec<String>),
    Text(String),
}

// Models sometimes answer with a single sentence instead of a list.
fn list_or_text<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ListOrText>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(ListOrText::List(items)) => items,
        Some(ListOrText::Text(text)) if text.trim().is_empty() => Vec::new(),
        Some(ListOrText::Text(text)) => vec![text.trim().to_string()],
    })
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryDocument {
    #[serde(flatten)]
    pub call: CallRecord,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub caregiver_summary: CaregiverSummary,
}
