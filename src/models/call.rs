use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamCall {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub artifact: Option<CallArtifact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallArtifact {
    #[serde(default)]
    pub recording_url: Option<String>,
    #[serde(default)]
    pub stereo_recording_url: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
}

impl UpstreamCall {
    pub fn customer_number(&self) -> Option<&str> {
        self.customer.as_ref()?.number.as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CallRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub ended_at: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub recording_url: Option<String>,
    #[serde(default)]
    pub stereo_recording_url: Option<String>,
}

impl From<UpstreamCall> for CallRecord {
    fn from(call: UpstreamCall) -> Self {
        let duration = match (call.started_at, call.ended_at) {
            (Some(start), Some(end)) => Some((end - start).num_milliseconds() as f64 / 1000.0),
            _ => None,
        };
        let artifact = call.artifact.unwrap_or_default();

        Self {
            id: call.id,
            status: call.status,
            started_at: call.started_at.map(|t| t.to_rfc3339()),
            ended_at: call.ended_at.map(|t| t.to_rfc3339()),
            duration,
            cost: call.cost,
            transcript: artifact.transcript,
            recording_url: artifact.recording_url,
            stereo_recording_url: artifact.stereo_recording_url,
        }
    }
}
