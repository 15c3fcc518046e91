use std::env;
use std::path::PathBuf;

use crate::errors::PipelineError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub roster_path: PathBuf,
    pub vapi_api_key: String,
    pub vapi_base_url: String,
    pub target_phone_number: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub email_sender: String,
    pub email_password: String,
    pub webhook_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            roster_path: env::var("ROSTER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("config/users.json")),
            vapi_api_key: env::var("VAPI_API_KEY").unwrap_or_default(),
            vapi_base_url: env::var("VAPI_BASE_URL")
                .unwrap_or_else(|_| "https://api.vapi.ai".to_string()),
            target_phone_number: env::var("TARGET_PHONE_NUMBER").unwrap_or_default(),
            ollama_url: env::var("OLLAMA_SERVER")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "mistral".to_string()),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            email_sender: env::var("EMAIL_SENDER").unwrap_or_default(),
            email_password: env::var("EMAIL_PASSWORD").unwrap_or_default(),
            webhook_secret: env::var("VAPI_WEBHOOK_SECRET").unwrap_or_default(),
        }
    }

    pub fn call_logs_path(&self) -> PathBuf {
        self.data_dir.join("call_logs.json")
    }

    pub fn summaries_dir(&self) -> PathBuf {
        self.data_dir.join("call_summaries")
    }

    pub fn audit_log_path(&self) -> PathBuf {
        self.data_dir.join("sent_summaries.jsonl")
    }
}

pub fn required<'a>(value: &'a str, var: &str) -> Result<&'a str, PipelineError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::Config(format!("{var} is not set")));
    }
    Ok(trimmed)
}
