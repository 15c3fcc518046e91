use crate::config::AppConfig;
use crate::services::ai::LlmProvider;
use crate::services::calls::CallHistorySource;
use crate::services::mail::Mailer;

pub struct AppState {
    pub config: AppConfig,
    pub calls: Box<dyn CallHistorySource>,
    pub llm: Box<dyn LlmProvider>,
    pub mailer: Box<dyn Mailer>,
}
