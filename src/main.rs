use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use carecall::config::AppConfig;
use carecall::services::ai::ollama::OllamaProvider;
use carecall::services::calls::vapi::VapiClient;
use carecall::services::mail::smtp::SmtpMailer;
use carecall::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    for (var, value) in [
        ("VAPI_API_KEY", &config.vapi_api_key),
        ("TARGET_PHONE_NUMBER", &config.target_phone_number),
        ("EMAIL_SENDER", &config.email_sender),
        ("EMAIL_PASSWORD", &config.email_password),
    ] {
        if value.is_empty() {
            tracing::warn!("{var} is not set; the stage that needs it will fail");
        }
    }

    tracing::info!(
        "using Ollama at {} (model: {})",
        config.ollama_url,
        config.ollama_model
    );
    tracing::info!(data_dir = %config.data_dir.display(), roster = %config.roster_path.display(), "artifact locations");

    let state = Arc::new(AppState {
        calls: Box::new(VapiClient::new(
            config.vapi_api_key.clone(),
            config.vapi_base_url.clone(),
        )),
        llm: Box::new(OllamaProvider::new(
            config.ollama_url.clone(),
            config.ollama_model.clone(),
        )),
        mailer: Box::new(SmtpMailer::new(
            config.smtp_host.clone(),
            config.smtp_port,
            config.email_sender.clone(),
            config.email_password.clone(),
        )),
        config: config.clone(),
    });

    let app = carecall::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
