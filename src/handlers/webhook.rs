use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::pipeline::{self, PipelineRun, PipelineState};
use crate::state::AppState;

pub async fn vapi_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(_payload): Json<serde_json::Value>,
) -> Response {
    // Empty secret disables the check (dev mode)
    if !state.config.webhook_secret.is_empty() {
        let provided = headers
            .get("x-vapi-secret")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !secrets_match(provided, &state.config.webhook_secret) {
            tracing::warn!("rejected webhook with missing or invalid X-Vapi-Secret");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "unauthorized" })),
            )
                .into_response();
        }
    }

    tracing::info!("call ended, starting caregiver pipeline");
    let run = pipeline::run_pipeline(&state).await;

    pipeline_response(&run)
}

// Examines every byte so timing does not reveal how much of the secret matched.
fn secrets_match(provided: &str, expected: &str) -> bool {
    let (provided, expected) = (provided.as_bytes(), expected.as_bytes());
    if provided.len() != expected.len() {
        return false;
    }
    provided
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

fn pipeline_response(run: &PipelineRun) -> Response {
    match (run.state, run.failed_stage()) {
        (PipelineState::Done, _) => {
            (StatusCode::OK, Json(json!({ "status": "success" }))).into_response()
        }
        (_, Some(stage)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": stage.failure_tag() })),
        )
            .into_response(),
        (other, None) => {
            tracing::error!(run_id = %run.id, state = other.as_str(), "pipeline stopped in a non-terminal state");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "pipeline_incomplete" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_match() {
        assert!(secrets_match("s3cret", "s3cret"));
        assert!(!secrets_match("s3creT", "s3cret"));
        assert!(!secrets_match("x3cret", "s3cret"));
        assert!(!secrets_match("s3cre", "s3cret"));
        assert!(!secrets_match("", "s3cret"));
    }
}
