use crate::config::required;
use crate::errors::PipelineError;
use crate::models::{CallRecord, UpstreamCall};
use crate::state::AppState;
use crate::store;

pub async fn fetch_call_logs(state: &AppState) -> Result<Vec<CallRecord>, PipelineError> {
    let target = required(&state.config.target_phone_number, "TARGET_PHONE_NUMBER")?;
    required(&state.config.vapi_api_key, "VAPI_API_KEY")?;

    let calls = state
        .calls
        .list_calls()
        .await
        .map_err(PipelineError::Upstream)?;
    let total = calls.len();

    let records = latest_for_number(calls, target);

    let path = state.config.call_logs_path();
    store::write_json_atomic(&path, &records)?;

    tracing::info!(
        total,
        saved = records.len(),
        target = %target,
        path = %path.display(),
        "saved latest call log"
    );

    Ok(records)
}

pub fn latest_for_number(calls: Vec<UpstreamCall>, target: &str) -> Vec<CallRecord> {
    let mut matching: Vec<UpstreamCall> = calls
        .into_iter()
        .filter(|c| c.customer_number() == Some(target))
        .collect();

    matching.sort_by(|a, b| b.started_at.cmp(&a.started_at));

    matching.into_iter().take(1).map(CallRecord::from).collect()
}
