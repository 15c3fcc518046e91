use crate::config::required;
use crate::errors::PipelineError;
use crate::models::{CallRecord, Roster, SummaryDocument};
use crate::services::ai::summary::summarize_transcript;
use crate::state::AppState;
use crate::store::{self, summaries};

pub const UNKNOWN_CLIENT_NAME: &str = "the client";

pub async fn summarize_call_logs(state: &AppState) -> Result<Vec<SummaryDocument>, PipelineError> {
    let config = &state.config;
    let target = required(&config.target_phone_number, "TARGET_PHONE_NUMBER")?;

    let summaries_dir = config.summaries_dir();
    summaries::reset_dir(&summaries_dir)?;

    let roster = Roster::load(&config.roster_path).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load roster");
        Roster::default()
    });
    let client_name = roster
        .find_by_phone(target)
        .map(|c| c.client_name.clone())
        .unwrap_or_else(|| UNKNOWN_CLIENT_NAME.to_string());

    let calls: Vec<CallRecord> = store::read_json(&config.call_logs_path())?;

    let mut documents = Vec::with_capacity(calls.len());
    for call in calls {
        let Some(path) = summaries::summary_path(&summaries_dir, &call.id) else {
            tracing::warn!(call_id = %call.id, "skipping call with unusable id");
            continue;
        };

        let caregiver_summary = summarize_transcript(
            state.llm.as_ref(),
            &call.id,
            call.transcript.as_deref(),
            &client_name,
        )
        .await;

        let document = SummaryDocument {
            call,
            client_name: Some(client_name.clone()),
            caregiver_summary,
        };
        store::write_json_atomic(&path, &document)?;
        tracing::info!(call_id = %document.call.id, path = %path.display(), "saved call summary");

        documents.push(document);
    }

    tracing::info!(count = documents.len(), "summarized call logs");
    Ok(documents)
}
