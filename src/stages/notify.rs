use crate::config::required;
use crate::errors::PipelineError;
use crate::models::{AuditEntry, CaregiverSummary, Roster, SummaryDocument};
use crate::services::mail::OutgoingEmail;
use crate::state::AppState;
use crate::store::{self, audit, summaries};

pub const NO_SUMMARY_TEXT: &str = "No summary available.";

const SIGN_OFF: [&str; 6] = [
    "",
    "Thank you for trusting Karunā to check-in with your family!",
    "",
    "With love,",
    "Your Karunā Care Team",
    "https://tinyurl.com/karuna2025",
];

pub async fn send_latest_summary(state: &AppState) -> Result<AuditEntry, PipelineError> {
    let config = &state.config;

    let latest = summaries::latest_summary_file(&config.summaries_dir())?;
    let document: SummaryDocument = store::read_json(&latest)?;
    let roster = Roster::load(&config.roster_path)?;

    let sender = required(&config.email_sender, "EMAIL_SENDER")?;
    required(&config.email_password, "EMAIL_PASSWORD")?;

    let client_name = document
        .client_name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| document.call.id.clone());

    let client = roster.find_by_name(&client_name);
    let caregiver_email = client
        .map(|c| c.caregiver_email.as_str())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| {
            PipelineError::NotFound(format!("caregiver email for client '{client_name}'"))
        })?;
    let caregiver_name = client.map(|c| c.caregiver_name.as_str()).unwrap_or_default();

    let email = OutgoingEmail {
        from: sender.to_string(),
        to: caregiver_email.to_string(),
        subject: format!("Karunā Caregiver Update for {client_name}"),
        body: compose_body(caregiver_name, &client_name, &document.caregiver_summary),
    };

    state
        .mailer
        .send(&email)
        .await
        .map_err(PipelineError::Mail)?;
    tracing::info!(to = %caregiver_email, summary = %latest.display(), "caregiver email sent");

    let entry = AuditEntry::new(&client_name, caregiver_email, &document.caregiver_summary);
    let audit_path = config.audit_log_path();
    if let Err(e) = audit::append_jsonl(&audit_path, &entry) {
        tracing::warn!(error = %e, path = %audit_path.display(), "could not append to audit log");
    }

    Ok(entry)
}

pub fn compose_body(caregiver_name: &str, client_name: &str, summary: &CaregiverSummary) -> String {
    let summary_text = summary.today_summary.as_deref().unwrap_or(NO_SUMMARY_TEXT);

    let mut lines = vec![
        format!("Hello {caregiver_name},"),
        String::new(),
        format!("Here's today's check-in summary for {client_name}:"),
        String::new(),
        format!("Summary: {summary_text}"),
    ];

    if let Some(mood) = summary.mood {
        lines.push(format!("\nMood: {mood}"));
    }

    if !summary.notable_observations.is_empty() {
        let bullets: String = summary
            .notable_observations
            .iter()
            .map(|o| format!("\n  - {o}"))
            .collect();
        lines.push(format!("\nObservations:{bullets}"));
    }

    if let Some(items) = summary.action_items.as_ref().filter(|i| !i.is_empty()) {
        lines.push(format!("\nSuggested Action Items: {items}"));
    }

    lines.extend(SIGN_OFF.iter().map(|l| l.to_string()));
    lines.join("\n")
}
