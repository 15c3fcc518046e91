use crate::models::CaregiverSummary;
use crate::services::ai::LlmProvider;

pub const NO_TRANSCRIPT_SUMMARY: &str = "No transcript available for this call.";
pub const GENERATION_FAILED_SUMMARY: &str = "Error generating summary.";

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("language model request failed: {0:#}")]
    Request(anyhow::Error),

    #[error("no JSON object found in model response")]
    NoJsonObject,

    #[error("model response is not a valid summary: {0}")]
    InvalidSummary(#[from] serde_json::Error),
}

pub fn build_prompt(transcript: &str, client_name: &str) -> String {
    format!(
        "You are a helpful assistant that provides concise, friendly updates to caregivers.\n\
         The client's name is {client_name}.\n\
         Analyze the following call transcript and provide a structured summary in JSON format with these fields:\n\
         - \"today_summary\": A brief, warm summary of the conversation (4-5 sentences, refer to the client by name)\n\
         - \"mood\": The person's overall mood (Positive/Neutral/Negative)\n\
         - \"notable_observations\": A list of important observations about their well-being or any concerns they shared\n\n\
         Keep the tone warm and conversational. Focus on how the person was feeling and any notable changes in their condition or mood.\n\n\
         Transcript:\n{transcript}\n\n\
         Provide the response in valid JSON format only."
    )
}

pub async fn generate_summary(
    llm: &dyn LlmProvider,
    transcript: &str,
    client_name: &str,
) -> Result<CaregiverSummary, GenerationError> {
    let prompt = build_prompt(transcript, client_name);
    let response = llm.generate(&prompt).await.map_err(GenerationError::Request)?;
    parse_summary_response(&response)
}

pub fn parse_summary_response(response: &str) -> Result<CaregiverSummary, GenerationError> {
    let start = response.find('{').ok_or(GenerationError::NoJsonObject)?;
    let end = response.rfind('}').ok_or(GenerationError::NoJsonObject)?;
    if end < start {
        return Err(GenerationError::NoJsonObject);
    }

    Ok(serde_json::from_str(&response[start..=end])?)
}

pub async fn summarize_transcript(
    llm: &dyn LlmProvider,
    call_id: &str,
    transcript: Option<&str>,
    client_name: &str,
) -> CaregiverSummary {
    let transcript = match transcript.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return CaregiverSummary::fallback(NO_TRANSCRIPT_SUMMARY),
    };

    match generate_summary(llm, transcript, client_name).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(call_id = %call_id, error = %e, "summary generation failed, using fallback");
            CaregiverSummary::fallback(GENERATION_FAILED_SUMMARY)
        }
    }
}
