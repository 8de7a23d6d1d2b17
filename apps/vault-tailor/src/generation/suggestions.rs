//! Resume suggestions — one prompt, one request, text back.
//!
//! Failures never abort the run: they come back as a descriptive message
//! standing in for the suggestions, so the caller always has text to write.

use tracing::{info, warn};

use crate::generation::prompts::SUGGESTION_INSTRUCTIONS;
use crate::llm_client::{LlmError, TextGenerator};

/// Embeds the portfolio and job description verbatim after the fixed
/// instructions.
pub fn build_suggestion_prompt(portfolio_context: &str, job_description: &str) -> String {
    format!(
        "{SUGGESTION_INSTRUCTIONS}\n\n---\n\n**My Professional Portfolio:**\n{portfolio_context}\n\n---\n\n**The Target Job Description:**\n{job_description}\n"
    )
}

/// Generates suggestions, or a message describing why it could not.
pub async fn generate_suggestions(
    llm: &dyn TextGenerator,
    portfolio_context: &str,
    job_description: &str,
) -> String {
    let prompt = build_suggestion_prompt(portfolio_context, job_description);
    info!("Requesting suggestions ({} char prompt)", prompt.len());

    match llm.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Suggestion request failed: {e}");
            describe_failure(e)
        }
    }
}

fn describe_failure(error: LlmError) -> String {
    match error {
        LlmError::MissingCandidate { raw } => format!(
            "Error: Could not extract valid content from API response. Full response: {raw}"
        ),
        other => format!("An error occurred with the API request: {other}"),
    }
}
