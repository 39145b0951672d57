//! Language-model critique of a scored resume
//!
//! The scoring engine produces the numbers; this module asks a text generator
//! for prose around them. Generators sit behind [`NarrativeGenerator`] so the
//! HTTP client can be swapped for a canned one in tests.

mod gemini;
mod parse;
mod prompts;

pub use gemini::{candidate_text, is_ai_available, validate_api_key, GeminiClient, DEFAULT_MODEL};
pub use parse::{parse_sections, parse_suggestions, GENERAL_SECTION};
pub use prompts::PromptBuilder;

use crate::Report;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("GEMINI_API_KEY not found or invalid in environment variables")]
    NoApiKey,
    #[error("AI feature not enabled. Rebuild with: cargo build --features ai")]
    FeatureDisabled,
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Rate limited - try again later")]
    RateLimited,
    #[error("API error: {0}")]
    Api(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Anything that turns a prompt into free-form text
pub trait NarrativeGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError>;
}

impl<F> NarrativeGenerator for F
where
    F: Fn(&str) -> Result<String, NarrativeError> + Send + Sync,
{
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        self(prompt)
    }
}

/// Score plus critique for one resume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub ats_score: Report,
    pub ai_analysis: String,
    pub detailed_feedback: DetailedFeedback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedFeedback {
    /// Response split on `**Header**` lines
    pub sections: BTreeMap<String, String>,
    pub full_text: String,
}

/// Score the text, then ask the generator for a critique of it.
pub fn analyze(
    resume_text: &str,
    generator: &dyn NarrativeGenerator,
) -> Result<AnalysisResult, NarrativeError> {
    analyze_report(resume_text, &crate::score(resume_text), generator)
}

/// Critique text that has already been scored.
pub fn analyze_report(
    resume_text: &str,
    report: &Report,
    generator: &dyn NarrativeGenerator,
) -> Result<AnalysisResult, NarrativeError> {
    let prompt = PromptBuilder::analysis(resume_text, report);
    debug!(score = report.total_score, prompt_len = prompt.len(), "requesting critique");

    let response = generator.generate(&prompt)?;
    let sections = parse_sections(&response);

    Ok(AnalysisResult {
        ats_score: report.clone(),
        ai_analysis: response.clone(),
        detailed_feedback: DetailedFeedback {
            sections,
            full_text: response,
        },
    })
}

/// Suggestions for one criterion; a failed request degrades to a single explanatory line.
pub fn improvement_suggestions(
    resume_text: &str,
    criterion_name: &str,
    generator: &dyn NarrativeGenerator,
) -> Vec<String> {
    let prompt = PromptBuilder::improvement_suggestions(resume_text, criterion_name);
    match generator.generate(&prompt) {
        Ok(response) => parse_suggestions(&response),
        Err(e) => {
            warn!(criterion = criterion_name, error = %e, "suggestion request failed");
            vec![format!("Unable to generate suggestions: {}", e)]
        }
    }
}

/// Advice for a target role; a failed request degrades to an explanatory sentence.
pub fn tailored_advice(
    resume_text: &str,
    target_role: &str,
    generator: &dyn NarrativeGenerator,
) -> String {
    let prompt = PromptBuilder::tailored_advice(resume_text, target_role);
    generator.generate(&prompt).unwrap_or_else(|e| {
        warn!(role = target_role, error = %e, "advice request failed");
        format!("Unable to generate advice: {}", e)
    })
}
