//! Resume upload: PDF text extraction and LLM analysis.

use bytes::Bytes;
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::{CallParams, LlmClient};
use crate::models::user::{ResumeAnalysis, ResumeRecord};

use super::prompts;

/// Minimum extracted-text length for a usable resume.
const MIN_TEXT_LENGTH: usize = 50;
/// Stored text is truncated to this many characters.
const STORED_TEXT_CAP: usize = 10_000;

/// Wire shape of the LLM's resume read; every field has a deterministic
/// fallback so a sparse response still yields a complete analysis.
#[derive(Debug, Deserialize)]
struct ResumeAnalysisDraft {
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default = "no_experience")]
    experience: String,
    #[serde(default = "no_summary")]
    summary: String,
    #[serde(default)]
    recommendations: Vec<String>,
}

fn no_experience() -> String {
    "Unable to extract experience".to_string()
}

fn no_summary() -> String {
    "Unable to generate summary".to_string()
}

impl From<ResumeAnalysisDraft> for ResumeAnalysis {
    fn from(draft: ResumeAnalysisDraft) -> Self {
        ResumeAnalysis {
            skills: draft.skills,
            experience: draft.experience,
            summary: draft.summary,
            recommendations: draft.recommendations,
        }
    }
}

/// Extracts text from an uploaded PDF, rejecting files that parse to nothing
/// useful. Boundary validation: both failure modes are user-correctable.
pub fn extract_resume_text(data: &Bytes) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(data).map_err(|e| {
        warn!("PDF parsing error: {e}");
        AppError::Validation(
            "Failed to parse PDF. Please ensure it contains readable text.".to_string(),
        )
    })?;

    if text.trim().len() < MIN_TEXT_LENGTH {
        return Err(AppError::Validation(
            "Could not extract sufficient text from PDF. Please upload a text-based PDF."
                .to_string(),
        ));
    }

    Ok(text)
}

/// Runs the LLM resume read. Any LLM failure degrades to the fixed fallback
/// analysis; the upload itself still succeeds.
pub async fn analyze_resume(llm: &LlmClient, resume_text: &str) -> ResumeAnalysis {
    let prompt = prompts::resume_extract_prompt(resume_text);
    let params = CallParams {
        temperature: 0.3,
        max_tokens: 500,
    };

    match llm.call_json::<ResumeAnalysisDraft>(&prompt, params).await {
        Ok(draft) => draft.into(),
        Err(e) => {
            warn!("Resume analysis failed: {e}");
            ResumeAnalysis {
                skills: Vec::new(),
                experience: "Analysis failed".to_string(),
                summary: "Unable to analyze resume at this time".to_string(),
                recommendations: vec!["Please try uploading again".to_string()],
            }
        }
    }
}

/// Assembles the stored record, truncating the text snapshot.
pub fn build_resume_record(
    file_name: String,
    text: &str,
    analysis: ResumeAnalysis,
) -> ResumeRecord {
    ResumeRecord {
        file_name,
        uploaded_at: Utc::now(),
        text_content: text.chars().take(STORED_TEXT_CAP).collect(),
        analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_fills_missing_fields_with_fallbacks() {
        let draft: ResumeAnalysisDraft = serde_json::from_str(r#"{"skills": ["SQL"]}"#).unwrap();
        let analysis: ResumeAnalysis = draft.into();
        assert_eq!(analysis.skills, vec!["SQL"]);
        assert_eq!(analysis.experience, "Unable to extract experience");
        assert_eq!(analysis.summary, "Unable to generate summary");
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_draft_decodes_complete_response() {
        let json = r#"{
            "skills": ["Rust", "SQL"],
            "experience": "Five years of backend work.",
            "summary": "Backend engineer.",
            "recommendations": ["Learn Kubernetes"]
        }"#;
        let draft: ResumeAnalysisDraft = serde_json::from_str(json).unwrap();
        let analysis: ResumeAnalysis = draft.into();
        assert_eq!(analysis.skills.len(), 2);
        assert_eq!(analysis.recommendations.len(), 1);
    }

    #[test]
    fn test_non_pdf_bytes_are_rejected() {
        let data = Bytes::from_static(b"this is not a pdf");
        let result = extract_resume_text(&data);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_build_resume_record_truncates_text() {
        let text = "a".repeat(20_000);
        let record = build_resume_record(
            "cv.pdf".to_string(),
            &text,
            ResumeAnalysis {
                skills: vec![],
                experience: String::new(),
                summary: String::new(),
                recommendations: vec![],
            },
        );
        assert_eq!(record.text_content.chars().count(), 10_000);
        assert_eq!(record.file_name, "cv.pdf");
    }
}
