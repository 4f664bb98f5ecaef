//! Narrative enrichment — batched LLM commentary attached to already-computed
//! results.
//!
//! Three structurally identical contracts: build one batched prompt, parse a
//! JSON object keyed by subject name, substitute a fixed fallback string for
//! any subject the response missed. A failed or malformed LLM call degrades
//! to fallback text for every subject; it never fails the enclosing request,
//! and numeric scoring never depends on it.

pub mod prompts;

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::llm_client::{CallParams, LlmClient};
use crate::matching::UserSkillEntry;

/// Computed career summary handed to the reasoning and analysis prompts.
#[derive(Debug, Clone)]
pub struct CareerMatchSummary {
    pub career_name: String,
    pub match_score: u32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

pub const REASONING_FALLBACK: &str = "Great career match based on your skills!";
const REASONING_ERROR_FALLBACK: &str = "This career aligns well with your skill set.";
pub const ANALYSIS_FALLBACK: &str = "Unable to generate AI insights at this time.";

#[derive(Debug, Deserialize)]
struct ReasoningResponse {
    #[serde(default)]
    reasoning: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct StrategiesResponse {
    #[serde(default)]
    strategies: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct AnalysesResponse {
    #[serde(default)]
    analyses: HashMap<String, String>,
}

/// One-call reasoning for a batch of ranked careers: why does each one match
/// this user? Keyed by career name.
pub async fn batch_career_reasoning(
    llm: &LlmClient,
    careers: &[CareerMatchSummary],
    user_skills: &[String],
    interests: &[String],
) -> HashMap<String, String> {
    let prompt = prompts::career_reasoning_prompt(careers, user_skills, interests);
    let params = CallParams {
        temperature: 0.7,
        max_tokens: 400,
    };

    match llm.call_json::<ReasoningResponse>(&prompt, params).await {
        Ok(parsed) => fill_missing(
            parsed.reasoning,
            careers.iter().map(|c| c.career_name.as_str()),
            |_| REASONING_FALLBACK.to_string(),
        ),
        Err(e) => {
            warn!("Batch career reasoning failed: {e}");
            careers
                .iter()
                .map(|c| (c.career_name.clone(), REASONING_ERROR_FALLBACK.to_string()))
                .collect()
        }
    }
}

/// One-call learning strategies for a batch of skills. Keyed by skill name.
pub async fn batch_learning_strategies(
    llm: &LlmClient,
    skills: &[String],
) -> HashMap<String, String> {
    let prompt = prompts::learning_strategies_prompt(skills);
    let params = CallParams {
        temperature: 0.7,
        max_tokens: 500,
    };

    match llm.call_json::<StrategiesResponse>(&prompt, params).await {
        Ok(parsed) => fill_missing(
            parsed.strategies,
            skills.iter().map(String::as_str),
            strategy_fallback,
        ),
        Err(e) => {
            warn!("Batch learning strategies failed: {e}");
            skills
                .iter()
                .map(|s| {
                    (
                        s.clone(),
                        format!("Start with fundamentals and practice {s} regularly."),
                    )
                })
                .collect()
        }
    }
}

/// One-call readiness analyses for a batch of careers, given the user's
/// leveled skills. Keyed by career name.
pub async fn batch_gap_analyses(
    llm: &LlmClient,
    user_skills: &[UserSkillEntry],
    careers: &[CareerMatchSummary],
) -> HashMap<String, String> {
    let prompt = prompts::gap_analyses_prompt(user_skills, careers);
    let params = CallParams {
        temperature: 0.7,
        max_tokens: 600,
    };

    match llm.call_json::<AnalysesResponse>(&prompt, params).await {
        Ok(parsed) => fill_missing(
            parsed.analyses,
            careers.iter().map(|c| c.career_name.as_str()),
            |_| ANALYSIS_FALLBACK.to_string(),
        ),
        Err(e) => {
            warn!("Batch gap analysis failed: {e}");
            careers
                .iter()
                .map(|c| (c.career_name.clone(), ANALYSIS_FALLBACK.to_string()))
                .collect()
        }
    }
}

pub fn strategy_fallback(skill: &str) -> String {
    format!("Focus on building strong fundamentals in {skill} through hands-on projects.")
}

/// Ensures every expected subject has an entry, filling gaps with `fallback`.
fn fill_missing<'a>(
    mut map: HashMap<String, String>,
    subjects: impl Iterator<Item = &'a str>,
    fallback: impl Fn(&str) -> String,
) -> HashMap<String, String> {
    for subject in subjects {
        if !map.contains_key(subject) {
            map.insert(subject.to_string(), fallback(subject));
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str) -> CareerMatchSummary {
        CareerMatchSummary {
            career_name: name.to_string(),
            match_score: 80,
            matching_skills: vec!["SQL".to_string()],
            missing_skills: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_fill_missing_keeps_parsed_entries() {
        let mut map = HashMap::new();
        map.insert("Data Scientist".to_string(), "Strong math overlap.".to_string());

        let filled = fill_missing(
            map,
            ["Data Scientist", "DevOps Engineer"].into_iter(),
            |_| REASONING_FALLBACK.to_string(),
        );

        assert_eq!(filled["Data Scientist"], "Strong math overlap.");
        assert_eq!(filled["DevOps Engineer"], REASONING_FALLBACK);
    }

    #[test]
    fn test_fill_missing_with_empty_map_fills_everything() {
        let filled = fill_missing(HashMap::new(), ["A", "B"].into_iter(), |s| {
            format!("fallback for {s}")
        });
        assert_eq!(filled.len(), 2);
        assert_eq!(filled["A"], "fallback for A");
    }

    #[test]
    fn test_reasoning_response_tolerates_missing_field() {
        // A response that parses as JSON but lacks the expected key decodes to
        // an empty map, which then falls back for every career.
        let parsed: ReasoningResponse = serde_json::from_str(r#"{"unexpected": 1}"#).unwrap();
        assert!(parsed.reasoning.is_empty());
    }

    #[test]
    fn test_reasoning_response_decodes_expected_shape() {
        let json = r#"{"reasoning": {"Data Scientist": "Because math.", "UX Designer": "Because empathy."}}"#;
        let parsed: ReasoningResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.reasoning.len(), 2);
        assert_eq!(parsed.reasoning["Data Scientist"], "Because math.");
    }

    #[test]
    fn test_strategies_response_decodes_expected_shape() {
        let json = r#"{"strategies": {"Rust": "Read the book, then build a CLI."}}"#;
        let parsed: StrategiesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.strategies["Rust"], "Read the book, then build a CLI.");
    }

    #[test]
    fn test_analyses_response_decodes_expected_shape() {
        let json = r#"{"analyses": {"DevOps Engineer": "Nearly ready; learn Terraform."}}"#;
        let parsed: AnalysesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.analyses.len(), 1);
    }

    #[test]
    fn test_reasoning_prompt_mentions_every_career_and_score() {
        let careers = vec![summary("Data Scientist"), summary("UX Designer")];
        let prompt = prompts::career_reasoning_prompt(
            &careers,
            &["SQL".to_string()],
            &["AI".to_string()],
        );
        assert!(prompt.contains("Data Scientist"));
        assert!(prompt.contains("UX Designer"));
        assert!(prompt.contains("80% match"));
        assert!(prompt.contains("AI"));
    }

    #[test]
    fn test_strategies_prompt_numbers_the_skills() {
        let prompt =
            prompts::learning_strategies_prompt(&["Rust".to_string(), "Docker".to_string()]);
        assert!(prompt.contains("1. Rust"));
        assert!(prompt.contains("2. Docker"));
    }
}
