//! AI career generation. The LLM proposes careers as JSON; each entry is
//! decoded individually through a schema-validated draft type so one bad
//! entry drops with a warning instead of sinking the whole batch.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::{CallParams, LlmClient};
use crate::matching::proficiency::{
    default_importance, default_proficiency, lenient_importance, lenient_proficiency,
};
use crate::matching::{RequiredSkill, UserSkillEntry};

use super::prompts;

/// An ephemeral AI-generated career. Same shape as a stored career plus a
/// synthetic id; the match calculator accepts both interchangeably.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCareer {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_reason: Option<String>,
    pub required_skills: Vec<RequiredSkill>,
    pub salary_range: String,
    pub growth_outlook: String,
}

#[derive(Debug, Deserialize)]
struct CareersEnvelope {
    #[serde(default)]
    careers: Vec<serde_json::Value>,
}

/// Wire shape of one generated career. Lenient on the fields the model is
/// known to get wrong; strict enough that a nameless skill is a decode error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CareerDraft {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    match_reason: Option<String>,
    #[serde(default)]
    required_skills: Vec<RequiredSkillDraft>,
    #[serde(default = "varies")]
    salary_range: String,
    #[serde(default = "stable")]
    growth_outlook: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequiredSkillDraft {
    #[serde(alias = "name")]
    skill_name: String,
    #[serde(
        default = "default_importance",
        deserialize_with = "lenient_importance"
    )]
    importance: crate::matching::Importance,
    #[serde(
        alias = "proficiency",
        default = "default_proficiency",
        deserialize_with = "lenient_proficiency"
    )]
    minimum_proficiency: crate::matching::Proficiency,
}

fn varies() -> String {
    "Varies".to_string()
}

fn stable() -> String {
    "Stable".to_string()
}

impl CareerDraft {
    fn into_career(self, id: String) -> GeneratedCareer {
        GeneratedCareer {
            id,
            title: self.title,
            description: self.description,
            match_reason: self.match_reason,
            required_skills: self
                .required_skills
                .into_iter()
                .map(|s| RequiredSkill {
                    skill_id: None,
                    skill_name: s.skill_name,
                    importance: s.importance,
                    minimum_proficiency: s.minimum_proficiency,
                    weight: None,
                })
                .collect(),
            salary_range: self.salary_range,
            growth_outlook: self.growth_outlook,
        }
    }
}

/// Generates careers for an industry/keyword. An LLM failure logs and yields
/// an empty list; the handler turns that into a user-facing 404.
pub async fn generate_careers(llm: &LlmClient, industry: &str) -> Vec<GeneratedCareer> {
    let prompt = prompts::generate_careers_prompt(industry);
    let params = CallParams {
        temperature: 0.7,
        max_tokens: 800,
    };

    let envelope = match llm.call_json::<CareersEnvelope>(&prompt, params).await {
        Ok(env) => env,
        Err(e) => {
            warn!("Career generation failed for '{industry}': {e}");
            return Vec::new();
        }
    };

    let slug = slugify(industry);
    decode_drafts(envelope.careers, |i| format!("ai-{slug}-{i}"))
}

/// Suggests careers personalized to the user's skills and interests.
pub async fn suggest_careers(
    llm: &LlmClient,
    user_skills: &[UserSkillEntry],
    interests: Option<&str>,
) -> Vec<GeneratedCareer> {
    let prompt = prompts::suggest_careers_prompt(user_skills, interests);
    let params = CallParams {
        temperature: 0.7,
        max_tokens: 800,
    };

    let envelope = match llm.call_json::<CareersEnvelope>(&prompt, params).await {
        Ok(env) => env,
        Err(e) => {
            warn!("Career suggestion failed: {e}");
            return Vec::new();
        }
    };

    decode_drafts(envelope.careers, |i| format!("suggested-{i}"))
}

fn decode_drafts(
    raw: Vec<serde_json::Value>,
    make_id: impl Fn(usize) -> String,
) -> Vec<GeneratedCareer> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(i, value)| {
            match serde_json::from_value::<CareerDraft>(value) {
                Ok(draft) => Some(draft.into_career(make_id(i))),
                Err(e) => {
                    warn!("Dropping malformed generated career at index {i}: {e}");
                    None
                }
            }
        })
        .collect()
}

fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{Importance, Proficiency};
    use serde_json::json;

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Health  Care"), "health-care");
        assert_eq!(slugify("Tech"), "tech");
    }

    #[test]
    fn test_draft_accepts_name_alias_for_skill_name() {
        let value = json!({
            "title": "Data Engineer",
            "requiredSkills": [{"name": "SQL", "importance": "Essential", "minimumProficiency": "Advanced"}]
        });
        let draft: CareerDraft = serde_json::from_value(value).unwrap();
        assert_eq!(draft.required_skills[0].skill_name, "SQL");
        assert_eq!(draft.required_skills[0].importance, Importance::Critical);
    }

    #[test]
    fn test_draft_defaults_unknown_proficiency_to_intermediate() {
        let value = json!({
            "title": "Data Engineer",
            "requiredSkills": [{"skillName": "SQL", "importance": "Essential", "minimumProficiency": "Ninja"}]
        });
        let draft: CareerDraft = serde_json::from_value(value).unwrap();
        assert_eq!(
            draft.required_skills[0].minimum_proficiency,
            Proficiency::Intermediate
        );
    }

    #[test]
    fn test_draft_defaults_missing_salary_and_outlook() {
        let value = json!({"title": "Data Engineer"});
        let draft: CareerDraft = serde_json::from_value(value).unwrap();
        assert_eq!(draft.salary_range, "Varies");
        assert_eq!(draft.growth_outlook, "Stable");
        assert!(draft.required_skills.is_empty());
    }

    #[test]
    fn test_nameless_skill_is_a_decode_error() {
        let value = json!({
            "title": "Data Engineer",
            "requiredSkills": [{"importance": "Essential"}]
        });
        assert!(serde_json::from_value::<CareerDraft>(value).is_err());
    }

    #[test]
    fn test_decode_drafts_drops_bad_entries_and_keeps_ids_by_index() {
        let raw = vec![
            json!({"title": "Keeper"}),
            json!({"nope": true}),
            json!({"title": "Also Kept"}),
        ];
        let careers = decode_drafts(raw, |i| format!("ai-tech-{i}"));
        assert_eq!(careers.len(), 2);
        assert_eq!(careers[0].id, "ai-tech-0");
        // Index reflects position in the model's list, not the surviving list.
        assert_eq!(careers[1].id, "ai-tech-2");
    }

    #[test]
    fn test_envelope_without_careers_field_is_empty() {
        let envelope: CareersEnvelope = serde_json::from_str(r#"{"foo": 1}"#).unwrap();
        assert!(envelope.careers.is_empty());
    }

    #[test]
    fn test_generated_required_skills_have_default_weight_semantics() {
        let value = json!({
            "title": "Data Engineer",
            "requiredSkills": [{"skillName": "SQL", "importance": "Important", "minimumProficiency": "Beginner"}]
        });
        let draft: CareerDraft = serde_json::from_value(value).unwrap();
        let career = draft.into_career("ai-x-0".to_string());
        // Unweighted AI skills score with the default weight in the calculator.
        assert_eq!(career.required_skills[0].effective_weight(), 5.0);
    }
}
