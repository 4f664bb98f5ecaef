//! Match Calculator — weighted comparison of a user's skill set against a
//! career's required-skill set.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::proficiency::{Importance, Proficiency};

/// Weight applied to a required skill whose author left the weight unset.
pub const DEFAULT_WEIGHT: f64 = 5.0;

/// One entry of a user's skill profile as seen by the calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillEntry {
    pub skill_name: String,
    pub proficiency_level: Proficiency,
}

/// One required skill of a career. Read-only input to scoring; comes either
/// from seed data or from an AI-generated career.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredSkill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<Uuid>,
    pub skill_name: String,
    pub importance: Importance,
    pub minimum_proficiency: Proficiency,
    /// Relative weight in the weighted score, nominally 1-10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl RequiredSkill {
    /// Unset or non-positive weights fall back to [`DEFAULT_WEIGHT`].
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w > 0.0 => w,
            _ => DEFAULT_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingSkill {
    pub skill_name: String,
    pub user_proficiency: Proficiency,
    pub required_proficiency: Proficiency,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSkill {
    pub skill_name: String,
    pub user_proficiency: Proficiency,
    pub required_proficiency: Proficiency,
    pub gap: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingSkill {
    pub skill_name: String,
    pub importance: Importance,
    pub required_proficiency: Proficiency,
}

/// Categorized result of comparing a user against one career.
///
/// The three lists partition the required-skill input exactly: every required
/// skill lands in exactly one of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    /// Integer percentage, 0-100 inclusive.
    pub match_score: u32,
    pub matching_skills: Vec<MatchingSkill>,
    pub partial_skills: Vec<PartialSkill>,
    pub missing_skills: Vec<MissingSkill>,
}

/// Computes the weighted skill match between a user and one career.
///
/// Per required skill (exact, case-sensitive name lookup):
/// - absent from the user's set: missing, contributes nothing;
/// - present at or above the required level: matching, full weight;
/// - present below the required level: partial, proportional credit
///   `(user_score / required_score) * weight`.
///
/// `match_score = round(100 * achieved / total)`, or 0 when there are no
/// required skills. Pure function; no side effects.
pub fn compute_match(
    user_skills: &[UserSkillEntry],
    required_skills: &[RequiredSkill],
) -> MatchBreakdown {
    let mut matching_skills = Vec::new();
    let mut partial_skills = Vec::new();
    let mut missing_skills = Vec::new();

    let mut total_weight = 0.0_f64;
    let mut achieved_weight = 0.0_f64;

    for required in required_skills {
        let weight = required.effective_weight();
        total_weight += weight;

        let user_skill = user_skills
            .iter()
            .find(|s| s.skill_name == required.skill_name);

        match user_skill {
            None => missing_skills.push(MissingSkill {
                skill_name: required.skill_name.clone(),
                importance: required.importance,
                required_proficiency: required.minimum_proficiency,
            }),
            Some(user) => {
                let user_score = user.proficiency_level.score();
                let required_score = required.minimum_proficiency.score();

                if user_score >= required_score {
                    matching_skills.push(MatchingSkill {
                        skill_name: required.skill_name.clone(),
                        user_proficiency: user.proficiency_level,
                        required_proficiency: required.minimum_proficiency,
                    });
                    achieved_weight += weight;
                } else {
                    partial_skills.push(PartialSkill {
                        skill_name: required.skill_name.clone(),
                        user_proficiency: user.proficiency_level,
                        required_proficiency: required.minimum_proficiency,
                        gap: format!(
                            "Need to improve from {} to {}",
                            user.proficiency_level, required.minimum_proficiency
                        ),
                    });
                    // Partial credit
                    achieved_weight += (user_score as f64 / required_score as f64) * weight;
                }
            }
        }
    }

    let match_score = if total_weight > 0.0 {
        ((achieved_weight / total_weight) * 100.0).round() as u32
    } else {
        0
    };

    MatchBreakdown {
        match_score,
        matching_skills,
        partial_skills,
        missing_skills,
    }
}
