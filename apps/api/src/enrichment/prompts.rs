//! Prompt builders for the enrichment batch calls. Each prompt instructs the
//! model to answer with a single JSON object keyed by subject name so the
//! whole batch costs one call.

use crate::enrichment::CareerMatchSummary;
use crate::matching::UserSkillEntry;

pub fn career_reasoning_prompt(
    careers: &[CareerMatchSummary],
    user_skills: &[String],
    interests: &[String],
) -> String {
    let career_lines = careers
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {} ({}% match)", i + 1, c.career_name, c.match_score))
        .collect::<Vec<_>>()
        .join("\n");

    let interests_line = if interests.is_empty() {
        String::new()
    } else {
        format!("And interests: {}\n", interests.join(", "))
    };

    format!(
        r#"You are a career advisor. For each career below, provide a brief 1-2 sentence explanation of why it matches someone with these skills: {skills}
{interests_line}
CAREERS TO ANALYZE:
{career_lines}

Respond in JSON format ONLY (no markdown):
{{
    "reasoning": {{
        "Career Name 1": "Why this career matches...",
        "Career Name 2": "Why this career matches..."
    }}
}}"#,
        skills = user_skills.join(", "),
    )
}

pub fn learning_strategies_prompt(skills: &[String]) -> String {
    let skill_lines = skills
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a learning advisor. For each skill below, provide a brief 2-3 sentence learning strategy including estimated time to job-ready level.

SKILLS:
{skill_lines}

Respond in JSON format ONLY (no markdown):
{{
    "strategies": {{
        "Skill Name 1": "Learning strategy...",
        "Skill Name 2": "Learning strategy..."
    }}
}}"#
    )
}

pub fn gap_analyses_prompt(
    user_skills: &[UserSkillEntry],
    careers: &[CareerMatchSummary],
) -> String {
    let skills_summary = user_skills
        .iter()
        .map(|s| format!("{} ({})", s.skill_name, s.proficiency_level))
        .collect::<Vec<_>>()
        .join(", ");

    let career_lines = careers
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "{}. {}: Needs {}",
                i + 1,
                c.career_name,
                c.missing_skills
                    .iter()
                    .chain(c.matching_skills.iter())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a career guidance AI. Briefly analyze skill gaps for each career.

USER SKILLS: {skills_summary}

CAREERS:
{career_lines}

For each career, provide a 2-3 sentence analysis covering readiness level and key gaps.

Respond in JSON format ONLY (no markdown):
{{
    "analyses": {{
        "Career Name 1": "Analysis...",
        "Career Name 2": "Analysis..."
    }}
}}"#
    )
}
