//! Prompt builders for AI career generation.

use crate::matching::UserSkillEntry;

pub fn generate_careers_prompt(industry: &str) -> String {
    format!(
        r#"Generate 6 jobs in "{industry}" industry. JSON only, no markdown:

{{
    "careers": [{{
        "title": "Job Title",
        "description": "1 sentence",
        "requiredSkills": [{{"skillName": "X", "importance": "Essential", "minimumProficiency": "Intermediate"}}],
        "salaryRange": "$XX,XXX - $XX,XXX",
        "growthOutlook": "High demand"
    }}]
}}"#
    )
}

pub fn suggest_careers_prompt(user_skills: &[UserSkillEntry], interests: Option<&str>) -> String {
    let skills_list = if user_skills.is_empty() {
        "No skills yet".to_string()
    } else {
        user_skills
            .iter()
            .map(|s| format!("{}({})", s.skill_name, s.proficiency_level))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let interests_line = match interests {
        Some(i) if !i.trim().is_empty() => format!("Interests: {i}\n"),
        _ => String::new(),
    };

    format!(
        r#"Suggest 6 careers for someone with: {skills_list}
{interests_line}
JSON only, no markdown:
{{
    "careers": [{{
        "title": "Job Title",
        "description": "Why this matches (1 sentence)",
        "matchReason": "Skill alignment",
        "requiredSkills": [{{"skillName": "X", "importance": "Essential", "minimumProficiency": "Intermediate"}}],
        "salaryRange": "$XX,XXX - $XX,XXX",
        "growthOutlook": "High demand"
    }}]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Proficiency;

    #[test]
    fn test_suggest_prompt_lists_skills_with_levels() {
        let skills = vec![UserSkillEntry {
            skill_name: "SQL".to_string(),
            proficiency_level: Proficiency::Advanced,
        }];
        let prompt = suggest_careers_prompt(&skills, Some("data"));
        assert!(prompt.contains("SQL(Advanced)"));
        assert!(prompt.contains("Interests: data"));
    }

    #[test]
    fn test_suggest_prompt_handles_empty_profile() {
        let prompt = suggest_careers_prompt(&[], None);
        assert!(prompt.contains("No skills yet"));
        assert!(!prompt.contains("Interests:"));
    }
}
