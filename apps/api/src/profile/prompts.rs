//! Prompt builder for the resume read.

/// The resume text is capped before prompting so oversized uploads cannot
/// blow the context window.
const RESUME_PROMPT_TEXT_CAP: usize = 4000;

pub fn resume_extract_prompt(resume_text: &str) -> String {
    let excerpt: String = resume_text.chars().take(RESUME_PROMPT_TEXT_CAP).collect();

    format!(
        r#"Extract from this resume (JSON only, no markdown):

{excerpt}

{{
    "skills": ["skill1", "skill2"],
    "experience": "Brief 1-2 sentences",
    "summary": "1-2 sentences",
    "recommendations": ["rec1", "rec2", "rec3"]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_caps_resume_text() {
        let long_text = "x".repeat(10_000);
        let prompt = resume_extract_prompt(&long_text);
        // Prompt holds the capped excerpt plus the fixed scaffolding.
        assert!(prompt.len() < 5000);
    }
}
