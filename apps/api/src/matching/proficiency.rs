//! Proficiency and importance scales shared across the matching engine.

use serde::{Deserialize, Deserializer, Serialize};

/// Ordinal skill-strength level. The derived ordering follows the numeric
/// score (Beginner < Intermediate < Advanced < Expert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Numeric score used by the weighted match computation.
    pub fn score(self) -> u32 {
        match self {
            Proficiency::Beginner => 25,
            Proficiency::Intermediate => 50,
            Proficiency::Advanced => 75,
            Proficiency::Expert => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative importance of a required skill.
///
/// Seed data writes `Critical` / `Important` / `Nice-to-have`; the aliases
/// accept the variants LLM-generated careers have been observed to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    #[serde(alias = "Essential")]
    Critical,
    Important,
    #[serde(rename = "Nice-to-have", alias = "Nice to have")]
    NiceToHave,
}

/// Lenient decode for LLM-generated payloads ONLY: any unrecognized level
/// maps to `Intermediate` (mid-scale). User-supplied payloads use the strict
/// derive instead, so a typo'd level is rejected at the boundary rather than
/// silently rescored.
pub fn lenient_proficiency<'de, D>(deserializer: D) -> Result<Proficiency, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(match raw.as_str() {
        "Beginner" => Proficiency::Beginner,
        "Intermediate" => Proficiency::Intermediate,
        "Advanced" => Proficiency::Advanced,
        "Expert" => Proficiency::Expert,
        _ => Proficiency::Intermediate,
    })
}

/// Lenient counterpart for importance: unrecognized labels become `Important`.
pub fn lenient_importance<'de, D>(deserializer: D) -> Result<Importance, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(match raw.as_str() {
        "Critical" | "Essential" => Importance::Critical,
        "Nice-to-have" | "Nice to have" => Importance::NiceToHave,
        _ => Importance::Important,
    })
}

pub fn default_proficiency() -> Proficiency {
    Proficiency::Intermediate
}

pub fn default_importance() -> Importance {
    Importance::Important
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_scores_follow_the_fixed_table() {
        assert_eq!(Proficiency::Beginner.score(), 25);
        assert_eq!(Proficiency::Intermediate.score(), 50);
        assert_eq!(Proficiency::Advanced.score(), 75);
        assert_eq!(Proficiency::Expert.score(), 100);
    }

    #[test]
    fn test_ordering_matches_scores() {
        assert!(Proficiency::Beginner < Proficiency::Intermediate);
        assert!(Proficiency::Advanced < Proficiency::Expert);
    }

    #[test]
    fn test_strict_decode_rejects_unknown_level() {
        let result: Result<Proficiency, _> = serde_json::from_str(r#""Wizard""#);
        assert!(result.is_err(), "unknown level must fail the strict decode");
    }

    #[test]
    fn test_strict_decode_accepts_known_levels() {
        let level: Proficiency = serde_json::from_str(r#""Advanced""#).unwrap();
        assert_eq!(level, Proficiency::Advanced);
    }

    #[derive(Deserialize)]
    struct LenientWrapper {
        #[serde(deserialize_with = "lenient_proficiency")]
        level: Proficiency,
        #[serde(deserialize_with = "lenient_importance")]
        importance: Importance,
    }

    #[test]
    fn test_lenient_decode_defaults_unknown_to_mid_scale() {
        let wrapper: LenientWrapper =
            serde_json::from_str(r#"{"level": "Guru", "importance": "Vital"}"#).unwrap();
        assert_eq!(wrapper.level, Proficiency::Intermediate);
        assert_eq!(wrapper.importance, Importance::Important);
    }

    #[test]
    fn test_lenient_decode_passes_known_values_through() {
        let wrapper: LenientWrapper =
            serde_json::from_str(r#"{"level": "Expert", "importance": "Essential"}"#).unwrap();
        assert_eq!(wrapper.level, Proficiency::Expert);
        assert_eq!(wrapper.importance, Importance::Critical);
    }

    #[test]
    fn test_importance_serializes_seed_spelling() {
        assert_eq!(
            serde_json::to_string(&Importance::NiceToHave).unwrap(),
            r#""Nice-to-have""#
        );
        let parsed: Importance = serde_json::from_str(r#""Nice to have""#).unwrap();
        assert_eq!(parsed, Importance::NiceToHave);
    }
}
