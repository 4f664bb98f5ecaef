#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::Proficiency;

/// One user's whole skill profile. The skills array is replaced wholesale on
/// every save (last write wins); it is never partially patched.
#[derive(Debug, Clone, FromRow)]
pub struct UserSkillsRow {
    pub user_id: Uuid,
    pub skills: Json<Vec<SkillRecord>>,
    pub interests: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// One stored skill entry. `proficiency_score` is always the table lookup of
/// `proficiency_level` — build records through [`SkillRecord::new`] so the two
/// can never drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<Uuid>,
    pub skill_name: String,
    pub proficiency_level: Proficiency,
    pub proficiency_score: u32,
    pub added_at: DateTime<Utc>,
}

impl SkillRecord {
    pub fn new(skill_id: Option<Uuid>, skill_name: String, level: Proficiency) -> Self {
        Self {
            skill_id,
            skill_name,
            proficiency_level: level,
            proficiency_score: level.score(),
            added_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_score_from_level() {
        let record = SkillRecord::new(None, "SQL".to_string(), Proficiency::Advanced);
        assert_eq!(record.proficiency_score, 75);
        assert_eq!(record.proficiency_level, Proficiency::Advanced);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = SkillRecord::new(None, "Git".to_string(), Proficiency::Beginner);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["skillName"], "Git");
        assert_eq!(value["proficiencyScore"], 25);
        assert!(value.get("skill_name").is_none());
    }
}
