//! Storage access for the per-user skills document.
//!
//! One row per user; the skills array and interests are replaced wholesale on
//! every save. Concurrent saves are last-write-wins by design — there is no
//! partial patching to race.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::matching::UserSkillEntry;
use crate::models::skills::{SkillRecord, UserSkillsRow};

pub async fn find_user_skills(
    db: &PgPool,
    user_id: Uuid,
) -> Result<Option<UserSkillsRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM user_skills WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await
}

/// Returns the user's skills row, creating an empty one on first access.
pub async fn find_or_create_user_skills(
    db: &PgPool,
    user_id: Uuid,
) -> Result<UserSkillsRow, sqlx::Error> {
    if let Some(row) = find_user_skills(db, user_id).await? {
        return Ok(row);
    }

    sqlx::query_as(
        r#"
        INSERT INTO user_skills (user_id) VALUES ($1)
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await
}

/// Replaces the whole skills array and interest list for one user.
pub async fn replace_user_skills(
    db: &PgPool,
    user_id: Uuid,
    skills: Vec<SkillRecord>,
    interests: Vec<String>,
) -> Result<UserSkillsRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO user_skills (user_id, skills, interests, updated_at)
        VALUES ($1, $2, $3, now())
        ON CONFLICT (user_id)
        DO UPDATE SET skills = EXCLUDED.skills,
                      interests = EXCLUDED.interests,
                      updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(Json(skills))
    .bind(&interests)
    .fetch_one(db)
    .await
}

/// Projects stored records down to the slim entries the matching engine takes.
pub fn to_match_entries(records: &[SkillRecord]) -> Vec<UserSkillEntry> {
    records
        .iter()
        .map(|r| UserSkillEntry {
            skill_name: r.skill_name.clone(),
            proficiency_level: r.proficiency_level,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Proficiency;

    #[test]
    fn test_to_match_entries_keeps_name_and_level() {
        let records = vec![
            SkillRecord::new(None, "SQL".to_string(), Proficiency::Expert),
            SkillRecord::new(None, "Git".to_string(), Proficiency::Beginner),
        ];
        let entries = to_match_entries(&records);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].skill_name, "SQL");
        assert_eq!(entries[0].proficiency_level, Proficiency::Expert);
    }
}
