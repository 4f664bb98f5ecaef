#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::RequiredSkill;

/// A persisted career record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CareerRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub salary_range: String,
    pub growth_outlook: String,
    pub demand_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The required-skill set of one career. Immutable once authored.
#[derive(Debug, Clone, FromRow)]
pub struct CareerSkillsRow {
    pub career_id: Uuid,
    pub required_skills: Json<Vec<RequiredSkill>>,
    pub updated_at: DateTime<Utc>,
}

/// A catalog skill, searchable from the profile editor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SkillRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    pub demand_score: i32,
}
