use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A curated learning resource for one skill.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LearningResourceRow {
    pub id: Uuid,
    pub skill_name: String,
    pub title: String,
    pub provider: String,
    pub url: String,
    pub resource_type: String,
    pub difficulty: String,
    pub duration: String,
    pub is_free: bool,
    pub cost: Option<f64>,
    pub rating: f32,
    pub review_count: i32,
}
