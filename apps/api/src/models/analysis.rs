#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::MatchBreakdown;

/// Denormalized snapshot of one skill-gap analysis. Written on every run of
/// the analyzer; the breakdown is stored as-is so past results survive later
/// catalog edits.
#[derive(Debug, Clone, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub target_career_id: Option<Uuid>,
    pub target_career_name: String,
    pub results: Json<MatchBreakdown>,
    pub ai_insights: String,
    pub analysis_date: DateTime<Utc>,
}
