#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub education: Option<Json<Education>>,
    pub resume: Option<Json<ResumeRecord>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub level: Option<String>,
    pub institution: Option<String>,
    pub field_of_study: Option<String>,
    pub graduation_year: Option<i32>,
}

/// Uploaded resume snapshot stored on the user row. The extracted text is
/// truncated before storage; the full PDF is never kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub text_content: String,
    pub analysis: ResumeAnalysis,
}

/// Structured output of the LLM resume read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub skills: Vec<String>,
    pub experience: String,
    pub summary: String,
    pub recommendations: Vec<String>,
}
