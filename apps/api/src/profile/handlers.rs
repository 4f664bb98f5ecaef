use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlJson;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::matching::Proficiency;
use crate::models::skills::SkillRecord;
use crate::models::user::{Education, ResumeAnalysis, ResumeRecord, UserRow};
use crate::profile::{resume, skills};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileBody {
    pub name: String,
    pub education: Option<Education>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub email: String,
    pub profile: ProfileBody,
}

/// GET /api/v1/profile
pub async fn get_profile(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AppError> {
    let row = find_user(&state, user.user_id).await?;

    Ok(Json(ProfileResponse {
        email: row.email,
        profile: ProfileBody {
            name: row.name,
            education: row.education.map(|j| j.0),
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    #[serde(default)]
    pub education: Option<Education>,
}

/// PUT /api/v1/profile
pub async fn update_profile(
    user: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name must not be empty".to_string()));
    }

    let row: UserRow = sqlx::query_as(
        "UPDATE users SET name = $1, education = $2, updated_at = now() WHERE id = $3 RETURNING *",
    )
    .bind(name)
    .bind(req.education.map(SqlJson))
    .bind(user.user_id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(ProfileResponse {
        email: row.email,
        profile: ProfileBody {
            name: row.name,
            education: row.education.map(|j| j.0),
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<SkillRecord>,
    pub interests: Vec<String>,
}

/// GET /api/v1/profile/skills
///
/// Lazily creates an empty skills document on first access.
pub async fn get_skills(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<SkillsResponse>, AppError> {
    let row = skills::find_or_create_user_skills(&state.db, user.user_id).await?;

    Ok(Json(SkillsResponse {
        skills: row.skills.0,
        interests: row.interests,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInput {
    #[serde(default)]
    pub skill_id: Option<Uuid>,
    pub skill_name: String,
    /// Strict decode: an unrecognized level rejects the request at the
    /// boundary instead of being silently rescored.
    pub proficiency_level: Proficiency,
}

#[derive(Debug, Deserialize)]
pub struct SaveSkillsRequest {
    pub skills: Vec<SkillInput>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// POST /api/v1/profile/skills
///
/// Wholesale replace: the stored array becomes exactly the submitted one.
/// The proficiency score is always derived server-side from the level.
pub async fn save_skills(
    user: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<SaveSkillsRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    let records: Vec<SkillRecord> = req
        .skills
        .into_iter()
        .map(|s| SkillRecord::new(s.skill_id, s.skill_name, s.proficiency_level))
        .collect();

    let row =
        skills::replace_user_skills(&state.db, user.user_id, records, req.interests).await?;

    Ok(Json(SkillsResponse {
        skills: row.skills.0,
        interests: row.interests,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUploadResponse {
    pub file_name: String,
    pub analysis: ResumeAnalysis,
}

/// POST /api/v1/profile/resume (multipart, field `resume`)
pub async fn upload_resume(
    user: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }

        if field.content_type() != Some("application/pdf") {
            return Err(AppError::Validation(
                "Only PDF files are allowed".to_string(),
            ));
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    let text = resume::extract_resume_text(&data)?;
    let analysis = resume::analyze_resume(&state.llm, &text).await;
    let record = resume::build_resume_record(file_name.clone(), &text, analysis.clone());

    sqlx::query("UPDATE users SET resume = $1, updated_at = now() WHERE id = $2")
        .bind(SqlJson(&record))
        .bind(user.user_id)
        .execute(&state.db)
        .await?;

    tracing::info!("Stored resume analysis for user {}", user.user_id);

    Ok(Json(ResumeUploadResponse { file_name, analysis }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeStatus {
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub analysis: ResumeAnalysis,
}

#[derive(Debug, Serialize)]
pub struct ResumeStatusResponse {
    /// `None` until a resume has been uploaded.
    pub resume: Option<ResumeStatus>,
}

/// GET /api/v1/profile/resume
pub async fn get_resume(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<ResumeStatusResponse>, AppError> {
    let row = find_user(&state, user.user_id).await?;

    let resume = row.resume.map(|SqlJson(record)| {
        let ResumeRecord {
            file_name,
            uploaded_at,
            analysis,
            ..
        } = record;
        ResumeStatus {
            file_name,
            uploaded_at,
            analysis,
        }
    });

    Ok(Json(ResumeStatusResponse { resume }))
}

async fn find_user(state: &AppState, user_id: Uuid) -> Result<UserRow, AppError> {
    let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&state.db)
        .await?;
    row.ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
