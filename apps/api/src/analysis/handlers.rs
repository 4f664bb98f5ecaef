use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlJson;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::enrichment::{batch_gap_analyses, CareerMatchSummary, ANALYSIS_FALLBACK};
use crate::errors::AppError;
use crate::matching::{compute_match, MatchBreakdown};
use crate::models::career::{CareerRow, CareerSkillsRow};
use crate::profile::skills;
use crate::state::AppState;

/// Upper bound on careers analyzed per request.
const MAX_CAREERS_PER_ANALYSIS: usize = 5;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRequest {
    pub career_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysis {
    pub career_id: Uuid,
    pub career_name: String,
    #[serde(flatten)]
    pub breakdown: MatchBreakdown,
    pub ai_insights: String,
}

#[derive(Debug, Serialize)]
pub struct SkillGapResponse {
    pub analyses: Vec<CareerAnalysis>,
}

/// POST /api/v1/analysis/skill-gap
///
/// Computes the weighted breakdown for up to five careers, attaches one
/// batched round of AI insights, and snapshots each result. Career ids with
/// no stored career or requirement set are skipped, not failed.
pub async fn analyze_skill_gap(
    user: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResponse>, AppError> {
    let skills_row = skills::find_user_skills(&state.db, user.user_id).await?;
    let records = skills_row.map(|row| row.skills.0).unwrap_or_default();

    if records.is_empty() {
        return Err(AppError::Validation(
            "No skills found. Please add skills in your profile first.".to_string(),
        ));
    }

    let entries = skills::to_match_entries(&records);

    let mut computed: Vec<(CareerRow, MatchBreakdown)> = Vec::new();

    for career_id in req.career_ids.iter().take(MAX_CAREERS_PER_ANALYSIS) {
        // Independent reads: career and its requirement set fetched together.
        let (career, career_skills) = tokio::try_join!(
            fetch_career(&state, *career_id),
            fetch_career_skills(&state, *career_id),
        )?;

        let (Some(career), Some(career_skills)) = (career, career_skills) else {
            continue;
        };

        let breakdown = compute_match(&entries, &career_skills.required_skills.0);
        computed.push((career, breakdown));
    }

    let summaries: Vec<CareerMatchSummary> = computed
        .iter()
        .map(|(career, breakdown)| CareerMatchSummary {
            career_name: career.title.clone(),
            match_score: breakdown.match_score,
            matching_skills: breakdown
                .matching_skills
                .iter()
                .map(|s| s.skill_name.clone())
                .collect(),
            missing_skills: breakdown
                .missing_skills
                .iter()
                .map(|s| s.skill_name.clone())
                .collect(),
        })
        .collect();

    // One batched call for all insights; failures degrade to fallback text.
    let insights = batch_gap_analyses(&state.llm, &entries, &summaries).await;

    let mut analyses = Vec::with_capacity(computed.len());
    for (career, breakdown) in computed {
        let ai_insights = insights
            .get(&career.title)
            .cloned()
            .unwrap_or_else(|| ANALYSIS_FALLBACK.to_string());

        sqlx::query(
            r#"
            INSERT INTO analyses (user_id, target_career_id, target_career_name, results, ai_insights)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.user_id)
        .bind(career.id)
        .bind(&career.title)
        .bind(SqlJson(&breakdown))
        .bind(&ai_insights)
        .execute(&state.db)
        .await?;

        analyses.push(CareerAnalysis {
            career_id: career.id,
            career_name: career.title,
            breakdown,
            ai_insights,
        });
    }

    Ok(Json(SkillGapResponse { analyses }))
}

async fn fetch_career(state: &AppState, career_id: Uuid) -> Result<Option<CareerRow>, AppError> {
    let row = sqlx::query_as("SELECT * FROM careers WHERE id = $1")
        .bind(career_id)
        .fetch_optional(&state.db)
        .await?;
    Ok(row)
}

async fn fetch_career_skills(
    state: &AppState,
    career_id: Uuid,
) -> Result<Option<CareerSkillsRow>, AppError> {
    let row = sqlx::query_as("SELECT * FROM career_skills WHERE career_id = $1")
        .bind(career_id)
        .fetch_optional(&state.db)
        .await?;
    Ok(row)
}
