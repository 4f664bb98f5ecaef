use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::careers::generator::{self, GeneratedCareer};
use crate::errors::AppError;
use crate::models::career::CareerRow;
use crate::profile::skills;
use crate::state::AppState;

const CAREER_LIST_LIMIT: i64 = 50;
const MIN_KEYWORD_LENGTH: usize = 2;

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub careers: Vec<CareerRow>,
}

/// GET /api/v1/careers
pub async fn list_careers(
    State(state): State<AppState>,
) -> Result<Json<CareerListResponse>, AppError> {
    let careers: Vec<CareerRow> =
        sqlx::query_as("SELECT * FROM careers ORDER BY demand_score DESC LIMIT $1")
            .bind(CAREER_LIST_LIMIT)
            .fetch_all(&state.db)
            .await?;

    Ok(Json(CareerListResponse { careers }))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Serialize)]
pub struct CareerSearchResponse {
    pub keyword: String,
    pub careers: Vec<GeneratedCareer>,
}

/// GET /api/v1/careers/search?keyword=...
///
/// Generates careers for an industry or job type via the LLM.
pub async fn search_careers(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<CareerSearchResponse>, AppError> {
    let keyword = query.keyword.trim().to_string();
    if keyword.len() < MIN_KEYWORD_LENGTH {
        return Err(AppError::Validation(
            "Please provide a search keyword (industry or job type)".to_string(),
        ));
    }

    let careers = generator::generate_careers(&state.llm, &keyword).await;

    if careers.is_empty() {
        return Err(AppError::NotFound(
            "Could not generate careers. Please try a different search term.".to_string(),
        ));
    }

    Ok(Json(CareerSearchResponse { keyword, careers }))
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    #[serde(default)]
    pub interests: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestionsResponse {
    pub careers: Vec<GeneratedCareer>,
    pub based_on_skills: Vec<String>,
}

/// GET /api/v1/careers/suggestions?interests=...
///
/// Personalized AI suggestions. Requires a non-empty skill profile.
pub async fn suggest_careers(
    user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Result<Json<CareerSuggestionsResponse>, AppError> {
    let skills_row = skills::find_user_skills(&state.db, user.user_id).await?;
    let records = skills_row.map(|row| row.skills.0).unwrap_or_default();

    if records.is_empty() {
        return Err(AppError::Validation(
            "No skills found. Please add your skills in your profile first.".to_string(),
        ));
    }

    let entries = skills::to_match_entries(&records);
    let careers =
        generator::suggest_careers(&state.llm, &entries, query.interests.as_deref()).await;

    if careers.is_empty() {
        return Err(AppError::Llm(
            "Could not generate suggestions. Please try again.".to_string(),
        ));
    }

    Ok(Json(CareerSuggestionsResponse {
        careers,
        based_on_skills: records.into_iter().map(|r| r.skill_name).collect(),
    }))
}
