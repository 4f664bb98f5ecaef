use std::collections::HashMap;

use anyhow::anyhow;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::cache::{build_cache_key, get_or_compute, TtlClass};
use crate::enrichment::{
    batch_career_reasoning, batch_learning_strategies, strategy_fallback, CareerMatchSummary,
    REASONING_FALLBACK,
};
use crate::errors::AppError;
use crate::matching::rank_careers;
use crate::models::career::CareerRow;
use crate::models::resource::LearningResourceRow;
use crate::profile::skills;
use crate::state::AppState;

const TOP_CAREERS: usize = 5;
const CAREER_POOL_LIMIT: i64 = 50;
const RESOURCES_PER_SKILL: i64 = 5;
/// Matching/missing skill lists are trimmed for the recommendation cards.
const SKILL_PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub career_id: Uuid,
    pub career_name: String,
    pub description: String,
    pub match_score: u32,
    pub salary_range: String,
    pub growth_outlook: String,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Serialize)]
pub struct CareerRecommendationsResponse {
    pub recommendations: Vec<CareerRecommendation>,
}

/// POST /api/v1/recommendations/careers
///
/// Ranks every stored career by skill-name overlap, keeps the top five, and
/// attaches cached batch reasoning.
pub async fn recommend_careers(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<CareerRecommendationsResponse>, AppError> {
    // Independent reads fanned out: user skills, careers, requirement sets.
    let (skills_row, careers, career_skills) = tokio::try_join!(
        skills::find_user_skills(&state.db, user.user_id),
        fetch_career_pool(&state),
        fetch_required_skill_names(&state),
    )?;

    let (records, interests) = skills_row
        .map(|row| (row.skills.0, row.interests))
        .unwrap_or_default();
    if records.is_empty() {
        return Err(AppError::Validation(
            "No skills found. Please add skills first.".to_string(),
        ));
    }

    let user_skill_names: Vec<String> = records.iter().map(|r| r.skill_name.clone()).collect();

    let mut names_by_career = career_skills;
    let candidates: Vec<(CareerRow, Vec<String>)> = careers
        .into_iter()
        .map(|career| {
            let required = names_by_career.remove(&career.id).unwrap_or_default();
            (career, required)
        })
        .collect();

    let ranked = rank_careers(&user_skill_names, candidates, TOP_CAREERS);

    let summaries: Vec<CareerMatchSummary> = ranked
        .iter()
        .map(|r| CareerMatchSummary {
            career_name: r.career.title.clone(),
            match_score: r.match_score,
            matching_skills: r.matching_skills.clone(),
            missing_skills: r.missing_skills.clone(),
        })
        .collect();

    let titles: Vec<&str> = summaries.iter().map(|s| s.career_name.as_str()).collect();
    let cache_key = build_cache_key(
        "career-reasoning",
        &user.user_id.to_string(),
        Some(&titles.join(",")),
    );

    let reasoning: HashMap<String, String> =
        get_or_compute(state.cache.as_ref(), TtlClass::Medium, &cache_key, || async {
            batch_career_reasoning(&state.llm, &summaries, &user_skill_names, &interests).await
        })
        .await?;

    let recommendations = ranked
        .into_iter()
        .map(|r| {
            let reason = reasoning
                .get(&r.career.title)
                .cloned()
                .unwrap_or_else(|| REASONING_FALLBACK.to_string());
            CareerRecommendation {
                career_id: r.career.id,
                career_name: r.career.title,
                description: r.career.description,
                match_score: r.match_score,
                salary_range: r.career.salary_range,
                growth_outlook: r.career.growth_outlook,
                matching_skills: truncated(r.matching_skills),
                missing_skills: truncated(r.missing_skills),
                reasoning: reason,
            }
        })
        .collect();

    Ok(Json(CareerRecommendationsResponse { recommendations }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathsRequest {
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    pub title: String,
    pub provider: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub difficulty: String,
    pub duration: String,
    pub is_free: bool,
    pub rating: f32,
}

#[derive(Debug, Serialize)]
pub struct LearningPath {
    pub skill: String,
    pub strategy: String,
    pub resources: Vec<ResourceSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathsResponse {
    pub learning_paths: Vec<LearningPath>,
}

/// POST /api/v1/recommendations/learning-paths
///
/// For each missing skill: the top stored resources (fetched in parallel)
/// plus a cached batch learning strategy.
pub async fn learning_paths(
    user: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<LearningPathsRequest>,
) -> Result<Json<LearningPathsResponse>, AppError> {
    if req.missing_skills.is_empty() {
        return Err(AppError::Validation(
            "No missing skills provided".to_string(),
        ));
    }

    // Fan out one resource query per skill; join them all.
    let mut join_set = tokio::task::JoinSet::new();
    for skill in req.missing_skills.clone() {
        let db = state.db.clone();
        join_set.spawn(async move {
            let rows: Result<Vec<LearningResourceRow>, sqlx::Error> = sqlx::query_as(
                r#"
                SELECT * FROM learning_resources
                WHERE skill_name = $1
                ORDER BY rating DESC, review_count DESC
                LIMIT $2
                "#,
            )
            .bind(&skill)
            .bind(RESOURCES_PER_SKILL)
            .fetch_all(&db)
            .await;
            (skill, rows)
        });
    }

    let mut resources_by_skill: HashMap<String, Vec<LearningResourceRow>> = HashMap::new();
    while let Some(joined) = join_set.join_next().await {
        let (skill, rows) =
            joined.map_err(|e| AppError::Internal(anyhow!("Resource query task failed: {e}")))?;
        resources_by_skill.insert(skill, rows?);
    }

    let mut sorted_skills = req.missing_skills.clone();
    sorted_skills.sort();
    let cache_key = build_cache_key(
        "learning-strategies",
        &user.user_id.to_string(),
        Some(&sorted_skills.join(",")),
    );

    let strategies: HashMap<String, String> =
        get_or_compute(state.cache.as_ref(), TtlClass::Medium, &cache_key, || async {
            batch_learning_strategies(&state.llm, &req.missing_skills).await
        })
        .await?;

    let learning_paths = req
        .missing_skills
        .iter()
        .map(|skill| {
            let strategy = strategies
                .get(skill)
                .cloned()
                .unwrap_or_else(|| strategy_fallback(skill));
            let resources = resources_by_skill
                .remove(skill)
                .unwrap_or_default()
                .into_iter()
                .map(|r| ResourceSummary {
                    title: r.title,
                    provider: r.provider,
                    url: r.url,
                    resource_type: r.resource_type,
                    difficulty: r.difficulty,
                    duration: r.duration,
                    is_free: r.is_free,
                    rating: r.rating,
                })
                .collect();
            LearningPath {
                skill: skill.clone(),
                strategy,
                resources,
            }
        })
        .collect();

    Ok(Json(LearningPathsResponse { learning_paths }))
}

async fn fetch_career_pool(state: &AppState) -> Result<Vec<CareerRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM careers ORDER BY demand_score DESC LIMIT $1")
        .bind(CAREER_POOL_LIMIT)
        .fetch_all(&state.db)
        .await
}

/// Loads every career's required-skill names keyed by career id.
async fn fetch_required_skill_names(
    state: &AppState,
) -> Result<HashMap<Uuid, Vec<String>>, sqlx::Error> {
    let rows: Vec<crate::models::career::CareerSkillsRow> =
        sqlx::query_as("SELECT * FROM career_skills")
            .fetch_all(&state.db)
            .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let names = row
                .required_skills
                .0
                .into_iter()
                .map(|s| s.skill_name)
                .collect();
            (row.career_id, names)
        })
        .collect())
}

fn truncated(mut list: Vec<String>) -> Vec<String> {
    list.truncate(SKILL_PREVIEW_LIMIT);
    list
}
