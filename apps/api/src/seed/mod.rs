//! Development seeding: wipes and repopulates the skill catalog, careers with
//! their requirement sets, and learning resources.

pub mod data;

use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::types::Json as SqlJson;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: String,
}

/// POST /api/v1/seed
///
/// Replaces the whole catalog with the built-in dataset. Refused in
/// production.
pub async fn seed_database(
    State(state): State<AppState>,
) -> Result<Json<SeedResponse>, AppError> {
    if state.config.is_production() {
        return Err(AppError::Forbidden(
            "Not allowed in production".to_string(),
        ));
    }

    sqlx::query("TRUNCATE career_skills, careers, skills, learning_resources")
        .execute(&state.db)
        .await?;

    let skills = data::initial_skills();
    for skill in &skills {
        sqlx::query(
            r#"
            INSERT INTO skills (name, category, subcategory, demand_score)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(skill.name)
        .bind(skill.category)
        .bind(skill.subcategory)
        .bind(skill.demand_score)
        .execute(&state.db)
        .await?;
    }

    let careers = data::initial_careers();
    for career in &careers {
        let (career_id,): (uuid::Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO careers (title, description, salary_range, growth_outlook, demand_score)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(career.title)
        .bind(career.description)
        .bind(career.salary_range)
        .bind(career.growth_outlook)
        .bind(career.demand_score)
        .fetch_one(&state.db)
        .await?;

        sqlx::query("INSERT INTO career_skills (career_id, required_skills) VALUES ($1, $2)")
            .bind(career_id)
            .bind(SqlJson(&career.required_skills))
            .execute(&state.db)
            .await?;
    }

    let resources = data::initial_resources();
    for resource in &resources {
        sqlx::query(
            r#"
            INSERT INTO learning_resources
                (skill_name, title, provider, url, resource_type, difficulty,
                 duration, is_free, cost, rating, review_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(resource.skill_name)
        .bind(resource.title)
        .bind(resource.provider)
        .bind(resource.url)
        .bind(resource.resource_type)
        .bind(resource.difficulty)
        .bind(resource.duration)
        .bind(resource.is_free)
        .bind(resource.cost)
        .bind(resource.rating)
        .bind(resource.review_count)
        .execute(&state.db)
        .await?;
    }

    let message = format!(
        "Seeded {} skills, {} careers and {} learning resources successfully",
        skills.len(),
        careers.len(),
        resources.len()
    );
    info!("{message}");

    Ok(Json(SeedResponse { message }))
}
