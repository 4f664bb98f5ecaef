//! Skill catalog search, backing the profile editor's autocomplete.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::career::SkillRow;
use crate::state::AppState;

const SEARCH_LIMIT: i64 = 20;

#[derive(Debug, Deserialize)]
pub struct SkillSearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SkillSearchResponse {
    pub skills: Vec<SkillRow>,
}

/// GET /api/v1/skills/search?q=...
///
/// Case-insensitive substring search ordered by demand. An empty query
/// returns the most in-demand skills.
pub async fn search_skills(
    State(state): State<AppState>,
    Query(query): Query<SkillSearchQuery>,
) -> Result<Json<SkillSearchResponse>, AppError> {
    let pattern = format!("%{}%", escape_like(query.q.trim()));

    let skills: Vec<SkillRow> = sqlx::query_as(
        "SELECT * FROM skills WHERE name ILIKE $1 ORDER BY demand_score DESC LIMIT $2",
    )
    .bind(&pattern)
    .bind(SEARCH_LIMIT)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(SkillSearchResponse { skills }))
}

/// Escapes LIKE metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    input.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%_sql"), "100\\%\\_sql");
        assert_eq!(escape_like("plain"), "plain");
    }
}
