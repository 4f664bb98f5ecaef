pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{analysis, auth, careers, catalog, profile, recommendations, seed};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/register", post(auth::handlers::register))
        .route("/api/v1/auth/login", post(auth::handlers::login))
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handlers::get_profile).put(profile::handlers::update_profile),
        )
        .route(
            "/api/v1/profile/skills",
            get(profile::handlers::get_skills).post(profile::handlers::save_skills),
        )
        .route(
            "/api/v1/profile/resume",
            get(profile::handlers::get_resume).post(profile::handlers::upload_resume),
        )
        // Skill catalog
        .route("/api/v1/skills/search", get(catalog::search_skills))
        // Careers
        .route("/api/v1/careers", get(careers::handlers::list_careers))
        .route(
            "/api/v1/careers/search",
            get(careers::handlers::search_careers),
        )
        .route(
            "/api/v1/careers/suggestions",
            get(careers::handlers::suggest_careers),
        )
        // Analysis
        .route(
            "/api/v1/analysis/skill-gap",
            post(analysis::handlers::analyze_skill_gap),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations/careers",
            post(recommendations::handlers::recommend_careers),
        )
        .route(
            "/api/v1/recommendations/learning-paths",
            post(recommendations::handlers::learning_paths),
        )
        // Dev tooling
        .route("/api/v1/seed", post(seed::seed_database))
        .with_state(state)
}
