use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlJson;
use uuid::Uuid;

use crate::auth::{jwt, password};
use crate::errors::AppError;
use crate::models::user::{Education, UserRow};
use crate::state::AppState;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub education: Option<Education>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let email = req.email.trim().to_lowercase();
    let name = req.name.trim();

    if email.is_empty() || req.password.is_empty() || name.is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }
    if !email.contains('@') {
        return Err(AppError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }
    if req.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }

    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let password_hash = password::hash_password(&req.password)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))?;

    let (user_id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO users (email, password_hash, name, education) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&email)
    .bind(&password_hash)
    .bind(name)
    .bind(req.education.map(SqlJson))
    .fetch_one(&state.db)
    .await?;

    tracing::info!("Registered new user {user_id}");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { user_id, email }),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = req.email.trim().to_lowercase();

    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;

    let user = user
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let password_valid = password::verify_password(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password verification failed: {e}")))?;

    if !password_valid {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = jwt::generate_token(user.id, &user.email, &state.config.jwt_secret)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {e}")))?;

    Ok(Json(AuthResponse {
        token,
        user: UserInfo {
            id: user.id,
            email: user.email,
            name: user.name,
        },
    }))
}
