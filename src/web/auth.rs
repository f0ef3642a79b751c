use crate::domain::models::{PublicUser, User, UserRole};
use crate::domain::validate;
use crate::state::SharedState;
use crate::web::error::ApiError;
use crate::web::session;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, SaltString},
    Argon2, PasswordVerifier,
};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    pub user: PublicUser,
    pub token: String,
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
pub struct SignupResponse {
    pub success: bool,
    pub user: PublicUser,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .with_state(state)
}

async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = payload.email.trim().to_lowercase();

    // The client sends the role it expects; matching is by email and
    // password only.
    if let Some(role) = payload.role.as_deref() {
        tracing::debug!("Login attempt for {} with role hint {}", email, role);
    }

    let user = state
        .store
        .find_user_by_email(&email)
        .await
        .ok_or(ApiError::InvalidCredentials)?;

    let parsed_hash = PasswordHash::new(&user.hash).map_err(|_| ApiError::Internal)?;
    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::InvalidCredentials)?;

    let token = session::sign_session(user.id, user.role, &state.session_key)
        .map_err(|_| ApiError::Internal)?;

    tracing::info!("User {} logged in", user.id);
    Ok(Json(LoginResponse {
        success: true,
        user: PublicUser::from(&user),
        token,
    }))
}

async fn signup(
    State(state): State<SharedState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let email = payload.email.trim().to_lowercase();

    let email_err = validate::validate_email(&email);
    if !email_err.is_empty() {
        return Err(ApiError::Validation(email_err));
    }
    let phone_err = validate::validate_phone(&payload.phone);
    if !phone_err.is_empty() {
        return Err(ApiError::Validation(phone_err));
    }
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("Name is required".to_string()));
    }
    // Password strength is checked in the browser; the server only
    // requires that something was sent.
    if payload.password.is_empty() {
        return Err(ApiError::Validation("Password is required".to_string()));
    }
    let strength_hint = validate::validate_password(&payload.password);
    if !strength_hint.is_empty() {
        tracing::debug!("Accepting password the client-side check would flag: {}", strength_hint);
    }

    let salt = SaltString::generate(rand_core::OsRng);
    let hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|_| ApiError::Internal)?
        .to_string();

    let user = User {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_string(),
        email,
        phone: payload.phone.trim().to_string(),
        hash,
        role: UserRole::User,
        created_at: Utc::now(),
    };
    let public = PublicUser::from(&user);

    state.store.insert_user(user).await?;

    tracing::info!("New account registered: {}", public.id);
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            user: public,
        }),
    ))
}
