use axum::{
    extract::{FromRef, State},
    routing::post,
    Form, Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginForm, RegisterRequest, TokenResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
    },
    error::ApiError,
    state::AppState,
    users::{dto::UserResponse, repo::User},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }
    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::Validation("Password too short".into()));
    }

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    // Argon2 is deliberately expensive; keep it off the async workers.
    let password = payload.password.clone();
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(e.into()))??;

    let user = match User::create(
        &state.db,
        &payload.email,
        &payload.username,
        &payload.full_name,
        &hash,
        payload.is_active,
    )
    .await
    {
        Ok(u) => u,
        // Two concurrent registrations can both pass the existence check;
        // the unique constraint decides, and the loser gets the same
        // conflict as if the check had caught it.
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            warn!(email = %payload.email, "email already registered (constraint)");
            return Err(ApiError::Conflict("Email already registered".into()));
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            return Err(e.into());
        }
    };

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(Json(user.into()))
}

#[instrument(skip(state, form))]
async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    // Identical error for unknown email and wrong password, so a caller
    // cannot probe which addresses are registered.
    let rejection = || ApiError::Unauthorized("Incorrect email or password".into());

    let Some(user) = User::find_by_email(&state.db, &form.username).await? else {
        warn!(email = %form.username, "login unknown email");
        return Err(rejection());
    };

    let password = form.password.clone();
    let stored_hash = user.password_hash.clone();
    let ok = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| ApiError::Internal(e.into()))?;

    if !ok {
        warn!(email = %form.username, user_id = user.id, "login invalid password");
        return Err(rejection());
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(&user.email).map_err(ApiError::Internal)?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(TokenResponse::bearer(access_token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_validation() {
        assert!(is_valid_email("admin@smartadmin.com"));
        assert!(is_valid_email("rafael.garcia@example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("a@b"));
    }
}
