//! Authentication route handlers.
//!
//! Registration, login, session inspection, and logout. A successful login
//! stores the user's identity in the server-side session; everything else in
//! the system reads identity from there.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_sessions::Session;

use paper_lantern_core::Email;

use crate::error::Result;
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Registration request body.
///
/// Fields default to empty so missing keys surface as validation errors
/// rather than deserialization failures.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session info returned to the front end.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle registration.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<Value>> {
    let auth = AuthService::new(state.pool());
    let user = auth
        .register(&req.first_name, &req.last_name, &req.email, &req.password)
        .await?;

    tracing::info!(user_id = %user.id, "account registered");

    Ok(Json(json!({ "message": "Registration successful!" })))
}

/// Handle login and establish the session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Value>> {
    let auth = AuthService::new(state.pool());
    let user = auth.login(&req.email, &req.password).await?;

    let current = CurrentUser {
        id: user.id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        is_admin: user.is_admin,
    };
    set_current_user(&session, &current).await?;

    Ok(Json(json!({
        "message": "Login successful",
        "firstName": user.first_name,
        "isAdmin": user.is_admin,
    })))
}

/// Report the current session.
pub async fn session(OptionalAuth(user): OptionalAuth) -> Json<SessionInfo> {
    let info = user.map_or(
        SessionInfo {
            logged_in: false,
            first_name: None,
            email: None,
            is_admin: None,
        },
        |user| SessionInfo {
            logged_in: true,
            first_name: Some(user.first_name),
            email: Some(user.email),
            is_admin: Some(user.is_admin),
        },
    );

    Json(info)
}

/// Destroy the session.
pub async fn logout(session: Session) -> Result<Json<Value>> {
    clear_current_user(&session).await?;
    Ok(Json(json!({ "message": "Logged out" })))
}
