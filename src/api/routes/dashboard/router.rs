//! Router for the dashboard API

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::dashboard::DashboardSession;

/// Check a dashboard password against the configured one
async fn login(
    State(state): State<SharedState>,
    payload: Result<Json<public::LoginRequest>, JsonRejection>,
) -> Result<Json<public::LoginResponse>, ApiError> {
    let Json(payload) = payload?;
    let mut session = DashboardSession::new(state.config.dashboard.clone());
    if !session.login(&payload.password) {
        return Err(ApiError::Unauthorized(String::from("Invalid password")));
    }

    Ok(Json(public::LoginResponse {
        authenticated: session.is_authenticated(),
    }))
}

/// Create the dashboard router
pub fn router() -> Router<SharedState> {
    Router::new().route("/login", axum::routing::post(login))
}
