//! Router for the spreadsheet proxies
//!
//! Every resource shares the same four handlers, parameterized by its
//! record type. Handlers hold no state between calls: each one validates,
//! reshapes, forwards and relays.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde_json::{Map, Value};

use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::records::{Record, create_payload, delete_payload, read_rows, update_payload};
use crate::sheets::UpstreamFailure;

/// Map a failed update or delete onto a response. A refusal from the
/// spreadsheet is the caller's problem, everything else is ours.
fn write_failure<R: Record>(verb: &str, err: UpstreamFailure) -> ApiError {
    match err {
        UpstreamFailure::Rejected { message } => ApiError::BadRequest(message),
        other => ApiError::upstream(format!("Failed to {} {}", verb, R::RESOURCE.noun()), other),
    }
}

async fn list<R: Record>(State(state): State<SharedState>) -> Result<Json<Vec<R>>, ApiError> {
    let url = state.config.endpoint(R::RESOURCE);
    let rows = state
        .sheets
        .fetch(url)
        .await
        .map_err(|err| ApiError::upstream(format!("Failed to fetch {}", R::RESOURCE.plural()), err))?;

    Ok(Json(read_rows::<R>(rows)))
}

async fn create<R: Record>(
    State(state): State<SharedState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(body) = body?;
    let payload = create_payload::<R>(&body)?;
    let url = state.config.endpoint(R::RESOURCE);

    let resp = state
        .sheets
        .submit(url, &payload)
        .await
        .map_err(|err| ApiError::upstream(format!("Failed to add {}", R::RESOURCE.noun()), err))?;

    tracing::info!("Added {} {}", R::RESOURCE.noun(), payload.record.key());
    Ok((StatusCode::CREATED, Json(resp)))
}

async fn update<R: Record>(
    State(state): State<SharedState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    let payload = update_payload::<R>(&body)?;
    let url = state.config.endpoint(R::RESOURCE);

    let resp = state
        .sheets
        .submit(url, &payload)
        .await
        .map_err(|err| write_failure::<R>("update", err))?;

    tracing::info!(
        "Updated {} {} (was {})",
        R::RESOURCE.noun(),
        payload.record.key(),
        payload.original_name.as_deref().unwrap_or_default()
    );
    Ok(Json(resp))
}

async fn delete<R: Record>(
    State(state): State<SharedState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    let payload = delete_payload::<R>(&body)?;
    let url = state.config.endpoint(R::RESOURCE);

    let resp = state
        .sheets
        .submit(url, &payload)
        .await
        .map_err(|err| write_failure::<R>("delete", err))?;

    tracing::info!("Deleted {} {:?}", R::RESOURCE.noun(), payload.get(R::KEY.name));
    Ok(Json(resp))
}

/// Create the router for one spreadsheet-backed resource
pub fn router<R: Record>() -> Router<SharedState> {
    Router::new().route(
        "/",
        get(list::<R>)
            .post(create::<R>)
            .put(update::<R>)
            .delete(delete::<R>),
    )
}
