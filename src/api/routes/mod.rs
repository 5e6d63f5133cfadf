//! API routes module

pub mod dashboard;
pub mod sheets;

use axum::Router;

use crate::api::state::SharedState;
use crate::records::{EntourageRecord, GuestRecord, GuestRequestRecord, PrincipalSponsorRecord};

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Spreadsheet proxies, one per resource
        .nest("/guests", sheets::router::<GuestRecord>())
        .nest("/guest-requests", sheets::router::<GuestRequestRecord>())
        .nest("/entourage", sheets::router::<EntourageRecord>())
        .nest("/principal-sponsor", sheets::router::<PrincipalSponsorRecord>())
        // Dashboard login
        .nest("/dashboard", dashboard::router())
}
