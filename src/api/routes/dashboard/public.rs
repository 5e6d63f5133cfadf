//! Public types for the dashboard API
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub authenticated: bool,
}
