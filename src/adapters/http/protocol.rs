//! Request and response DTOs for the HTTP endpoints.

use serde::{Deserialize, Serialize};

pub const MISSING_EMAIL_MESSAGE: &str = "Must contain `email` JSON value";

// Query string for the verify endpoint.
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    pub email: String,
}

// Query string for the update endpoint. The status is validated by the use case.
#[derive(Debug, Deserialize)]
pub struct UpdateQuery {
    pub slack_id: String,
    pub military_status: String,
}

// Body for the invite endpoint. `email` is optional so its absence can be reported
// with our own message instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct InviteRequest {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
