//! HTTP handlers. Thin: extract, call a use case, map the outcome to a response.

use crate::adapters::http::protocol::{
    ErrorResponse, HealthResponse, InviteRequest, MISSING_EMAIL_MESSAGE, UpdateQuery,
    UpdateResponse, VerifyQuery,
};
use crate::adapters::http::state::AppState;
use crate::domain::{InviteOutcome, LookupResult};
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

// Helper to build a JSON error response.
pub fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Report whether an email belongs to a workspace member.
#[tracing::instrument(name = "verify", skip_all)]
pub async fn verify(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> Result<Json<LookupResult>, (StatusCode, Json<ErrorResponse>)> {
    let result = state.verify.verify(&query.email).await.map_err(|e| {
        tracing::error!(error = %e, "member lookup failed");
        error_response(StatusCode::BAD_GATEWAY, &e.to_string())
    })?;

    Ok(Json(result))
}

// Queue a greeting DM. Unknown statuses answer 204 with nothing sent.
#[tracing::instrument(
    name = "update",
    skip_all,
    fields(slack_id = %query.slack_id)
)]
pub async fn update(State(state): State<AppState>, Query(query): Query<UpdateQuery>) -> Response {
    match state
        .greetings
        .greet(&query.slack_id, &query.military_status)
    {
        // Delivery is not awaited.
        Some(_) => Json(UpdateResponse { success: "true" }).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

// Invite an email to the workspace with the admin credential.
#[tracing::instrument(name = "invite", skip_all)]
pub async fn invite(
    State(state): State<AppState>,
    body: Result<Json<InviteRequest>, JsonRejection>,
) -> Response {
    // Keep the JSON error envelope for malformed bodies too.
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::info!(status = %rejection.status(), "invalid invite body");
            return error_response(rejection.status(), &rejection.body_text()).into_response();
        }
    };

    let Some(email) = body.email else {
        return error_response(StatusCode::BAD_REQUEST, MISSING_EMAIL_MESSAGE).into_response();
    };

    match state.invites.invite(&email).await {
        InviteOutcome::Invited(response) => Json(response).into_response(),
        InviteOutcome::Rejected { data, .. } => Json(data).into_response(),
        InviteOutcome::Failed { message } => {
            error_response(StatusCode::BAD_GATEWAY, &message).into_response()
        }
    }
}
