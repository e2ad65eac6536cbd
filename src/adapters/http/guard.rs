//! Environment guard middleware.
//!
//! Wraps routes that may only run in one deployment environment (invites are
//! production-only). Fails closed: any other environment gets 403 and the inner
//! handler never runs.
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/slack/invite", post(invite))
//!     .route_layer(from_fn_with_state(EnvironmentGuard::production(env), require_environment))
//! ```

use crate::adapters::http::handlers::error_response;
use crate::shared::config::PRODUCTION;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

#[derive(Clone, Debug)]
pub struct EnvironmentGuard {
    pub current: String,
    pub required: String,
}

impl EnvironmentGuard {
    pub fn production(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            required: PRODUCTION.to_string(),
        }
    }

    pub fn allows(&self) -> bool {
        self.current.eq_ignore_ascii_case(&self.required)
    }
}

pub async fn require_environment(
    State(guard): State<EnvironmentGuard>,
    request: Request,
    next: Next,
) -> Response {
    if !guard.allows() {
        warn!(
            path = %request.uri().path(),
            environment = %guard.current,
            "rejected request outside {} environment",
            guard.required
        );
        return error_response(
            StatusCode::FORBIDDEN,
            &format!("only available in the {} environment", guard.required),
        )
        .into_response();
    }

    next.run(request).await
}
