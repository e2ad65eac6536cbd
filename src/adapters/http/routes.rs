//! Route table. Wires paths to handlers and guards the invite route.

use crate::adapters::http::guard::{EnvironmentGuard, require_environment};
use crate::adapters::http::handlers::{health, invite, update, verify};
use crate::adapters::http::state::AppState;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

pub fn app(state: AppState, guard: EnvironmentGuard) -> Router {
    // Invites only run in the environment the guard permits.
    let guarded = Router::new()
        .route("/slack/invite", post(invite))
        .route_layer(from_fn_with_state(guard, require_environment));

    Router::new()
        .route("/health", get(health))
        .route("/slack/verify", get(verify))
        .route("/slack/update", get(update))
        .merge(guarded)
        .with_state(state)
}
