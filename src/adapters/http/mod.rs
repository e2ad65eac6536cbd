//! HTTP adapter. axum router, handlers, request/response DTOs and the environment guard.

pub mod guard;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;

pub use guard::EnvironmentGuard;
pub use routes::app;
pub use state::AppState;
