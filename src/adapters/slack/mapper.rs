//! Map Slack Web API response bodies to domain results.
//!
//! Slack answers HTTP 200 for most API-level failures and signals them with
//! `"ok": false` plus an `"error"` code.

use crate::domain::{DomainError, SlackUser};
use serde::Deserialize;
use serde_json::Value;

/// Error code returned by `users.lookupByEmail` when nobody has that email.
pub const USERS_NOT_FOUND: &str = "users_not_found";

/// Turn a Slack envelope into `Ok(body)` or `DomainError::SlackApi`.
///
/// A body without an `ok` field is treated as a failure.
pub fn into_result(body: Value) -> Result<Value, DomainError> {
    if body.get("ok").and_then(Value::as_bool) == Some(true) {
        return Ok(body);
    }
    let code = body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("unknown_error")
        .to_string();
    Err(DomainError::SlackApi { code, data: body })
}

#[derive(Deserialize)]
struct LookupResponse {
    user: LookupUser,
}

#[derive(Deserialize)]
struct LookupUser {
    id: String,
    name: String,
}

/// Map a `users.lookupByEmail` body. `users_not_found` is a miss, not an error.
pub fn user_from_lookup(body: Value) -> Result<Option<SlackUser>, DomainError> {
    let body = match into_result(body) {
        Ok(body) => body,
        Err(DomainError::SlackApi { code, .. }) if code == USERS_NOT_FOUND => return Ok(None),
        Err(e) => return Err(e),
    };
    let parsed: LookupResponse = serde_json::from_value(body)
        .map_err(|e| DomainError::Decode(format!("users.lookupByEmail: {}", e)))?;
    Ok(Some(SlackUser {
        id: parsed.user.id,
        name: parsed.user.name,
    }))
}
