//! Domain entities. Pure data structures for the core business.
//!
//! No Slack/HTTP types here — adapters map into these.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A workspace member as returned by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackUser {
    pub id: String,
    pub name: String,
}

/// Result of checking whether an email belongs to a workspace member.
///
/// `id` and `displayName` are only present when the member exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl LookupResult {
    pub fn found(user: SlackUser) -> Self {
        Self {
            exists: true,
            id: Some(user.id),
            display_name: Some(user.name),
        }
    }

    pub fn missing() -> Self {
        Self {
            exists: false,
            id: None,
            display_name: None,
        }
    }
}

impl From<Option<SlackUser>> for LookupResult {
    fn from(user: Option<SlackUser>) -> Self {
        user.map(Self::found).unwrap_or_else(Self::missing)
    }
}

/// Greeting category supplied by the caller of the update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilitaryStatus {
    Current,
    Spouse,
}

impl MilitaryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilitaryStatus::Current => "current",
            MilitaryStatus::Spouse => "spouse",
        }
    }
}

impl fmt::Display for MilitaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a status string is outside the known categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for MilitaryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(MilitaryStatus::Current),
            "spouse" => Ok(MilitaryStatus::Spouse),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A direct message to a single member. `recipient` is a Slack user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingMessage {
    pub recipient: String,
    pub text: String,
}

/// What happened to an invite request.
///
/// Errors are kept as data (code, payload, message), never as live error values.
#[derive(Debug, Clone, PartialEq)]
pub enum InviteOutcome {
    /// Slack accepted the invite; raw response body.
    Invited(serde_json::Value),
    /// Slack answered `ok: false`.
    Rejected {
        code: String,
        data: serde_json::Value,
    },
    /// Anything else: transport, decode.
    Failed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_result_found_serializes_display_name() {
        let result = LookupResult::found(SlackUser {
            id: "U1".to_string(),
            name: "Alice".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"exists": true, "id": "U1", "displayName": "Alice"})
        );
    }

    #[test]
    fn test_lookup_result_missing_has_no_other_keys() {
        let value = serde_json::to_value(LookupResult::from(None)).unwrap();
        assert_eq!(value, json!({"exists": false}));
    }

    #[test]
    fn test_military_status_parse() {
        assert_eq!(
            "current".parse::<MilitaryStatus>(),
            Ok(MilitaryStatus::Current)
        );
        assert_eq!(
            "spouse".parse::<MilitaryStatus>(),
            Ok(MilitaryStatus::Spouse)
        );
        assert_eq!(
            "Current".parse::<MilitaryStatus>(),
            Err(UnknownStatus("Current".to_string()))
        );
        assert!("veteran".parse::<MilitaryStatus>().is_err());
    }
}
