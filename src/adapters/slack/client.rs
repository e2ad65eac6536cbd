//! Slack Web API client. Implements DirectoryPort, MessengerPort and AdminInvitePort.
//!
//! One client per token: the bot token for lookups and messages, the admin token
//! for invites. No retries; every failure is mapped once to DomainError.

use crate::adapters::slack::mapper;
use crate::domain::{DomainError, SlackUser};
use crate::ports::{AdminInvitePort, DirectoryPort, MessengerPort};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api/";

const USERS_LOOKUP_BY_EMAIL: &str = "users.lookupByEmail";
const CHAT_POST_MESSAGE: &str = "chat.postMessage";
const USERS_ADMIN_INVITE: &str = "users.admin.invite";

/// Slack Web API adapter bound to a single token.
#[derive(Clone)]
pub struct SlackClient {
    client: Client,
    api_url: String,
    token: String,
}

#[derive(Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    text: &'a str,
}

impl SlackClient {
    /// Create a client.
    ///
    /// # Arguments
    /// * `api_url` - Web API base (e.g. "https://slack.com/api/")
    /// * `token` - Bot or admin token, sent as a Bearer credential
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    /// Same HTTP pool and base URL, different credential.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            api_url: self.api_url.clone(),
            token: token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), method)
    }

    /// Read the JSON envelope.
    async fn read_body(method: &str, response: Response) -> Result<Value, DomainError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("{}: {}", method, e)))?;
        parse_envelope(method, status, &text)
    }

    async fn get(&self, method: &str, query: &[(&str, &str)]) -> Result<Value, DomainError> {
        debug!(method, "calling Slack API");
        let response = self
            .client
            .get(self.method_url(method))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("{}: {}", method, e)))?;
        Self::read_body(method, response).await
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        method: &str,
        body: &T,
    ) -> Result<Value, DomainError> {
        debug!(method, "calling Slack API");
        let response = self
            .client
            .post(self.method_url(method))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("{}: {}", method, e)))?;
        Self::read_body(method, response).await
    }

    async fn post_form(&self, method: &str, form: &[(&str, &str)]) -> Result<Value, DomainError> {
        debug!(method, "calling Slack API");
        let response = self
            .client
            .post(self.method_url(method))
            .bearer_auth(&self.token)
            .form(form)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("{}: {}", method, e)))?;
        Self::read_body(method, response).await
    }
}

/// Parse a Slack reply body.
///
/// A body carrying a boolean `ok` is a Slack envelope whatever the HTTP status
/// (e.g. `429 {"ok":false,"error":"ratelimited"}`), so API errors keep their code
/// and payload. Other non-2xx replies are transport failures.
fn parse_envelope(method: &str, status: StatusCode, text: &str) -> Result<Value, DomainError> {
    match serde_json::from_str::<Value>(text) {
        Ok(body) if body.get("ok").is_some_and(Value::is_boolean) => Ok(body),
        Ok(body) if status.is_success() => Ok(body),
        Err(e) if status.is_success() => {
            Err(DomainError::Decode(format!("{}: {}", method, e)))
        }
        _ => {
            warn!(method, status = %status, "Slack API returned HTTP error");
            Err(DomainError::Transport(format!(
                "{} returned {}: {}",
                method,
                status,
                text.chars().take(200).collect::<String>()
            )))
        }
    }
}

#[async_trait]
impl DirectoryPort for SlackClient {
    async fn lookup_by_email(&self, email: &str) -> Result<Option<SlackUser>, DomainError> {
        let body = self.get(USERS_LOOKUP_BY_EMAIL, &[("email", email)]).await?;
        mapper::user_from_lookup(body)
    }
}

#[async_trait]
impl MessengerPort for SlackClient {
    async fn post_message(&self, channel: &str, text: &str) -> Result<(), DomainError> {
        let body = self
            .post_json(CHAT_POST_MESSAGE, &PostMessageRequest { channel, text })
            .await?;
        mapper::into_result(body)?;
        Ok(())
    }
}

#[async_trait]
impl AdminInvitePort for SlackClient {
    async fn invite(&self, email: &str) -> Result<Value, DomainError> {
        let body = self.post_form(USERS_ADMIN_INVITE, &[("email", email)]).await?;
        mapper::into_result(body)
    }
}
