//! Application configuration. Slack credentials, deployment environment, listen address.

use crate::adapters::slack::DEFAULT_SLACK_API_URL;
use crate::domain::DomainError;
use serde::Deserialize;
use std::net::SocketAddr;

/// Environment name in which the invite endpoint is enabled.
pub const PRODUCTION: &str = "production";

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_MODERATORS_CHANNEL: &str = "moderators";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// Bot token used for lookups and messages. Read from ONBOARD_SLACK_BOT_TOKEN.
    #[serde(default)]
    pub slack_bot_token: Option<String>,

    /// Admin token allowed to call users.admin.invite. Read from ONBOARD_SLACK_ADMIN_TOKEN.
    #[serde(default)]
    pub slack_admin_token: Option<String>,

    /// Web API base URL. Read from ONBOARD_SLACK_API_URL.
    #[serde(default)]
    pub slack_api_url: Option<String>,

    /// Deployment environment name. Read from ONBOARD_ENVIRONMENT.
    #[serde(default)]
    pub environment: Option<String>,

    /// Channel that receives failed-invite notices. Read from ONBOARD_MODERATORS_CHANNEL.
    #[serde(default)]
    pub moderators_channel: Option<String>,

    /// Listen address. Read from ONBOARD_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("ONBOARD_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Env overrides the optional file.
        c = c.add_source(config::Environment::with_prefix("ONBOARD"));
        c.build()?.try_deserialize()
    }

    /// Bot token; the service cannot start without it.
    pub fn bot_token(&self) -> Result<String, DomainError> {
        self.slack_bot_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| DomainError::Config("ONBOARD_SLACK_BOT_TOKEN is not set".to_string()))
    }

    /// Admin token if configured and non-empty.
    pub fn admin_token(&self) -> Option<String> {
        self.slack_admin_token
            .clone()
            .filter(|t| !t.trim().is_empty())
    }

    pub fn slack_api_url_or_default(&self) -> String {
        self.slack_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SLACK_API_URL.to_string())
    }

    pub fn environment_or_default(&self) -> String {
        self.environment
            .clone()
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
    }

    pub fn moderators_channel_or_default(&self) -> String {
        self.moderators_channel
            .clone()
            .unwrap_or_else(|| DEFAULT_MODERATORS_CHANNEL.to_string())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, DomainError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse::<SocketAddr>()
            .map_err(|e| DomainError::Config(format!("invalid bind address {:?}: {}", raw, e)))
    }
}
