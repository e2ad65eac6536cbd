//! Slack adapters. Web API client, response mapping and the moderator notifier.

pub mod client;
pub mod mapper;
pub mod notifier;

pub use client::{DEFAULT_SLACK_API_URL, SlackClient};
pub use notifier::ModeratorNotifier;
