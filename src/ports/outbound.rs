//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, SlackUser};

/// Member directory. Look up workspace members.
#[async_trait::async_trait]
pub trait DirectoryPort: Send + Sync {
    /// Find the member registered with `email`. `Ok(None)` when nobody matches.
    async fn lookup_by_email(&self, email: &str) -> Result<Option<SlackUser>, DomainError>;
}

/// Messaging. Post text to a channel or a member's direct messages.
#[async_trait::async_trait]
pub trait MessengerPort: Send + Sync {
    /// `channel` is a channel name/id or a user id (opens a DM).
    async fn post_message(&self, channel: &str, text: &str) -> Result<(), DomainError>;
}

/// Workspace invitations, issued with the admin credential.
#[async_trait::async_trait]
pub trait AdminInvitePort: Send + Sync {
    /// Invite `email` to the workspace. Returns the raw API response on success.
    async fn invite(&self, email: &str) -> Result<serde_json::Value, DomainError>;
}

/// Called once for every failed invite.
#[async_trait::async_trait]
pub trait InviteErrorPort: Send + Sync {
    async fn report(&self, email: &str, error: &DomainError);
}
