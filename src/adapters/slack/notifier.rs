//! Moderator notifier. Implements InviteErrorPort by posting failed invites to a channel.

use crate::domain::DomainError;
use crate::ports::{InviteErrorPort, MessengerPort};
use std::sync::Arc;
use tracing::{info, warn};

/// Slack codes that mean the person is already covered; nobody needs to act.
const BENIGN_INVITE_CODES: &[&str] = &["already_invited", "already_in_team"];

pub struct ModeratorNotifier {
    messenger: Arc<dyn MessengerPort>,
    channel: String,
}

impl ModeratorNotifier {
    pub fn new(messenger: Arc<dyn MessengerPort>, channel: impl Into<String>) -> Self {
        Self {
            messenger,
            channel: channel.into(),
        }
    }
}

fn is_benign(error: &DomainError) -> bool {
    error
        .slack_code()
        .is_some_and(|code| BENIGN_INVITE_CODES.contains(&code))
}

/// Text posted to moderators for a failed invite.
pub fn invite_failure_text(email: &str, error: &DomainError) -> String {
    format!("Slack invite for {} failed: {}", email, error)
}

#[async_trait::async_trait]
impl InviteErrorPort for ModeratorNotifier {
    async fn report(&self, email: &str, error: &DomainError) {
        if is_benign(error) {
            info!(code = ?error.slack_code(), "invite skipped, member already covered");
            return;
        }

        let text = invite_failure_text(email, error);
        if let Err(e) = self.messenger.post_message(&self.channel, &text).await {
            warn!(channel = %self.channel, error = %e, "failed to notify moderators");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::RecordingMessenger;
    use serde_json::json;

    fn slack_error(code: &str) -> DomainError {
        DomainError::SlackApi {
            code: code.to_string(),
            data: json!({"ok": false, "error": code}),
        }
    }

    #[tokio::test]
    async fn test_reports_unexpected_error_to_channel() {
        let messenger = RecordingMessenger::default();
        let notifier = ModeratorNotifier::new(Arc::new(messenger.clone()), "moderators");

        notifier.report("a@x.com", &slack_error("invalid_email")).await;

        assert_eq!(
            messenger.posted(),
            vec![(
                "moderators".to_string(),
                "Slack invite for a@x.com failed: Slack API error: invalid_email".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_benign_codes_are_not_forwarded() {
        let messenger = RecordingMessenger::default();
        let notifier = ModeratorNotifier::new(Arc::new(messenger.clone()), "moderators");

        notifier.report("a@x.com", &slack_error("already_invited")).await;
        notifier.report("a@x.com", &slack_error("already_in_team")).await;

        assert!(messenger.posted().is_empty());
    }

    #[tokio::test]
    async fn test_transport_errors_are_forwarded() {
        let messenger = RecordingMessenger::default();
        let notifier = ModeratorNotifier::new(Arc::new(messenger.clone()), "moderators");

        notifier
            .report("a@x.com", &DomainError::Transport("timed out".to_string()))
            .await;

        let posted = messenger.posted();
        assert_eq!(posted.len(), 1);
        assert!(posted[0].1.contains("timed out"));
    }

    #[tokio::test]
    async fn test_post_failure_is_swallowed() {
        let messenger = RecordingMessenger::failing();
        let notifier = ModeratorNotifier::new(Arc::new(messenger.clone()), "moderators");

        notifier.report("a@x.com", &slack_error("invalid_email")).await;

        assert_eq!(messenger.posted().len(), 1);
    }
}
