//! Greeting use case: send a tailored welcome DM based on the member's military status.
//!
//! Delivery is fire-and-forget. Messages go out on a spawned task and failures are
//! only logged; the caller gets an answer as soon as the task is scheduled.

use crate::domain::greetings::greeting_for;
use crate::domain::{GreetingMessage, MilitaryStatus, UnknownStatus};
use crate::ports::MessengerPort;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub struct GreetingService {
    messenger: Arc<dyn MessengerPort>,
}

impl GreetingService {
    pub fn new(messenger: Arc<dyn MessengerPort>) -> Self {
        Self { messenger }
    }

    /// Queue the greeting for `slack_id`.
    ///
    /// Returns `None` (and sends nothing) when `military_status` is not a known
    /// category. The handle is only useful to callers that want to wait for delivery.
    pub fn greet(&self, slack_id: &str, military_status: &str) -> Option<JoinHandle<()>> {
        let status = match military_status.parse::<MilitaryStatus>() {
            Ok(status) => status,
            Err(UnknownStatus(raw)) => {
                info!(military_status = %raw, "unknown military status, no greeting sent");
                return None;
            }
        };

        let message = greeting_for(slack_id, status);
        info!(%status, "queueing greeting");
        Some(self.send_user_greetings(vec![message]))
    }

    /// Post each message in order on a background task.
    pub fn send_user_greetings(&self, messages: Vec<GreetingMessage>) -> JoinHandle<()> {
        let messenger = Arc::clone(&self.messenger);
        tokio::spawn(async move {
            for message in messages {
                match messenger
                    .post_message(&message.recipient, &message.text)
                    .await
                {
                    Ok(()) => debug!(recipient = %message.recipient, "greeting delivered"),
                    Err(e) => {
                        warn!(recipient = %message.recipient, error = %e, "failed to send greeting")
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::greetings::{identify_military_ad, identify_military_spouse};
    use crate::usecases::test_support::RecordingMessenger;

    #[tokio::test]
    async fn test_current_status_sends_active_duty_greeting() {
        let messenger = RecordingMessenger::default();
        let service = GreetingService::new(Arc::new(messenger.clone()));

        service.greet("U42", "current").unwrap().await.unwrap();

        assert_eq!(
            messenger.posted(),
            vec![("U42".to_string(), identify_military_ad("U42"))]
        );
    }

    #[tokio::test]
    async fn test_spouse_status_sends_spouse_greeting() {
        let messenger = RecordingMessenger::default();
        let service = GreetingService::new(Arc::new(messenger.clone()));

        service.greet("U42", "spouse").unwrap().await.unwrap();

        assert_eq!(
            messenger.posted(),
            vec![("U42".to_string(), identify_military_spouse("U42"))]
        );
    }

    #[tokio::test]
    async fn test_unknown_status_sends_nothing() {
        let messenger = RecordingMessenger::default();
        let service = GreetingService::new(Arc::new(messenger.clone()));

        assert!(service.greet("U42", "veteran").is_none());
        assert!(service.greet("U42", "").is_none());
        assert!(messenger.posted().is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_does_not_stop_batch() {
        let messenger = RecordingMessenger::failing();
        let service = GreetingService::new(Arc::new(messenger.clone()));
        let batch = vec![
            GreetingMessage {
                recipient: "U1".to_string(),
                text: "one".to_string(),
            },
            GreetingMessage {
                recipient: "U2".to_string(),
                text: "two".to_string(),
            },
        ];

        service.send_user_greetings(batch).await.unwrap();

        assert_eq!(messenger.posted().len(), 2);
    }
}
