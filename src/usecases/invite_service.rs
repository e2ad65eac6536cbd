//! Invite use case: send a workspace invitation with the admin credential.
//!
//! Every failure is reported once through `InviteErrorPort` and folded into an
//! `InviteOutcome`; nothing is retried.

use crate::domain::{DomainError, InviteOutcome};
use crate::ports::{AdminInvitePort, InviteErrorPort};
use std::sync::Arc;
use tracing::{error, info};

pub struct InviteService {
    admin: Arc<dyn AdminInvitePort>,
    reporter: Arc<dyn InviteErrorPort>,
}

impl InviteService {
    pub fn new(admin: Arc<dyn AdminInvitePort>, reporter: Arc<dyn InviteErrorPort>) -> Self {
        Self { admin, reporter }
    }

    pub async fn invite(&self, email: &str) -> InviteOutcome {
        let err = match self.admin.invite(email).await {
            Ok(response) => {
                info!("invite sent");
                return InviteOutcome::Invited(response);
            }
            Err(e) => e,
        };

        match &err {
            DomainError::SlackApi { code, .. } => {
                info!(code = %code, "Slack invite resulted in API error");
            }
            other => {
                error!(error = %other, "Slack invite failed");
            }
        }

        self.reporter.report(email, &err).await;

        match err {
            DomainError::SlackApi { code, data } => InviteOutcome::Rejected { code, data },
            other => InviteOutcome::Failed {
                message: other.to_string(),
            },
        }
    }
}
