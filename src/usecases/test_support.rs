use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{DomainError, SlackUser};
use crate::ports::{AdminInvitePort, DirectoryPort, InviteErrorPort, MessengerPort};

// Directory backed by a fixed email -> member table.
#[derive(Default)]
pub(crate) struct StaticDirectory {
    users: HashMap<String, SlackUser>,
    fail: bool,
}

impl StaticDirectory {
    pub(crate) fn with_user(mut self, email: &str, id: &str, name: &str) -> Self {
        self.users.insert(
            email.to_string(),
            SlackUser {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
        self
    }

    pub(crate) fn failing() -> Self {
        Self {
            users: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl DirectoryPort for StaticDirectory {
    async fn lookup_by_email(&self, email: &str) -> Result<Option<SlackUser>, DomainError> {
        if self.fail {
            return Err(DomainError::Transport("directory unreachable".to_string()));
        }
        Ok(self.users.get(email).cloned())
    }
}

// Messenger that records every (channel, text) it is asked to post.
#[derive(Clone, Default)]
pub(crate) struct RecordingMessenger {
    posted: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

impl RecordingMessenger {
    pub(crate) fn failing() -> Self {
        Self {
            posted: Arc::default(),
            fail: true,
        }
    }

    pub(crate) fn posted(&self) -> Vec<(String, String)> {
        self.posted.lock().expect("messages mutex poisoned").clone()
    }
}

#[async_trait]
impl MessengerPort for RecordingMessenger {
    async fn post_message(&self, channel: &str, text: &str) -> Result<(), DomainError> {
        self.posted
            .lock()
            .expect("messages mutex poisoned")
            .push((channel.to_string(), text.to_string()));
        if self.fail {
            return Err(DomainError::Transport("post failed".to_string()));
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub(crate) enum InviteBehavior {
    Accept,
    SlackError(&'static str),
    TransportError,
}

// Admin API double; the response is derived from the configured behavior.
#[derive(Clone)]
pub(crate) struct ScriptedInviter {
    behavior: InviteBehavior,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedInviter {
    pub(crate) fn new(behavior: InviteBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::default(),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl AdminInvitePort for ScriptedInviter {
    async fn invite(&self, email: &str) -> Result<Value, DomainError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(email.to_string());
        match self.behavior {
            InviteBehavior::Accept => Ok(serde_json::json!({"ok": true})),
            InviteBehavior::SlackError(code) => Err(DomainError::SlackApi {
                code: code.to_string(),
                data: serde_json::json!({"ok": false, "error": code}),
            }),
            InviteBehavior::TransportError => {
                Err(DomainError::Transport("connection reset".to_string()))
            }
        }
    }
}

// Reporter that records (email, error text) per report.
#[derive(Clone, Default)]
pub(crate) struct RecordingReporter {
    reports: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingReporter {
    pub(crate) fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().expect("reports mutex poisoned").clone()
    }
}

#[async_trait]
impl InviteErrorPort for RecordingReporter {
    async fn report(&self, email: &str, error: &DomainError) {
        self.reports
            .lock()
            .expect("reports mutex poisoned")
            .push((email.to_string(), error.to_string()));
    }
}
