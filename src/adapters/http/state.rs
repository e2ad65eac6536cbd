//! Shared handler state.

use crate::usecases::{GreetingService, InviteService, VerifyService};
use std::sync::Arc;

// Use cases shared by every handler. Built once in main and injected here.
#[derive(Clone)]
pub struct AppState {
    pub verify: Arc<VerifyService>,
    pub greetings: Arc<GreetingService>,
    pub invites: Arc<InviteService>,
}
