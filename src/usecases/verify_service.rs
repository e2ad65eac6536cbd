//! Verify use case: does an email belong to a workspace member?

use crate::domain::{DomainError, LookupResult};
use crate::ports::DirectoryPort;
use std::sync::Arc;
use tracing::debug;

pub struct VerifyService {
    directory: Arc<dyn DirectoryPort>,
}

impl VerifyService {
    pub fn new(directory: Arc<dyn DirectoryPort>) -> Self {
        Self { directory }
    }

    /// Look `email` up in the member directory. No side effects.
    pub async fn verify(&self, email: &str) -> Result<LookupResult, DomainError> {
        let user = self.directory.lookup_by_email(email).await?;
        debug!(found = user.is_some(), "directory lookup complete");
        Ok(LookupResult::from(user))
    }
}
