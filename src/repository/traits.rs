//! Trait abstraction for the lead store to enable mocking in tests

use super::error::RepositoryError;
use crate::state::LeadRecord;
use async_trait::async_trait;

/// Persists submitted leads. Only inserts are needed by the wizard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Insert one lead row; the store assigns its identifier
    async fn insert(&self, record: &LeadRecord) -> Result<(), RepositoryError>;
}
