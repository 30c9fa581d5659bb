//! Stand-in store used when the real one could not be configured

use super::error::{ConfigurationError, RepositoryError};
use super::traits::LeadRepository;
use crate::state::LeadRecord;
use async_trait::async_trait;

/// Fails every insert with the configuration error captured at start-up
pub struct UnavailableRepository {
    error: ConfigurationError,
}

impl UnavailableRepository {
    pub fn new(error: ConfigurationError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl LeadRepository for UnavailableRepository {
    async fn insert(&self, _record: &LeadRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Configuration(self.error.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_reports_configuration_error() {
        let repo = UnavailableRepository::new(ConfigurationError {
            variable: "AUCTION_INTAKE_STORE_KEY",
        });
        let record = LeadRecord {
            name: "홍길동".to_string(),
            phone: "010-1234-5678".to_string(),
            case_number: "2024타경1".to_string(),
            property_number: None,
            inquiry: None,
        };

        let err = repo.insert(&record).await.unwrap_err();
        assert!(err.is_configuration());
    }
}
