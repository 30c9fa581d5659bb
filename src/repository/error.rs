//! Lead store error types

use thiserror::Error;

/// A required store setting is missing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("lead store is not configured: {variable} is not set")]
pub struct ConfigurationError {
    /// Name of the environment variable that was expected
    pub variable: &'static str,
}

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

impl RepositoryError {
    /// True when an operator has to fix the deployment before a retry can help
    pub fn is_configuration(&self) -> bool {
        matches!(self, RepositoryError::Configuration(_))
    }
}
