//! Lead store access
//!
//! The wizard persists a finished intake through [`LeadRepository`]. The
//! production implementation talks to a PostgREST endpoint over HTTP; when
//! the endpoint is not configured, [`UnavailableRepository`] takes its place
//! so the wizard still runs and every submission reports the problem.

mod client;
mod error;
mod traits;
mod unavailable;

pub use client::RestLeadRepository;
pub use error::RepositoryError;
pub use traits::LeadRepository;
pub use unavailable::UnavailableRepository;

#[cfg(test)]
pub use error::ConfigurationError;
#[cfg(test)]
pub use traits::MockLeadRepository;

/// Open the configured store, falling back to [`UnavailableRepository`]
pub fn connect(config: &crate::config::RepositoryConfig) -> Box<dyn LeadRepository> {
    match RestLeadRepository::initialize(config) {
        Ok(repo) => Box::new(repo),
        Err(err) => {
            tracing::error!(error = %err, "lead store unavailable, submissions will fail");
            Box::new(UnavailableRepository::new(err))
        }
    }
}
