//! Configuration handling for the intake wizard
//!
//! Values come from an optional JSON file in the platform config directory,
//! overlaid by environment variables. Blank values count as unset.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Lead store endpoint
pub const STORE_URL_VAR: &str = "AUCTION_INTAKE_STORE_URL";
/// Lead store public access key
pub const STORE_KEY_VAR: &str = "AUCTION_INTAKE_STORE_KEY";
pub const BROKER_OFFICE_VAR: &str = "AUCTION_INTAKE_BROKER_OFFICE";
pub const BROKER_NAME_VAR: &str = "AUCTION_INTAKE_BROKER_NAME";
pub const BROKER_PHONE_VAR: &str = "AUCTION_INTAKE_BROKER_PHONE";

const LOG_FILE_NAME: &str = "auction-intake.log";

const DEFAULT_BROKER_OFFICE: &str = "경매대행 서비스";
const DEFAULT_BROKER_NAME: &str = "담당 공인중개사";

/// User configuration for the wizard
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Lead store endpoint, e.g. `https://xyz.supabase.co`
    pub store_url: Option<String>,
    /// Lead store public access key
    pub store_key: Option<String>,
    /// Office name shown in the header
    pub broker_office: Option<String>,
    /// Broker name shown on the success screen
    pub broker_name: Option<String>,
    /// Broker phone number for the contact line
    pub broker_phone: Option<String>,
}

/// Settings needed to open the lead store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
}

/// Display-only broker details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerProfile {
    pub office: String,
    pub name: String,
    /// Empty when no contact number is configured
    pub phone: String,
}

impl BrokerProfile {
    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty()
    }
}

impl Default for BrokerProfile {
    fn default() -> Self {
        Self {
            office: DEFAULT_BROKER_OFFICE.to_string(),
            name: DEFAULT_BROKER_NAME.to_string(),
            phone: String::new(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("kr", "auction-intake", "auction-intake")
}

/// Log file in the platform data directory.
///
/// The alternate screen owns the terminal while the wizard runs, so logs never
/// go to stdout or stderr.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating missing parent directories
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply the process environment
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                config = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config file");
            }
        }

        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Overlay values returned by `lookup` on top of this config
    pub fn with_env(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |key: &str, current: Option<String>| non_blank(lookup(key)).or(current);
        Self {
            store_url: pick(STORE_URL_VAR, self.store_url),
            store_key: pick(STORE_KEY_VAR, self.store_key),
            broker_office: pick(BROKER_OFFICE_VAR, self.broker_office),
            broker_name: pick(BROKER_NAME_VAR, self.broker_name),
            broker_phone: pick(BROKER_PHONE_VAR, self.broker_phone),
        }
    }

    pub fn repository_config(&self) -> RepositoryConfig {
        RepositoryConfig {
            endpoint: non_blank(self.store_url.clone()),
            access_key: non_blank(self.store_key.clone()),
        }
    }

    pub fn broker_profile(&self) -> BrokerProfile {
        let defaults = BrokerProfile::default();
        BrokerProfile {
            office: non_blank(self.broker_office.clone()).unwrap_or(defaults.office),
            name: non_blank(self.broker_name.clone()).unwrap_or(defaults.name),
            phone: non_blank(self.broker_phone.clone()).unwrap_or_default(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
