//! Optional TOML configuration.
//!
//! ```toml
//! [upload]
//! site_policy = "from-permissions"
//!
//! [validation]
//! reference_date = "2024-06-01"
//! ```
//!
//! Command-line flags take precedence over file values.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use roster_validate::{SitePolicy, UploadOptions, ValidationOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub upload: UploadSection,
    pub validation: ValidationSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSection {
    pub site_policy: SitePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSection {
    /// Fixed date for the child age rule; today when absent.
    pub reference_date: Option<NaiveDate>,
}

impl RosterConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid roster configuration")
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Validation options, with `as_of` overriding the configured date.
    pub fn validation_options(&self, as_of: Option<NaiveDate>) -> ValidationOptions {
        as_of
            .or(self.validation.reference_date)
            .map(ValidationOptions::as_of)
            .unwrap_or_default()
    }

    /// Upload options. `site_from_permissions` forces
    /// [`SitePolicy::FromPermissions`]; otherwise the configured policy applies.
    pub fn upload_options(
        &self,
        site_from_permissions: bool,
        as_of: Option<NaiveDate>,
    ) -> UploadOptions {
        let site_policy = if site_from_permissions {
            SitePolicy::FromPermissions
        } else {
            self.upload.site_policy
        };
        UploadOptions::new(site_policy).with_validation(self.validation_options(as_of))
    }
}
