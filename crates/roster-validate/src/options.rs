//! Options controlling roster validation.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Options shared by every rule profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Date the child age rule measures against. Only its year and month
    /// are used.
    pub reference_date: NaiveDate,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            reference_date: Local::now().date_naive(),
        }
    }
}

impl ValidationOptions {
    /// Options pinned to a fixed reference date.
    pub fn as_of(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }
}

/// Where a user's site comes from during a bulk upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SitePolicy {
    /// Every uploaded user must name a site in a `site` column.
    #[default]
    RequireColumn,
    /// The uploader's organizational permissions determine the site, so the
    /// `site` column is neither required nor checked.
    FromPermissions,
}

impl SitePolicy {
    pub fn requires_site_column(self) -> bool {
        matches!(self, Self::RequireColumn)
    }
}

/// Options for [`crate::validate_add_users_upload`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadOptions {
    pub site_policy: SitePolicy,
    pub validation: ValidationOptions,
}

impl UploadOptions {
    pub fn new(site_policy: SitePolicy) -> Self {
        Self {
            site_policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }
}
