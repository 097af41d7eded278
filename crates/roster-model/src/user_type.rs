//! User type tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Kind of person described by a roster row.
///
/// Roster uploads only accept [`UserType::Child`], [`UserType::Parent`] and
/// [`UserType::Teacher`]; `Admin` and `Student` exist for other submission
/// paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Child,
    Parent,
    Teacher,
    Admin,
    Student,
}

/// Alias accepted for [`UserType::Parent`] in uploaded files.
pub const CAREGIVER_ALIAS: &str = "caregiver";

impl UserType {
    /// User types accepted in roster uploads.
    pub const ROSTER: [UserType; 3] = [Self::Child, Self::Parent, Self::Teacher];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Parent => "parent",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
            Self::Student => "student",
        }
    }

    pub fn is_roster_type(&self) -> bool {
        Self::ROSTER.contains(self)
    }

    /// Exact canonical name match (no trimming, no alias, case-sensitive).
    pub fn from_canonical(value: &str) -> Option<Self> {
        match value {
            "child" => Some(Self::Child),
            "parent" => Some(Self::Parent),
            "teacher" => Some(Self::Teacher),
            "admin" => Some(Self::Admin),
            "student" => Some(Self::Student),
            _ => None,
        }
    }
}

/// Canonical form of an uploaded user type: trimmed, lower-cased, with the
/// caregiver alias folded into `parent`.
pub fn canonical_user_type(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();
    if normalized == CAREGIVER_ALIAS {
        UserType::Parent.as_str().to_string()
    } else {
        normalized
    }
}

impl FromStr for UserType {
    type Err = ModelError;

    /// Lenient parse used for uploaded files.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(&canonical_user_type(value))
            .ok_or_else(|| ModelError::UnknownUserType(value.to_string()))
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
