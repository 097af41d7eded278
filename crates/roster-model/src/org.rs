use serde::{Deserialize, Serialize};

/// Organizations a submitted user is placed in.
///
/// A valid placement names at least one district and at least one group or
/// school; classes are only allowed together with schools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgIds {
    pub districts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schools: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
}

impl OrgIds {
    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }

    pub fn has_schools(&self) -> bool {
        !self.schools.is_empty()
    }

    pub fn has_classes(&self) -> bool {
        !self.classes.is_empty()
    }
}
