//! Rules for rows of a link-users roster file.
//!
//! Linking attaches existing accounts to each other, so every row must name
//! the user (`id`), its type and its account `uid`. Unknown columns are
//! dropped.

use roster_model::{LinkUserRecord, Row};

use super::RowProfile;
use super::add::UserTypeValue;
use crate::issue::{Issue, fields};
use crate::normalize::cell_text;

fn required_trimmed(row: &Row, key: &str) -> Option<String> {
    cell_text(row, key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkUsersProfile;

impl RowProfile for LinkUsersProfile {
    type Record = LinkUserRecord;

    fn validate_row(&self, row: &Row) -> Result<LinkUserRecord, Vec<Issue>> {
        let id = required_trimmed(row, fields::ID);
        let user_type = UserTypeValue::from_cell(cell_text(row, fields::USERTYPE).as_deref());
        let uid = required_trimmed(row, fields::UID);

        let mut issues = Vec::new();
        if id.is_none() {
            issues.push(Issue::IdRequired {
                field: fields::ID.to_string(),
            });
        }
        issues.extend(user_type.issue());
        if uid.is_none() {
            issues.push(Issue::UidRequired {
                field: fields::UID.to_string(),
            });
        }

        match (id, user_type, uid) {
            (Some(id), UserTypeValue::Known(user_type), Some(uid)) if issues.is_empty() => {
                Ok(LinkUserRecord {
                    id,
                    user_type,
                    uid,
                    caregiver_id: cell_text(row, fields::CAREGIVER_ID),
                    teacher_id: cell_text(row, fields::TEACHER_ID),
                })
            }
            _ => Err(issues),
        }
    }
}
