use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Person;
use crate::enums::{EconomicStatus, VerificationStatus};

/// A registered household; belongs to exactly one village.
///
/// `members` is empty on list responses; the detail endpoint returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Family {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub village_id: String,
    pub chokhla_id: Option<String>,
    pub mukhiya_name: String,
    pub current_address: String,
    pub permanent_address: Option<String>,
    pub economic_status: Option<EconomicStatus>,
    pub status: VerificationStatus,
    pub member_count: u32,
    pub members: Vec<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Family {
    /// The member flagged as head of household, if exactly one is.
    #[must_use]
    pub fn mukhiya(&self) -> Option<&Person> {
        let mut heads = self.members.iter().filter(|m| m.is_mukhiya);
        match (heads.next(), heads.next()) {
            (Some(head), None) => Some(head),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, is_mukhiya: bool) -> Person {
        Person {
            first_name: name.into(),
            is_mukhiya,
            ..Person::default()
        }
    }

    #[test]
    fn mukhiya_requires_single_head() {
        let mut family = Family {
            members: vec![member("Ramesh", true), member("Sita", false)],
            ..Family::default()
        };
        assert_eq!(family.mukhiya().map(|m| m.first_name.as_str()), Some("Ramesh"));

        family.members[1].is_mukhiya = true;
        assert!(family.mukhiya().is_none());
    }

    #[test]
    fn list_response_without_members_parses() {
        let family: Family = serde_json::from_str(
            r#"{"id":"fam-1","villageId":"vil-1","mukhiyaName":"Ramesh Panchal",
                "currentAddress":"Main road","status":"PENDING","memberCount":4}"#,
        )
        .unwrap();
        assert_eq!(family.status, VerificationStatus::Pending);
        assert_eq!(family.member_count, 4);
        assert!(family.members.is_empty());
    }
}
