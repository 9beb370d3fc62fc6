use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A village; belongs to exactly one chokhla.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Village {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub chokhla_id: String,
    pub state: String,
    pub district: String,
    pub tehsil: Option<String>,
    pub pincode: String,
    pub has_school: bool,
    pub has_health_center: bool,
    pub has_community_hall: bool,
    pub has_electricity: bool,
    pub has_water_supply: bool,
    pub total_families: u32,
    pub total_members: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Village {
    /// Number of the five tracked facilities the village has.
    #[must_use]
    pub fn facility_count(&self) -> usize {
        [
            self.has_school,
            self.has_health_center,
            self.has_community_hall,
            self.has_electricity,
            self.has_water_supply,
        ]
        .into_iter()
        .filter(|has| *has)
        .count()
    }
}
