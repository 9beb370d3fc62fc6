use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-village contribution totals for a year.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChandaRecord {
    pub village_id: String,
    pub village_name: String,
    pub year: Option<i32>,
    /// Collected amount in rupees.
    pub total_amount: u64,
    /// Outstanding amount in rupees.
    pub pending_amount: u64,
    pub total_families: u32,
    pub paid_families: u32,
}

impl ChandaRecord {
    /// Families that have not contributed yet.
    #[must_use]
    pub const fn unpaid_families(&self) -> u32 {
        self.total_families.saturating_sub(self.paid_families)
    }
}

/// A single family's contribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChandaEntry {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub family_id: String,
    pub village_id: String,
    pub amount: u64,
    pub paid_on: Option<NaiveDate>,
    pub receipt_number: Option<String>,
    pub remarks: Option<String>,
}
