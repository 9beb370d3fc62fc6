use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Regional administrative grouping of villages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Chokhla {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    /// Name of the chokhla's adhyaksh (president).
    pub adhyaksh_name: String,
    pub mobile: String,
    pub email: Option<String>,
    pub state: String,
    pub district: String,
    pub address: Option<String>,
    pub total_villages: u32,
    pub total_families: u32,
    pub total_members: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
