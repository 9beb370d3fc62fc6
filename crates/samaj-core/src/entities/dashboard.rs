use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ChandaRecord, Chokhla, Village};

/// Organization-wide aggregate counts shown on the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_chokhlas: u32,
    pub total_villages: u32,
    pub total_families: u32,
    pub total_members: u32,
    pub pending_requests: u32,
    pub verified_families: u32,
    pub chanda_collected: u64,
    pub chanda_pending: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChokhlaDashboard {
    pub chokhla: Chokhla,
    pub villages: Vec<Village>,
    pub total_families: u32,
    pub total_members: u32,
    pub pending_requests: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct VillageDashboard {
    pub village: Village,
    pub total_families: u32,
    pub total_members: u32,
    pub verified_families: u32,
    pub pending_families: u32,
    pub chanda: Option<ChandaRecord>,
}
