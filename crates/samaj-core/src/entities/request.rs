use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RequestStatus, RequestType};

/// A family change awaiting administrative review.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyRequest {
    pub id: String,
    pub family_id: Option<String>,
    pub village_id: String,
    pub mukhiya_name: String,
    pub requested_by: Option<String>,
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub remarks: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub reviewed_at: Option<DateTime<Utc>>,
}
