use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AuthUser;
use crate::enums::Role;

/// Lightweight signed-in identity for cross-crate passing.
///
/// Produced by `samaj-auth` from the session token, consumed by `samaj-cli`
/// for route gating. Contains only data fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthIdentity {
    pub user_id: String,
    pub role: Role,
    /// Chokhla the account administers or belongs to.
    pub chokhla_id: Option<String>,
    /// Village the account belongs to (village members only).
    pub village_id: Option<String>,
}

impl From<&AuthUser> for AuthIdentity {
    fn from(user: &AuthUser) -> Self {
        Self {
            user_id: user.id.clone(),
            role: user.role,
            chokhla_id: user.chokhla_id.clone(),
            village_id: user.village_id.clone(),
        }
    }
}
