use samaj_core::enums::{Role, VerificationStatus};
use samaj_core::identity::AuthIdentity;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::page_query;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct ListFilter<'a> {
    pub village: Option<&'a str>,
    pub chokhla: Option<&'a str>,
    pub status: Option<&'a str>,
    pub search: Option<&'a str>,
    pub page: Option<u32>,
}

pub async fn run(filter: &ListFilter<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = filter
        .status
        .map(|raw| parse_enum::<VerificationStatus>(raw, "status"))
        .transpose()?;

    let (village, chokhla) = match (filter.village, filter.chokhla) {
        (None, None) => ctx.identity.as_ref().map_or((None, None), default_scope),
        explicit => explicit,
    };

    let query = page_query(filter.page, filter.search, flags, ctx.config.general.default_limit)
        .filter_opt("villageId", village)
        .filter_opt("chokhlaId", chokhla)
        .filter_opt("status", status.map(VerificationStatus::as_str));
    let families = ctx.api.list_families(&query).await?;
    output(&families, flags.format)
}

/// Village members see their own village and chokhla admins their chokhla.
fn default_scope(identity: &AuthIdentity) -> (Option<&str>, Option<&str>) {
    match identity.role {
        Role::SuperAdmin => (None, None),
        Role::ChokhlaAdmin => (None, identity.chokhla_id.as_deref()),
        Role::VillageMember => (identity.village_id.as_deref(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> AuthIdentity {
        AuthIdentity {
            user_id: "usr-1".into(),
            role,
            chokhla_id: Some("chk-1".into()),
            village_id: Some("vil-1".into()),
        }
    }

    #[test]
    fn scope_follows_role() {
        assert_eq!(default_scope(&identity(Role::SuperAdmin)), (None, None));
        assert_eq!(default_scope(&identity(Role::ChokhlaAdmin)), (None, Some("chk-1")));
        assert_eq!(default_scope(&identity(Role::VillageMember)), (Some("vil-1"), None));
    }
}
