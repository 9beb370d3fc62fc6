use samaj_core::enums::Role;
use samaj_core::identity::AuthIdentity;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::page_query;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    chokhla: Option<&str>,
    search: Option<&str>,
    page: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let chokhla = chokhla.or_else(|| ctx.identity.as_ref().and_then(default_chokhla));
    let query = page_query(page, search, flags, ctx.config.general.default_limit)
        .filter_opt("chokhlaId", chokhla);
    let villages = ctx.api.list_villages(&query).await?;
    output(&villages, flags.format)
}

/// Chokhla admins see their own chokhla unless they ask for another.
fn default_chokhla(identity: &AuthIdentity) -> Option<&str> {
    match identity.role {
        Role::ChokhlaAdmin => identity.chokhla_id.as_deref(),
        Role::SuperAdmin | Role::VillageMember => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_chokhla_admins_are_scoped() {
        let mut identity = AuthIdentity {
            user_id: "usr-1".into(),
            role: Role::ChokhlaAdmin,
            chokhla_id: Some("chk-3".into()),
            village_id: None,
        };
        assert_eq!(default_chokhla(&identity), Some("chk-3"));

        identity.role = Role::SuperAdmin;
        assert_eq!(default_chokhla(&identity), None);
    }
}
