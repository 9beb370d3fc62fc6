use samaj_core::enums::Role;
use samaj_core::identity::AuthIdentity;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::output;

/// Which dashboard to fetch.
#[derive(Debug, PartialEq, Eq)]
enum Scope<'a> {
    Society,
    Chokhla(&'a str),
    Village(&'a str),
}

/// Handle `samaj dashboard`.
pub async fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match resolve_scope(args, ctx.require_identity()?)? {
        Scope::Society => output(&ctx.api.dashboard_stats().await?, flags.format),
        Scope::Chokhla(id) => output(&ctx.api.chokhla_dashboard(id).await?, flags.format),
        Scope::Village(id) => output(&ctx.api.village_dashboard(id).await?, flags.format),
    }
}

/// Explicit flags win; otherwise each role lands on its own dashboard.
fn resolve_scope<'a>(args: &'a DashboardArgs, identity: &'a AuthIdentity) -> anyhow::Result<Scope<'a>> {
    if let Some(id) = &args.chokhla {
        return Ok(Scope::Chokhla(id));
    }
    if let Some(id) = &args.village {
        return Ok(Scope::Village(id));
    }
    match identity.role {
        Role::SuperAdmin => Ok(Scope::Society),
        Role::ChokhlaAdmin => identity
            .chokhla_id
            .as_deref()
            .map(Scope::Chokhla)
            .ok_or_else(|| anyhow::anyhow!("session has no chokhla; pass --chokhla <id>")),
        Role::VillageMember => identity
            .village_id
            .as_deref()
            .map(Scope::Village)
            .ok_or_else(|| anyhow::anyhow!("session has no village; pass --village <id>")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role, chokhla: Option<&str>, village: Option<&str>) -> AuthIdentity {
        AuthIdentity {
            user_id: "usr-1".into(),
            role,
            chokhla_id: chokhla.map(str::to_string),
            village_id: village.map(str::to_string),
        }
    }

    fn no_flags() -> DashboardArgs {
        DashboardArgs {
            chokhla: None,
            village: None,
        }
    }

    #[test]
    fn each_role_defaults_to_its_own_dashboard() {
        let args = no_flags();
        let admin = identity(Role::SuperAdmin, None, None);
        assert_eq!(resolve_scope(&args, &admin).unwrap(), Scope::Society);

        let chokhla_admin = identity(Role::ChokhlaAdmin, Some("chk-1"), None);
        assert_eq!(resolve_scope(&args, &chokhla_admin).unwrap(), Scope::Chokhla("chk-1"));

        let member = identity(Role::VillageMember, Some("chk-1"), Some("vil-4"));
        assert_eq!(resolve_scope(&args, &member).unwrap(), Scope::Village("vil-4"));
    }

    #[test]
    fn explicit_flag_wins() {
        let args = DashboardArgs {
            chokhla: None,
            village: Some("vil-9".into()),
        };
        let admin = identity(Role::SuperAdmin, None, None);
        assert_eq!(resolve_scope(&args, &admin).unwrap(), Scope::Village("vil-9"));
    }

    #[test]
    fn missing_scope_is_an_error() {
        let member = identity(Role::VillageMember, None, None);
        assert!(resolve_scope(&no_flags(), &member).is_err());
    }
}
