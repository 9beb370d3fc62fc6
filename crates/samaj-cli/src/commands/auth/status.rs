use samaj_auth::SessionClaims;
use samaj_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    role: Option<Role>,
    chokhla_id: Option<String>,
    village_id: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    backend: String,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let claims = if ctx.config.auth.has_token() {
        Some(ctx.config.auth.token.clone())
    } else {
        ctx.store.load()
    }
    .and_then(|token| SessionClaims::decode(&token).ok());

    let expired = claims.as_ref().is_some_and(SessionClaims::is_expired);
    let note = if expired {
        Some("session token has expired".to_string())
    } else if !ctx.api.has_token() {
        Some("not signed in".to_string())
    } else if ctx.identity.is_none() {
        Some("token has no role and no session was saved; run `samaj auth login` again".to_string())
    } else {
        None
    };
    let identity = ctx.identity.clone();

    output(
        &AuthStatusResponse {
            authenticated: identity.is_some() && !expired,
            user_id: identity.as_ref().map(|i| i.user_id.clone()),
            role: identity.as_ref().map(|i| i.role),
            chokhla_id: identity.as_ref().and_then(|i| i.chokhla_id.clone()),
            village_id: identity.and_then(|i| i.village_id),
            expires_at: claims.and_then(|c| c.expires_at).map(|at| at.to_rfc3339()),
            token_source: if ctx.config.auth.has_token() {
                Some("config".into())
            } else {
                ctx.store.detect_token_source()
            },
            backend: ctx.api.base_url().to_string(),
            note,
        },
        flags.format,
    )
}
