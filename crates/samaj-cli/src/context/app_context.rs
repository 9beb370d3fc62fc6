use anyhow::Context;
use samaj_api::ApiClient;
use samaj_auth::access::{require_access, require_write};
use samaj_auth::{Area, AuthError, TokenStore};
use samaj_config::SamajConfig;
use samaj_core::identity::AuthIdentity;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SamajConfig,
    pub api: ApiClient,
    pub store: TokenStore,
    pub identity: Option<AuthIdentity>,
}

impl AppContext {
    /// Build the API client and resolve the stored session.
    ///
    /// A token in `auth.token` (config or `SAMAJ_AUTH__TOKEN`) wins over the
    /// one saved by `samaj auth login`. Either way the identity comes from the
    /// token's claims, else from the session saved at login.
    pub fn init(config: SamajConfig) -> anyhow::Result<Self> {
        let store = TokenStore::new(config.auth.keyring_service.as_str())?;
        let api = ApiClient::new(&config.api).context("failed to build the API client")?;

        let config_token = config.auth.has_token().then(|| config.auth.token.trim().to_string());
        let token = config_token.or_else(|| store.load());
        let identity = token.as_deref().and_then(|token| session_identity(token, &store));
        let api = match token {
            Some(token) => api.with_token(token),
            None => api,
        };

        Ok(Self {
            config,
            api,
            store,
            identity,
        })
    }

    /// The signed-in identity, or an error telling the user to log in.
    pub fn require_identity(&self) -> anyhow::Result<&AuthIdentity> {
        self.identity
            .as_ref()
            .ok_or(AuthError::NotAuthenticated)
            .context("run `samaj auth login --mobile <number>` first")
    }

    /// Gate a command area by the signed-in role.
    pub fn require(&self, area: Area, write: bool) -> anyhow::Result<()> {
        let identity = self.require_identity()?;
        if write {
            require_write(identity.role, area)?;
        } else {
            require_access(identity.role, area)?;
        }
        Ok(())
    }
}

fn session_identity(token: &str, store: &TokenStore) -> Option<AuthIdentity> {
    match samaj_auth::identity_for_token(token, store) {
        Ok(identity) => Some(identity),
        Err(AuthError::TokenExpired) => {
            tracing::warn!("session token has expired");
            None
        }
        Err(error) => {
            tracing::debug!(%error, "no usable session identity");
            None
        }
    }
}
