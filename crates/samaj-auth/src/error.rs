use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in; run `samaj auth login`")]
    NotAuthenticated,

    #[error("session expired; run `samaj auth login` again")]
    TokenExpired,

    #[error("malformed session token: {0}")]
    MalformedToken(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("{role} accounts cannot {action} {area}")]
    Forbidden {
        role: String,
        action: &'static str,
        area: String,
    },
}
