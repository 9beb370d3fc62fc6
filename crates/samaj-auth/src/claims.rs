use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use samaj_core::enums::Role;
use samaj_core::identity::AuthIdentity;
use serde::Deserialize;

use crate::error::AuthError;

/// Claims read from the backend-issued session JWT.
///
/// The payload is decoded without signature verification: the client only
/// uses it for display and route gating, and the backend re-checks the token
/// on every request.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub raw_token: String,
    pub user_id: Option<String>,
    pub role: Option<Role>,
    pub chokhla_id: Option<String>,
    pub village_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Payload {
    user_id: Option<String>,
    sub: Option<String>,
    id: Option<String>,
    role: Option<Role>,
    chokhla_id: Option<String>,
    village_id: Option<String>,
    exp: Option<i64>,
}

impl SessionClaims {
    /// Decode the payload segment of `token`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MalformedToken` if the token is not a three-part
    /// JWT or its payload is not base64url-encoded JSON.
    pub fn decode(token: &str) -> Result<Self, AuthError> {
        let mut parts = token.trim().split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::MalformedToken("expected three segments".into()));
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| AuthError::MalformedToken(format!("payload base64: {e}")))?;
        let payload: Payload = serde_json::from_slice(&bytes)
            .map_err(|e| AuthError::MalformedToken(format!("payload json: {e}")))?;

        let expires_at = match payload.exp {
            Some(exp) => Some(
                DateTime::from_timestamp(exp, 0)
                    .ok_or_else(|| AuthError::MalformedToken("invalid exp timestamp".into()))?,
            ),
            None => None,
        };

        Ok(Self {
            raw_token: token.trim().to_string(),
            user_id: payload.user_id.or(payload.sub).or(payload.id),
            role: payload.role,
            chokhla_id: payload.chokhla_id,
            village_id: payload.village_id,
            expires_at,
        })
    }

    /// Identity carried by the token, when it names both user and role.
    #[must_use]
    pub fn to_identity(&self) -> Option<AuthIdentity> {
        Some(AuthIdentity {
            user_id: self.user_id.clone()?,
            role: self.role?,
            chokhla_id: self.chokhla_id.clone(),
            village_id: self.village_id.clone(),
        })
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    /// Tokens without `exp` never expire client-side.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at.is_some_and(|exp| exp <= threshold)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_near_expiry(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_backend_claims() {
        let exp = (Utc::now() + chrono::TimeDelta::hours(1)).timestamp();
        let raw = token(&serde_json::json!({
            "userId": "usr-7",
            "role": "CHOKHLA_ADMIN",
            "chokhlaId": "chk-3",
            "exp": exp,
        }));

        let claims = SessionClaims::decode(&raw).expect("decode");
        assert_eq!(claims.user_id.as_deref(), Some("usr-7"));
        assert_eq!(claims.role, Some(Role::ChokhlaAdmin));
        assert!(!claims.is_expired());

        let identity = claims.to_identity().expect("identity");
        assert_eq!(identity.chokhla_id.as_deref(), Some("chk-3"));
        assert!(identity.village_id.is_none());
    }

    #[test]
    fn accepts_sub_alias() {
        let raw = token(&serde_json::json!({"sub": "usr-1", "role": "SUPER_ADMIN"}));
        let claims = SessionClaims::decode(&raw).expect("decode");
        assert_eq!(claims.user_id.as_deref(), Some("usr-1"));
        assert!(claims.expires_at.is_none());
        assert!(!claims.is_expired());
    }

    #[test]
    fn sub_and_user_id_together_decode() {
        let exp = (Utc::now() - chrono::TimeDelta::seconds(10)).timestamp();
        let raw = token(&serde_json::json!({
            "sub": "usr-1",
            "userId": "usr-2",
            "role": "SUPER_ADMIN",
            "exp": exp,
        }));
        let claims = SessionClaims::decode(&raw).expect("decode");
        assert_eq!(claims.user_id.as_deref(), Some("usr-2"));
        assert!(claims.is_expired());
    }

    #[test]
    fn expired_token_detected() {
        let exp = (Utc::now() - chrono::TimeDelta::seconds(10)).timestamp();
        let raw = token(&serde_json::json!({"sub": "usr-1", "exp": exp}));
        let claims = SessionClaims::decode(&raw).expect("decode");
        assert!(claims.is_expired());
        assert!(claims.to_identity().is_none(), "no role means no identity");
    }

    #[test]
    fn rejects_non_jwt() {
        assert!(matches!(
            SessionClaims::decode("opaque-session-id"),
            Err(AuthError::MalformedToken(_))
        ));
        assert!(SessionClaims::decode("a.%%%.c").is_err());
    }
}
