//! Demo session management.
//!
//! The token is three dot-separated base64 segments in the JWT style:
//! header, claims, and a digest of the first two plus a fixed secret. The
//! digest is never checked on decode — the scheme exists for scenario
//! fidelity, not security, and has to stay functionally equivalent while
//! the scope is a demo.

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use time::OffsetDateTime;
use tracing::debug;

use crate::application::enrich::avatar_url;
use crate::application::error::AppError;
use crate::domain::types::UserRole;
use crate::infra::storage::{ClientStorage, keys as storage_keys};

const TOKEN_SECRET: &str = "your-secret-key-change-in-production";
const SESSION_HOURS: i64 = 24;
const DEMO_EMAIL: &str = "admin@example.com";
const DEMO_PASSWORD: &str = "password";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub avatar: String,
}

/// Authenticated-user context derived from a stored token. At most one
/// live session per client.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
    pub expires_at: OffsetDateTime,
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    user_id: u64,
    email: String,
    role: UserRole,
    /// Expiry as unix milliseconds.
    exp: i64,
}

pub struct AuthService {
    storage: Arc<dyn ClientStorage>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn ClientStorage>) -> Self {
        Self { storage }
    }

    /// Validate the demo credentials; on success mint a 24-hour session
    /// and persist it. On failure nothing is persisted and the caller
    /// stays anonymous.
    pub fn login(&self, credentials: &Credentials) -> Result<Session, AppError> {
        if !credentials_match(credentials) {
            return Err(AppError::InvalidCredentials);
        }

        let user = demo_user(&credentials.email);
        let expires_at = OffsetDateTime::now_utc() + time::Duration::hours(SESSION_HOURS);
        let token = mint_token(&user, expires_at);

        self.storage.set(storage_keys::AUTH_TOKEN, &token);
        let serialized =
            serde_json::to_string(&user).expect("serializing session user should succeed");
        self.storage.set(storage_keys::USER, &serialized);

        Ok(Session {
            token,
            user,
            expires_at,
        })
    }

    /// Clear the persisted session unconditionally; logout has no failure
    /// path that leaves a stale session behind.
    pub fn logout(&self) {
        self.storage.remove(storage_keys::AUTH_TOKEN);
        self.storage.remove(storage_keys::USER);
    }

    /// Revalidate a persisted token on startup.
    ///
    /// Absent token: anonymous. Malformed or expired: persisted state is
    /// cleared and the result is anonymous — this is a recovery path, so
    /// decode failures never escape to the caller.
    pub fn restore(&self) -> Option<Session> {
        let token = self.storage.get(storage_keys::AUTH_TOKEN)?;
        match decode_claims(&token) {
            Some(claims) if claims.exp > unix_millis(OffsetDateTime::now_utc()) => {
                let user = self
                    .storage
                    .get(storage_keys::USER)
                    .and_then(|raw| serde_json::from_str(&raw).ok())
                    .unwrap_or_else(|| demo_user(&claims.email));
                Some(Session {
                    token,
                    user,
                    expires_at: from_unix_millis(claims.exp),
                })
            }
            _ => {
                debug!("persisted token missing, malformed, or expired; clearing session");
                self.logout();
                None
            }
        }
    }

    /// Decode and check a raw token, surfacing the typed failure. Used
    /// when a caller holds a token outside the persisted session.
    pub fn validate(&self, token: &str) -> Result<SessionUser, AppError> {
        let claims = decode_claims(token).ok_or(AppError::InvalidOrExpiredToken)?;
        if claims.exp <= unix_millis(OffsetDateTime::now_utc()) {
            return Err(AppError::InvalidOrExpiredToken);
        }
        Ok(SessionUser {
            id: claims.user_id,
            email: claims.email,
            name: "Admin User".to_string(),
            role: claims.role,
            avatar: avatar_url(1),
        })
    }
}

fn credentials_match(credentials: &Credentials) -> bool {
    // Constant-time on both fields; the demo pair is fixed but the check
    // should not leak which half mismatched.
    let email_ok = credentials.email.as_bytes().ct_eq(DEMO_EMAIL.as_bytes());
    let password_ok = credentials
        .password
        .as_bytes()
        .ct_eq(DEMO_PASSWORD.as_bytes());
    (email_ok & password_ok).unwrap_u8() == 1
}

fn demo_user(email: &str) -> SessionUser {
    SessionUser {
        id: 1,
        email: email.to_string(),
        name: "Admin User".to_string(),
        role: UserRole::Admin,
        avatar: avatar_url(1),
    }
}

fn mint_token(user: &SessionUser, expires_at: OffsetDateTime) -> String {
    let header = serde_json::json!({ "alg": "HS256", "typ": "JWT" });
    let claims = TokenClaims {
        user_id: user.id,
        email: user.email.clone(),
        role: user.role,
        exp: unix_millis(expires_at),
    };

    let encoded_header = URL_SAFE_NO_PAD
        .encode(serde_json::to_vec(&header).expect("serializing token header should succeed"));
    let encoded_claims = URL_SAFE_NO_PAD
        .encode(serde_json::to_vec(&claims).expect("serializing token claims should succeed"));

    let mut hasher = Sha256::new();
    hasher.update(encoded_header.as_bytes());
    hasher.update(encoded_claims.as_bytes());
    hasher.update(TOKEN_SECRET.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(hasher.finalize());

    format!("{encoded_header}.{encoded_claims}.{signature}")
}

/// Read the claims segment. The signature segment must be present but is
/// deliberately not verified.
fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut parts = token.splitn(3, '.');
    let _header = parts.next()?;
    let claims = parts.next()?;
    let _signature = parts.next()?;
    let bytes = URL_SAFE_NO_PAD.decode(claims).ok()?;
    serde_json::from_slice(&bytes).ok()
}

fn unix_millis(when: OffsetDateTime) -> i64 {
    (when.unix_timestamp_nanos() / 1_000_000) as i64
}

fn from_unix_millis(millis: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use crate::infra::storage::MemoryStorage;

    use super::*;

    fn service() -> AuthService {
        AuthService::new(Arc::new(MemoryStorage::default()))
    }

    fn demo_credentials() -> Credentials {
        Credentials {
            email: "admin@example.com".to_string(),
            password: "password".to_string(),
        }
    }

    #[test]
    fn login_with_the_demo_pair_yields_an_admin_session() {
        let auth = service();
        let session = auth.login(&demo_credentials()).expect("session");

        assert_eq!(session.user.role, UserRole::Admin);
        assert_eq!(session.user.email, "admin@example.com");
        assert!(session.expires_at > OffsetDateTime::now_utc());
        assert_eq!(session.token.split('.').count(), 3);
    }

    #[test]
    fn login_failure_persists_nothing() {
        let storage = Arc::new(MemoryStorage::default());
        let auth = AuthService::new(storage.clone());

        let err = auth
            .login(&Credentials {
                email: "admin@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .expect_err("rejected");

        assert!(matches!(err, AppError::InvalidCredentials));
        assert!(storage.get(storage_keys::AUTH_TOKEN).is_none());
        assert!(storage.get(storage_keys::USER).is_none());
    }

    #[test]
    fn restore_round_trips_a_live_session() {
        let storage = Arc::new(MemoryStorage::default());
        let auth = AuthService::new(storage.clone());
        let session = auth.login(&demo_credentials()).expect("session");

        let restored = AuthService::new(storage)
            .restore()
            .expect("restored session");
        assert_eq!(restored.token, session.token);
        assert_eq!(restored.user, session.user);
    }

    #[test]
    fn restore_with_an_expired_token_clears_storage() {
        let storage = Arc::new(MemoryStorage::default());
        let auth = AuthService::new(storage.clone());

        let user = demo_user("admin@example.com");
        let expired = mint_token(&user, OffsetDateTime::now_utc() - time::Duration::hours(1));
        storage.set(storage_keys::AUTH_TOKEN, &expired);
        storage.set(storage_keys::USER, "{}");

        assert!(auth.restore().is_none());
        assert!(storage.get(storage_keys::AUTH_TOKEN).is_none());
        assert!(storage.get(storage_keys::USER).is_none());
    }

    #[test]
    fn restore_swallows_a_malformed_token() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set(storage_keys::AUTH_TOKEN, "not.a.token");

        let auth = AuthService::new(storage.clone());
        assert!(auth.restore().is_none());
        assert!(storage.get(storage_keys::AUTH_TOKEN).is_none());
    }

    #[test]
    fn restore_ignores_the_signature_segment() {
        // Demo behavior to preserve: the digest is cosmetic, so a tampered
        // signature still restores as long as the claims decode.
        let storage = Arc::new(MemoryStorage::default());
        let auth = AuthService::new(storage.clone());
        let session = auth.login(&demo_credentials()).expect("session");

        let mut parts: Vec<&str> = session.token.split('.').collect();
        parts[2] = "tampered";
        storage.set(storage_keys::AUTH_TOKEN, &parts.join("."));

        assert!(auth.restore().is_some());
    }

    #[test]
    fn validate_rejects_garbage_and_expired_tokens() {
        let auth = service();
        assert!(matches!(
            auth.validate("garbage"),
            Err(AppError::InvalidOrExpiredToken)
        ));

        let user = demo_user("admin@example.com");
        let expired = mint_token(&user, OffsetDateTime::now_utc() - time::Duration::minutes(5));
        assert!(matches!(
            auth.validate(&expired),
            Err(AppError::InvalidOrExpiredToken)
        ));
    }

    #[test]
    fn logout_is_unconditional() {
        let storage = Arc::new(MemoryStorage::default());
        let auth = AuthService::new(storage.clone());

        // Nothing persisted yet; logout must still succeed quietly.
        auth.logout();

        auth.login(&demo_credentials()).expect("session");
        auth.logout();
        assert!(storage.get(storage_keys::AUTH_TOKEN).is_none());
        assert!(storage.get(storage_keys::USER).is_none());
    }
}
