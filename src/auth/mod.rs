// auth/mod.rs - Supabase JWT authentication core
//
// Route exemption, token verification and identity derivation. Everything in
// here is synchronous and free of request plumbing; the axum glue lives in
// `crate::middleware`.

pub mod identity;
pub mod routes;
pub mod verifier;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

pub use identity::Identity;
pub use routes::RouteTable;
pub use verifier::{AuthFailure, TokenVerifier};

/// Claims read from a Supabase access token.
///
/// Only `sub` is mandatory. Supabase also sends `aud`, `iat`, `session_id` and
/// metadata objects; serde ignores whatever is not listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Claims issued now and expiring after `ttl`. `None` when the expiry
    /// falls outside the representable date range.
    pub fn new(sub: impl Into<String>, email: Option<String>, role: Option<String>, ttl: Duration) -> Option<Self> {
        let now = Utc::now();
        let expires = now.checked_add_signed(ttl)?;

        Some(Self {
            sub: sub.into(),
            email,
            role,
            exp: Some(expires.timestamp()),
            iat: Some(now.timestamp()),
        })
    }
}

/// Sign claims with HS256. Used by the developer CLI and by tests; the API
/// itself never issues tokens.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes()))
}

/// The request-time entry point: classify the route, then verify the bearer
/// token if there is one.
pub struct Authenticator {
    routes: RouteTable,
    verifier: TokenVerifier,
}

impl Authenticator {
    pub fn new(routes: RouteTable, verifier: TokenVerifier) -> Self {
        Self { routes, verifier }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Returns `Ok(None)` when the request proceeds anonymously: exempt routes,
    /// and non-exempt routes without a bearer token. Rejecting the latter is
    /// the authorization gate's job.
    ///
    /// `authorization` is the raw header value. A `Bearer ` header whose token
    /// is not UTF-8 is Malformed rather than absent.
    pub fn authenticate(
        &self,
        path: &str,
        method: &str,
        authorization: Option<&[u8]>,
    ) -> Result<Option<Identity>, AuthFailure> {
        if self.routes.is_exempt(path, method) {
            return Ok(None);
        }

        let raw = match authorization.and_then(|value| value.strip_prefix(BEARER_PREFIX.as_bytes())) {
            Some(raw) => raw,
            None => return Ok(None),
        };
        let token = std::str::from_utf8(raw).map_err(|_| AuthFailure::Malformed)?;

        let claims = self.verifier.verify(token)?;
        Ok(Some(Identity::from(claims)))
    }
}

const BEARER_PREFIX: &str = "Bearer ";
