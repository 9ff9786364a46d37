use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use serde::Serialize;

use super::Claims;
use crate::error::ApiError;

/// The caller, as established by a verified bearer token.
///
/// Lives in the request's extensions for the duration of one request. Handlers
/// take it as an extractor; `Option<Identity>` works for routes that also
/// serve anonymous callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Email when the token carries a non-empty one, otherwise the subject.
    pub name: String,
    /// Supabase user id (`sub`), which is also the profile id.
    pub subject: String,
    /// Zero or one `ROLE_*` authority.
    pub authorities: Vec<String>,
}

impl Identity {
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        let name = match claims.email {
            Some(email) if !email.is_empty() => email,
            _ => claims.sub.clone(),
        };

        let authorities = match claims.role {
            Some(role) if !role.is_empty() => vec![format!("ROLE_{}", role.to_uppercase())],
            _ => Vec::new(),
        };

        Self {
            name,
            subject: claims.sub,
            authorities,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or_else(|| ApiError::forbidden("Access denied"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(email: Option<&str>, role: Option<&str>) -> Claims {
        Claims {
            sub: "u1".to_string(),
            email: email.map(str::to_string),
            role: role.map(str::to_string),
            exp: None,
            iat: None,
        }
    }

    #[test]
    fn email_becomes_name() {
        let identity = Identity::from(claims(Some("a@b.com"), Some("organizer")));
        assert_eq!(identity.name, "a@b.com");
        assert_eq!(identity.subject, "u1");
        assert_eq!(identity.authorities, vec!["ROLE_ORGANIZER"]);
        assert!(identity.has_authority("ROLE_ORGANIZER"));
    }

    #[test]
    fn missing_or_empty_email_falls_back_to_subject() {
        assert_eq!(Identity::from(claims(None, None)).name, "u1");
        assert_eq!(Identity::from(claims(Some(""), None)).name, "u1");
    }

    #[test]
    fn missing_or_empty_role_grants_nothing() {
        assert!(Identity::from(claims(Some("a@b.com"), None)).authorities.is_empty());
        assert!(Identity::from(claims(Some("a@b.com"), Some(""))).authorities.is_empty());
    }

    #[test]
    fn role_is_upper_cased() {
        let identity = Identity::from(claims(None, Some("Admin")));
        assert_eq!(identity.authorities, vec!["ROLE_ADMIN"]);
    }
}
