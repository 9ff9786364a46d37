// auth/routes.rs - Route exemption table
//
// Decides, from path and method alone, whether a request may skip
// authentication. Shared by the token authenticator and the authorization
// gate so the two can never disagree.

/// Static exemption rules. Matching is string prefix/equality on the request
/// path, no pattern syntax. GET-only prefixes match on whole path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    /// Any method, any path starting with one of these.
    public_prefixes: &'static [&'static str],
    /// Any method, exact path match.
    public_paths: &'static [&'static str],
    /// `GET` only, the prefix itself or any path below it.
    read_only_prefixes: &'static [&'static str],
}

const FESTIFY_PUBLIC_PREFIXES: &[&str] = &["/actuator"];

const FESTIFY_PUBLIC_PATHS: &[&str] = &["/api/hello", "/api/health"];

const FESTIFY_READ_ONLY_PREFIXES: &[&str] = &[
    "/api/colleges",
    "/api/categories",
    "/api/events",
    "/api/reviews",
    "/api/registrations",
    "/api/teams",
    "/api/tickets",
    "/api/payments",
];

impl RouteTable {
    pub const fn new(
        public_prefixes: &'static [&'static str],
        public_paths: &'static [&'static str],
        read_only_prefixes: &'static [&'static str],
    ) -> Self {
        Self {
            public_prefixes,
            public_paths,
            read_only_prefixes,
        }
    }

    /// The table the Festify API is served with.
    pub const fn festify() -> Self {
        Self::new(
            FESTIFY_PUBLIC_PREFIXES,
            FESTIFY_PUBLIC_PATHS,
            FESTIFY_READ_ONLY_PREFIXES,
        )
    }

    pub fn is_exempt(&self, path: &str, method: &str) -> bool {
        if self.public_prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }

        if self.public_paths.iter().any(|exact| path == *exact) {
            return true;
        }

        method.eq_ignore_ascii_case("GET")
            && self.read_only_prefixes.iter().any(|prefix| is_at_or_below(path, prefix))
    }
}

/// `/api/events` and `/api/events/...`, but not `/api/eventsfoo`.
fn is_at_or_below(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::festify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exempt(method: &str, path: &str) -> bool {
        RouteTable::festify().is_exempt(path, method)
    }

    #[test]
    fn read_access_to_resources_is_public() {
        assert!(exempt("GET", "/api/events/123"));
        assert!(exempt("GET", "/api/events"));
        assert!(exempt("GET", "/api/colleges"));
        assert!(exempt("GET", "/api/categories/abc"));
        assert!(exempt("GET", "/api/reviews/event/1"));
        assert!(exempt("GET", "/api/registrations/user/1"));
        assert!(exempt("GET", "/api/teams"));
        assert!(exempt("GET", "/api/tickets/event/1"));
        assert!(exempt("GET", "/api/payments/transaction/tx"));
    }

    #[test]
    fn method_comparison_ignores_case() {
        assert!(exempt("get", "/api/events"));
        assert!(exempt("Get", "/api/teams/1"));
    }

    #[test]
    fn mutations_require_authentication() {
        assert!(!exempt("POST", "/api/events"));
        assert!(!exempt("PUT", "/api/events/123"));
        assert!(!exempt("DELETE", "/api/colleges/1"));
        assert!(!exempt("PATCH", "/api/tickets/1"));
    }

    #[test]
    fn unlisted_resources_require_authentication_even_for_get() {
        assert!(!exempt("GET", "/api/profiles"));
        assert!(!exempt("GET", "/api/team-members"));
        assert!(!exempt("GET", "/api/auth/me"));
        assert!(!exempt("GET", "/"));
    }

    #[test]
    fn read_only_prefix_matches_whole_segments() {
        assert!(exempt("GET", "/api/events/"));
        assert!(!exempt("GET", "/api/eventsfoo"));
        assert!(!exempt("GET", "/api/teamsters/1"));
        assert!(!exempt("GET", "/api/colleges-admin"));
    }

    #[test]
    fn operational_and_utility_paths_are_always_public() {
        assert!(exempt("GET", "/actuator/health"));
        assert!(exempt("POST", "/actuator/anything"));
        assert!(exempt("GET", "/api/hello"));
        assert!(exempt("POST", "/api/hello"));
        assert!(exempt("GET", "/api/health"));
    }

    #[test]
    fn utility_paths_match_exactly() {
        assert!(!exempt("GET", "/api/hello/world"));
        assert!(!exempt("POST", "/api/healthz"));
    }
}
