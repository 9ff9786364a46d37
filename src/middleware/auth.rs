use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::auth::{AuthFailure, Authenticator};

/// Supabase token middleware. Runs once per request.
///
/// On success the derived `Identity` (if any) is placed in the request
/// extensions and the request continues. Anonymous requests continue too;
/// whether they may reach the handler is decided by `require_identity`.
/// A rejected token ends the request here with the failure's JSON body.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthFailure> {
    // Raw bytes: a `Bearer ` value with a non-UTF-8 token must still be rejected
    let authorization = request.headers().get(AUTHORIZATION).map(|value| value.as_bytes());

    let path = request.uri().path();
    let method = request.method().as_str();

    match authenticator.authenticate(path, method, authorization) {
        Ok(Some(identity)) => {
            debug!(subject = %identity.subject, path, "Authenticated request");
            request.extensions_mut().insert(identity);
        }
        Ok(None) => {}
        Err(failure) => {
            warn!(kind = failure.kind(), path, "Rejected bearer token");
            return Err(failure);
        }
    }

    Ok(next.run(request).await)
}
