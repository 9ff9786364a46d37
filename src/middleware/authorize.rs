use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::auth::{Authenticator, Identity};
use crate::error::ApiError;

/// Rejects anonymous requests to protected routes with 403.
///
/// Uses the same route table as the token middleware, so a route is either
/// exempt for both or protected for both.
pub async fn require_identity(
    State(authenticator): State<Arc<Authenticator>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path();
    let exempt = authenticator.routes().is_exempt(path, request.method().as_str());

    if !exempt && request.extensions().get::<Identity>().is_none() {
        debug!(path, "Anonymous request to protected route");
        return Err(ApiError::forbidden("Access denied"));
    }

    Ok(next.run(request).await)
}
