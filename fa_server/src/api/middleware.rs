//! Caller identity middleware.
//!
//! The fronting gateway authenticates callers and forwards the resulting
//! principal in the `x-caller-identity` header. Routes that act on behalf of
//! a caller sit behind this middleware, which requires the header and makes
//! the parsed [`Identity`] available as a request extension. The value is
//! opaque to the server: no format is assumed beyond non-emptiness.

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use fire_arena::Identity;

use super::ErrorResponse;

/// Header carrying the opaque caller identity.
pub const CALLER_IDENTITY_HEADER: &str = "x-caller-identity";

/// Rejects requests without a usable caller identity header.
///
/// Accepted requests carry the caller's [`Identity`] in their extensions, so
/// handlers can take it as `Extension<Identity>`. Requests with a missing,
/// empty, or non-UTF-8 header are rejected with `401 Unauthorized` and the
/// standard error body before any handler runs.
pub async fn identity_middleware(
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let caller = request
        .headers()
        .get(CALLER_IDENTITY_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(Identity::from);

    match caller {
        Some(identity) => {
            request.extensions_mut().insert(identity);
            Ok(next.run(request).await)
        }
        None => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Caller identity required".to_string(),
                code: "identity_required".to_string(),
            }),
        )),
    }
}
