//! Request ID tracking for observability.
//!
//! Every request gets an ID: either the one supplied by the client in the
//! `x-request-id` header or a freshly generated UUID. The ID is stored in the
//! request extensions for handlers to use and echoed back on the response so
//! clients and the gateway can correlate log lines across hops.

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderMap, HeaderValue, StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use log::info;
use uuid::Uuid;

/// Header used to carry the request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored in request extensions.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    /// Returns the request ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Extractor so handlers can take `request_id: RequestId` directly.
impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestId>()
            .cloned()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "Request ID missing"))
    }
}

/// Reuses the client-supplied request ID or generates a new UUID v4.
fn get_or_generate_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Middleware that attaches a request ID, logs the request on both sides of
/// the handler, and echoes the ID on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = get_or_generate_request_id(request.headers());
    request.extensions_mut().insert(RequestId(request_id.clone()));

    let method = request.method().clone();
    let uri = request.uri().clone();
    info!("[{request_id}] {method} {uri}");

    let response = next.run(request).await;

    let (mut parts, body) = response.into_parts();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }
    crate::metrics::http_requests_total(method.as_str(), parts.status.as_u16());
    info!("[{request_id}] {method} {uri} {}", parts.status);

    Response::from_parts(parts, body)
}
