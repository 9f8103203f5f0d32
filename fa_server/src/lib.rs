//! # FA Server
//!
//! REST server for the Fire Arena tournament platform. The HTTP surface is a
//! thin shell around [`fire_arena::Arena`]; every request handler delegates to
//! the facade and translates its errors into status codes and JSON bodies.
//!
//! Callers are identified by an opaque `x-caller-identity` header set by the
//! fronting gateway. The server never authenticates that value, it only
//! requires it to be present on routes that act on behalf of a caller.

/// REST API routes, handlers, and middleware.
pub mod api;
/// Server configuration from environment variables and CLI flags.
pub mod config;
/// Prometheus metrics exporter and counters.
pub mod metrics;
