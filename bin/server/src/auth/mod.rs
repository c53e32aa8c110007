//! Session gating for the profiles server.
//!
//! This module provides:
//! - `HttpSessionResolver`, which asks the authentication service whether a
//!   request carries a session
//! - The `require_session` middleware that runs the access gate before a
//!   gated page renders
//! - The page-data route exposing the gate's decision as JSON
//!
//! # Gate Model
//!
//! The server never validates session cookies itself. It forwards the
//! request's cookies to the authentication service and only observes whether
//! a session came back. Gated responses are never cacheable, so the check is
//! repeated on every request.

pub mod middleware;
pub mod resolver;
pub mod routes;

use profiles_access::{AccessPolicy, SessionResolver};
use std::sync::Arc;

pub use middleware::{GATED_CACHE_CONTROL, request_context, require_session};
pub use resolver::HttpSessionResolver;
pub use routes::page_data;

/// Shared application state.
pub struct AppState {
    /// Session resolver consulted by the gate.
    pub resolver: Arc<dyn SessionResolver>,
    /// Gated pages and the authentication route.
    pub policy: AccessPolicy,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(resolver: Arc<dyn SessionResolver>, policy: AccessPolicy) -> Self {
        Self { resolver, policy }
    }
}
