//! The session resolution capability injected into the gate.

use async_trait::async_trait;
use rootcause::Report;

use crate::context::RequestContext;
use crate::error::ResolveError;
use crate::session::Session;

/// Resolves the session carried by a request, if any.
///
/// Implementations talk to whatever owns sessions (an authentication
/// service, a cookie store). `Ok(None)` means the request is anonymous.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Resolves the session for `context`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session owner could not answer.
    async fn resolve(&self, context: &RequestContext)
    -> Result<Option<Session>, Report<ResolveError>>;
}
