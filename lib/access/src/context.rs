//! Per-request context handed to a session resolver.

/// The parts of an incoming request a resolver needs.
///
/// Only the request path and the raw `Cookie` header are carried. The
/// header is forwarded untouched; parsing or validating session cookies is
/// left to the authentication service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    path: String,
    cookie_header: Option<String>,
}

impl RequestContext {
    /// Creates a context for a request to `path` with no cookies.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cookie_header: None,
        }
    }

    /// Attaches the request's `Cookie` header.
    ///
    /// Blank headers are dropped so that "no cookies" has one representation.
    #[must_use]
    pub fn with_cookie_header(mut self, header: impl Into<String>) -> Self {
        let header = header.into();
        self.cookie_header = if header.trim().is_empty() {
            None
        } else {
            Some(header)
        };
        self
    }

    /// Returns the request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the raw `Cookie` header, if the request carried one.
    #[must_use]
    pub fn cookie_header(&self) -> Option<&str> {
        self.cookie_header.as_deref()
    }
}
