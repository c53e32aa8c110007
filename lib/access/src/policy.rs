//! Access policy: which pages are gated and where anonymous requests go.
//!
//! The policy is deserializable so the server can load it straight from its
//! configuration sources. Fields with defaults can be omitted.

use serde::{Deserialize, Serialize};

use crate::gate::RedirectTarget;

/// Which pages require a session, and the authentication route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// Path of the authentication entry point.
    /// Default: "/auth"
    #[serde(default = "default_auth_path")]
    auth_path: String,
    /// Page paths that require a session. Sub-paths are gated too.
    /// Default: ["/profiles"]
    #[serde(default = "default_gated_paths")]
    gated_paths: Vec<String>,
}

fn default_auth_path() -> String {
    "/auth".to_string()
}

fn default_gated_paths() -> Vec<String> {
    vec!["/profiles".to_string()]
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            auth_path: default_auth_path(),
            gated_paths: default_gated_paths(),
        }
    }
}

impl AccessPolicy {
    /// Creates a policy gating `gated_paths` behind `auth_path`.
    #[must_use]
    pub fn new(auth_path: impl Into<String>, gated_paths: Vec<String>) -> Self {
        Self {
            auth_path: auth_path.into(),
            gated_paths,
        }
    }

    /// Returns the authentication route.
    #[must_use]
    pub fn auth_path(&self) -> &str {
        &self.auth_path
    }

    /// Returns the gated page paths.
    #[must_use]
    pub fn gated_paths(&self) -> &[String] {
        &self.gated_paths
    }

    /// Returns true if a request for `path` must carry a session.
    ///
    /// The authentication route and everything under it is never gated.
    #[must_use]
    pub fn is_gated(&self, path: &str) -> bool {
        if covers(&self.auth_path, path) {
            return false;
        }
        self.gated_paths.iter().any(|gated| covers(gated, path))
    }

    /// The redirect anonymous requests receive.
    #[must_use]
    pub fn redirect_to_auth(&self) -> RedirectTarget {
        RedirectTarget::temporary(self.auth_path.clone())
    }
}

/// True if `path` equals `prefix` or lies beneath it.
///
/// Compares non-empty segments, so `//profiles` and `/profiles/` match
/// `/profiles` the same way the router would.
fn covers(prefix: &str, path: &str) -> bool {
    let mut path_segments = segments(path);
    segments(prefix).all(|expected| path_segments.next() == Some(expected))
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
