//! The access gate evaluated before a gated page renders.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::context::RequestContext;
use crate::policy::AccessPolicy;
use crate::resolver::SessionResolver;

/// Properties handed to a page that passed the gate.
///
/// Gated pages take no inputs, so this is always empty and serializes as
/// `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProps {}

/// Where to send a request that may not render the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectTarget {
    /// Path the client is sent to.
    pub destination: String,
    /// Whether clients and proxies may cache the redirect.
    pub permanent: bool,
}

impl RedirectTarget {
    /// A redirect that must be re-evaluated on every request.
    #[must_use]
    pub fn temporary(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            permanent: false,
        }
    }
}

/// Outcome of the gate: redirect, or render with props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageResolution {
    /// The request carries no session.
    Redirect(RedirectTarget),
    /// The request carries a session; render the page.
    Props(PageProps),
}

impl PageResolution {
    /// Returns true if the page may render.
    #[must_use]
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Props(_))
    }
}

/// Decides whether a gated page renders for this request.
///
/// Asks `resolver` for a session on every call. A missing session yields a
/// non-permanent redirect to the policy's authentication route; a present
/// session yields empty props. A resolver failure is logged and handled
/// exactly like a missing session.
#[instrument(skip(resolver, policy, context), fields(path = %context.path()))]
pub async fn resolve_page<R>(
    resolver: &R,
    policy: &AccessPolicy,
    context: &RequestContext,
) -> PageResolution
where
    R: SessionResolver + ?Sized,
{
    let session = match resolver.resolve(context).await {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "Session lookup failed, treating request as anonymous");
            None
        }
    };

    match session {
        Some(_) => {
            debug!("Session present, rendering page");
            PageResolution::Props(PageProps::default())
        }
        None => {
            debug!(destination = %policy.auth_path(), "No session, redirecting");
            PageResolution::Redirect(policy.redirect_to_auth())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::session::Session;
    use async_trait::async_trait;
    use rootcause::Report;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Resolves a session for requests carrying `valid_cookie`.
    struct CookieResolver {
        valid_cookie: &'static str,
        calls: AtomicUsize,
    }

    impl CookieResolver {
        fn new(valid_cookie: &'static str) -> Self {
            Self {
                valid_cookie,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SessionResolver for CookieResolver {
        async fn resolve(
            &self,
            context: &RequestContext,
        ) -> Result<Option<Session>, Report<ResolveError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let matches = context
                .cookie_header()
                .is_some_and(|header| header.split("; ").any(|c| c == self.valid_cookie));
            if matches {
                Ok(Session::from_payload(
                    json!({ "user": { "email": "alice@example.com" } }),
                ))
            } else {
                Ok(None)
            }
        }
    }

    struct FailingResolver;

    #[async_trait]
    impl SessionResolver for FailingResolver {
        async fn resolve(
            &self,
            _context: &RequestContext,
        ) -> Result<Option<Session>, Report<ResolveError>> {
            Err(ResolveError::Unavailable {
                endpoint: "http://auth.local/api/auth/session".to_string(),
                details: "connection refused".to_string(),
            }
            .into())
        }
    }

    const SESSION_COOKIE: &str = "next-auth.session-token=valid";

    #[tokio::test]
    async fn no_session_cookie_redirects_to_auth() {
        let resolver = CookieResolver::new(SESSION_COOKIE);
        let policy = AccessPolicy::default();
        let context = RequestContext::new("/profiles");

        let resolution = resolve_page(&resolver, &policy, &context).await;

        match resolution {
            PageResolution::Redirect(target) => {
                assert_eq!(target.destination, "/auth");
                assert!(!target.permanent);
            }
            PageResolution::Props(_) => panic!("expected redirect"),
        }
    }

    #[tokio::test]
    async fn valid_session_renders_with_empty_props() {
        let resolver = CookieResolver::new(SESSION_COOKIE);
        let policy = AccessPolicy::default();
        let context = RequestContext::new("/profiles")
            .with_cookie_header(format!("theme=dark; {SESSION_COOKIE}"));

        let resolution = resolve_page(&resolver, &policy, &context).await;

        assert_eq!(resolution, PageResolution::Props(PageProps {}));
    }

    #[tokio::test]
    async fn unknown_session_cookie_redirects() {
        let resolver = CookieResolver::new(SESSION_COOKIE);
        let context = RequestContext::new("/profiles")
            .with_cookie_header("next-auth.session-token=forged");

        let resolution = resolve_page(&resolver, &AccessPolicy::default(), &context).await;

        assert!(!resolution.is_render());
    }

    #[tokio::test]
    async fn resolver_failure_redirects() {
        let context = RequestContext::new("/profiles").with_cookie_header(SESSION_COOKIE);

        let resolution = resolve_page(&FailingResolver, &AccessPolicy::default(), &context).await;

        assert_eq!(
            resolution,
            PageResolution::Redirect(RedirectTarget::temporary("/auth"))
        );
    }

    #[tokio::test]
    async fn redirect_follows_policy_auth_path() {
        let resolver = CookieResolver::new(SESSION_COOKIE);
        let policy = AccessPolicy::new("/login", vec!["/profiles".to_string()]);

        let resolution = resolve_page(&resolver, &policy, &RequestContext::new("/profiles")).await;

        assert_eq!(
            resolution,
            PageResolution::Redirect(RedirectTarget::temporary("/login"))
        );
    }

    #[tokio::test]
    async fn every_call_consults_the_resolver() {
        let resolver = CookieResolver::new(SESSION_COOKIE);
        let policy = AccessPolicy::default();
        let anonymous = RequestContext::new("/profiles");
        let signed_in = RequestContext::new("/profiles").with_cookie_header(SESSION_COOKIE);

        for _ in 0..3 {
            assert!(!resolve_page(&resolver, &policy, &anonymous).await.is_render());
            assert!(resolve_page(&resolver, &policy, &signed_in).await.is_render());
        }

        assert_eq!(resolver.calls(), 6);
    }

    #[test]
    fn resolution_serializes_to_page_data_shape() {
        let redirect = PageResolution::Redirect(RedirectTarget::temporary("/auth"));
        assert_eq!(
            serde_json::to_value(&redirect).expect("serialize"),
            json!({ "redirect": { "destination": "/auth", "permanent": false } })
        );

        let props = PageResolution::Props(PageProps::default());
        assert_eq!(
            serde_json::to_value(&props).expect("serialize"),
            json!({ "props": {} })
        );
    }
}
