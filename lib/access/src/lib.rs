//! Session-gated page access for the profiles web application.
//!
//! This crate provides:
//! - The opaque `Session` value resolved per request
//! - The `RequestContext` a resolver inspects
//! - The injected `SessionResolver` capability
//! - The `AccessPolicy` naming gated pages and the authentication route
//! - `resolve_page`, the two-outcome gate evaluated before a page renders
//!
//! # Access Model
//!
//! A gated page renders only when the request carries a session. Anything
//! else, including a resolver that fails, produces a non-permanent redirect
//! to the authentication route. Nothing is cached between requests.
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use profiles_access::{
//!     AccessPolicy, PageResolution, RequestContext, ResolveError, Session, SessionResolver,
//!     resolve_page,
//! };
//! use rootcause::Report;
//!
//! struct Anonymous;
//!
//! #[async_trait]
//! impl SessionResolver for Anonymous {
//!     async fn resolve(
//!         &self,
//!         _context: &RequestContext,
//!     ) -> Result<Option<Session>, Report<ResolveError>> {
//!         Ok(None)
//!     }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let policy = AccessPolicy::default();
//! let resolution = resolve_page(&Anonymous, &policy, &RequestContext::new("/profiles")).await;
//!
//! match resolution {
//!     PageResolution::Redirect(target) => {
//!         assert_eq!(target.destination, "/auth");
//!         assert!(!target.permanent);
//!     }
//!     PageResolution::Props(_) => unreachable!("anonymous requests never render"),
//! }
//! # });
//! ```

pub mod context;
pub mod error;
pub mod gate;
pub mod policy;
pub mod resolver;
pub mod session;

// Re-export main types at crate root
pub use context::RequestContext;
pub use error::ResolveError;
pub use gate::{PageProps, PageResolution, RedirectTarget, resolve_page};
pub use policy::AccessPolicy;
pub use resolver::SessionResolver;
pub use session::Session;
