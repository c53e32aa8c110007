//! Session gate middleware for Axum.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use profiles_access::{PageResolution, RedirectTarget, RequestContext, resolve_page};
use std::sync::Arc;

use super::AppState;

/// `Cache-Control` set on every gated response.
pub const GATED_CACHE_CONTROL: &str = "private, no-cache, no-store, max-age=0, must-revalidate";

/// Builds the resolver's view of a request from its path and headers.
///
/// Multiple `Cookie` headers are joined the way HTTP/2 clients split them.
/// Headers that are not visible ASCII are dropped.
pub fn request_context(path: &str, headers: &HeaderMap) -> RequestContext {
    let cookies = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| match value.to_str() {
            Ok(cookie) => Some(cookie),
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "Dropping non-ASCII Cookie header");
                None
            }
        })
        .collect::<Vec<_>>()
        .join("; ");

    RequestContext::new(path).with_cookie_header(cookies)
}

/// Runs the access gate in front of gated pages.
///
/// Requests for pages outside the policy pass straight through. For gated
/// pages, anonymous requests get a temporary redirect to the authentication
/// route and requests with a session continue to the page with empty
/// `PageProps` in their extensions.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    if !state.policy.is_gated(&path) {
        return next.run(request).await;
    }

    let context = request_context(&path, request.headers());
    let resolution = resolve_page(state.resolver.as_ref(), &state.policy, &context).await;

    let response = match resolution {
        PageResolution::Redirect(target) => {
            tracing::info!(
                path = %path,
                destination = %target.destination,
                "Redirecting anonymous request"
            );
            redirect_response(&target)
        }
        PageResolution::Props(props) => {
            request.extensions_mut().insert(props);
            next.run(request).await
        }
    };

    no_store(response)
}

/// Converts a redirect target into an HTTP redirect.
///
/// Non-permanent targets use 307 so clients re-request the page every time.
pub fn redirect_response(target: &RedirectTarget) -> Response {
    if target.permanent {
        Redirect::permanent(&target.destination).into_response()
    } else {
        Redirect::temporary(&target.destination).into_response()
    }
}

/// Marks a response as uncacheable by clients and proxies.
pub(crate) fn no_store(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(GATED_CACHE_CONTROL),
    );
    response
}
