//! Application router: Leptos pages behind the session gate.

use axum::{Router, extract::FromRef, routing::get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use leptos_meta::MetaTags;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::app::App;
use crate::auth::{self, AppState};

/// Combined state for the application.
#[derive(Clone)]
pub struct CombinedState {
    leptos_options: LeptosOptions,
    app_state: Arc<AppState>,
}

impl FromRef<CombinedState> for LeptosOptions {
    fn from_ref(state: &CombinedState) -> Self {
        state.leptos_options.clone()
    }
}

impl FromRef<CombinedState> for Arc<AppState> {
    fn from_ref(state: &CombinedState) -> Self {
        state.app_state.clone()
    }
}

/// Builds the application router.
///
/// Every route, including the Leptos fallback, sits behind
/// `require_session`, so a gated page cannot render without a session
/// whichever handler ends up matching the path.
pub fn router(app_state: Arc<AppState>, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_pkg = format!("{}/{}", leptos_options.site_root, leptos_options.site_pkg_dir);

    let combined_state = CombinedState {
        leptos_options: leptos_options.clone(),
        app_state: app_state.clone(),
    };

    Router::new()
        // Gate decisions for client-side navigation
        .route("/_data/{*page}", get(auth::page_data))
        .leptos_routes(&combined_state, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<CombinedState, _>(
            shell,
        ))
        .nest_service("/pkg", ServeDir::new(site_pkg))
        // Session gate in front of every gated page
        .layer(axum::middleware::from_fn_with_state(
            app_state,
            auth::require_session,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(combined_state)
}

/// HTML document wrapping the application.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/profiles.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{HeaderValue, Request, StatusCode, header},
        response::Response,
    };
    use profiles_access::{AccessPolicy, RequestContext, ResolveError, Session, SessionResolver};
    use rootcause::Report;
    use serde_json::json;
    use tower::ServiceExt;

    const VALID_COOKIE: &str = "next-auth.session-token=valid";

    struct CookieResolver;

    #[async_trait]
    impl SessionResolver for CookieResolver {
        async fn resolve(
            &self,
            context: &RequestContext,
        ) -> Result<Option<Session>, Report<ResolveError>> {
            let signed_in = context
                .cookie_header()
                .is_some_and(|cookies| cookies.split("; ").any(|c| c == VALID_COOKIE));
            if signed_in {
                Ok(Session::from_payload(json!({ "user": { "name": "Alice" } })))
            } else {
                Ok(None)
            }
        }
    }

    fn app() -> Router {
        let state = Arc::new(AppState::new(
            Arc::new(CookieResolver),
            AccessPolicy::default(),
        ));
        let options = LeptosOptions::builder().output_name("profiles").build();
        router(state, options)
    }

    async fn send(uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        app()
            .oneshot(builder.body(Body::empty()).expect("request"))
            .await
            .expect("response")
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf8")
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn anonymous_requests_never_reach_the_profiles_page() {
        for uri in ["/profiles", "/profiles/", "//profiles"] {
            let response = send(uri, None).await;

            assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
            assert_eq!(
                response.headers().get(header::LOCATION),
                Some(&HeaderValue::from_static("/auth")),
                "{uri}"
            );
            assert!(!body_text(response).await.contains("text-white text-4xl"), "{uri}");
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn signed_in_request_renders_the_profiles_page() {
        let response = send("/profiles", Some(VALID_COOKIE)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some(auth::GATED_CACHE_CONTROL)
        );
        let body = body_text(response).await;
        assert!(body.contains(r#"<p class="text-white text-4xl">Profiles</p>"#));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn auth_page_renders_without_a_session() {
        let response = send("/auth", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Sign in"));
    }
}
