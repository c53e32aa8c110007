//! Authentication entry point.

use leptos::prelude::*;

/// Sign-in route of the authentication service, served on the same origin.
pub const SIGN_IN_PATH: &str = "/api/auth/signin";

/// Authentication page - anonymous requests for gated pages land here.
#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-box">
                <h1>"Sign in"</h1>
                <p>"You need to sign in to view this page."</p>
                <a href=SIGN_IN_PATH rel="external" class="login-button">"Sign in"</a>
            </div>
        </div>
    }
}
