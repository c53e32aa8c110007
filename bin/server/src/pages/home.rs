//! Home page component.

use leptos::prelude::*;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"profiles"</h1>
            <a href="/profiles" rel="external" class="cta-button">"Go to profiles"</a>
        </div>
    }
}
