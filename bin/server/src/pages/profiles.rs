//! Profiles page component.
//!
//! The page is gated: the server only lets a request reach this component
//! once the session gate has resolved a session for it.

use leptos::prelude::*;

/// The profiles page component.
#[component]
pub fn ProfilesPage() -> impl IntoView {
    view! {
        <div>
            <p class="text-white text-4xl">"Profiles"</p>
        </div>
    }
}
