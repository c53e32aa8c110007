//! Main Leptos application component and routing.

use crate::pages::{AuthPage, HomePage, ProfilesPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="profiles"/>
        <Router>
            <Header/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/auth") view=AuthPage/>
                    <Route path=path!("/profiles") view=ProfilesPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Header component with navigation.
///
/// Gated pages are linked with `rel="external"` so that every visit is a
/// full request and passes through the server-side session gate.
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"profiles"</a>
            </div>
            <nav class="header-right">
                <a href="/profiles" rel="external">"Profiles"</a>
            </nav>
        </header>
    }
}
