//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route.

pub mod auth;
pub mod home;
pub mod profiles;

// Re-export all page components for convenient access
pub use auth::AuthPage;
pub use home::HomePage;
pub use profiles::ProfilesPage;
