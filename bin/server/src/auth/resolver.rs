//! Session lookup against the authentication service.

use async_trait::async_trait;
use profiles_access::{RequestContext, ResolveError, Session, SessionResolver};
use reqwest::header::{ACCEPT, COOKIE};
use rootcause::Report;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::SessionConfig;

/// Resolves sessions by calling the authentication service's session
/// endpoint with the incoming request's cookies.
#[derive(Debug, Clone)]
pub struct HttpSessionResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSessionResolver {
    /// Creates a resolver for the configured session endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &SessionConfig) -> Result<Self, Report<ResolveError>> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ResolveError::ClientSetup {
                details: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl SessionResolver for HttpSessionResolver {
    #[instrument(skip(self, context), fields(endpoint = %self.endpoint, path = %context.path()))]
    async fn resolve(
        &self,
        context: &RequestContext,
    ) -> Result<Option<Session>, Report<ResolveError>> {
        // Without cookies the service can only answer "no session".
        let Some(cookie_header) = context.cookie_header() else {
            debug!("Request carries no cookies");
            return Ok(None);
        };

        let response = self
            .client
            .get(&self.endpoint)
            .header(COOKIE, cookie_header)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ResolveError::Unavailable {
                endpoint: self.endpoint.clone(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::UnexpectedStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        let payload: serde_json::Value =
            response.json().await.map_err(|e| ResolveError::InvalidPayload {
                details: e.to_string(),
            })?;

        let session = Session::from_payload(payload);
        debug!(has_session = session.is_some(), "Session lookup complete");
        Ok(session)
    }
}
