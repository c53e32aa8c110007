//! The session value observed by the access gate.
//!
//! Sessions are created and owned by the external authentication service.
//! This crate never builds one from scratch; it only wraps what the service
//! hands back and checks that something was handed back at all.

use serde::Serialize;
use serde_json::{Map, Value};

/// An authenticated session as reported by the authentication service.
///
/// The payload is kept verbatim and never interpreted. Presence of a
/// `Session` is the only fact the gate relies on.
///
/// Only `from_payload` builds a session, so an empty payload can never
/// become one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Session(Map<String, Value>);

impl Session {
    /// Builds a session from the service's JSON payload.
    ///
    /// Returns `None` when the payload carries no session: `null`, a value
    /// that is not an object, or an empty object.
    #[must_use]
    pub fn from_payload(payload: Value) -> Option<Self> {
        match payload {
            Value::Object(fields) if !fields.is_empty() => Some(Self(fields)),
            _ => None,
        }
    }

    /// Returns the raw payload.
    #[must_use]
    pub fn payload(&self) -> &Map<String, Value> {
        &self.0
    }
}
