//! Error types for the access crate.
//!
//! Errors are designed for layered context using rootcause. Resolvers return
//! `Report<ResolveError>`; the gate logs them and never lets them escape.

use std::fmt;

/// Errors from resolving a session with the authentication service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The resolver could not be constructed.
    ClientSetup { details: String },
    /// The authentication service could not be reached or timed out.
    Unavailable { endpoint: String, details: String },
    /// The authentication service answered with a non-success status.
    UnexpectedStatus { endpoint: String, status: u16 },
    /// The authentication service answered with a body that is not JSON.
    InvalidPayload { details: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientSetup { details } => {
                write!(f, "failed to set up session resolver: {details}")
            }
            Self::Unavailable { endpoint, details } => {
                write!(f, "session endpoint '{endpoint}' unavailable: {details}")
            }
            Self::UnexpectedStatus { endpoint, status } => {
                write!(f, "session endpoint '{endpoint}' returned status {status}")
            }
            Self::InvalidPayload { details } => {
                write!(f, "invalid session payload: {details}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}
