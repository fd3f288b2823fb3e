//! Error types for the probe core.
//!
//! Only request construction can fail inside the core. Everything that goes
//! wrong on the wire is a `ProbeOutcome`, not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
