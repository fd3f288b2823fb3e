//! Payloads sent by the probes.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/metadata`: a single `url` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataRequest {
    pub url: String,
}
