//! The two fixed probes and their console rendering.
//!
//! # Design
//! `ProbeClient` holds only a `ProbeConfig` and carries no state between
//! calls. `build_*` methods produce `HttpRequest` values; the runner
//! executes them and hands the resulting `ProbeOutcome` back to
//! `Probe::render`.

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::http::{HttpMethod, HttpRequest};
use crate::outcome::ProbeOutcome;
use crate::types::MetadataRequest;

pub const HEALTH_PATH: &str = "/health";
pub const METADATA_PATH: &str = "/api/metadata";

#[derive(Debug, Clone)]
pub struct ProbeClient {
    config: ProbeConfig,
}

impl ProbeClient {
    pub fn new(mut config: ProbeConfig) -> Self {
        config.origin = config.origin.trim_end_matches('/').to_string();
        Self { config }
    }

    pub fn build_health_check(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{HEALTH_PATH}", self.config.origin),
            headers: Vec::new(),
            body: None,
            timeout: self.config.health_timeout,
        }
    }

    pub fn build_post_metadata(&self) -> Result<HttpRequest, ProbeError> {
        let payload = MetadataRequest {
            url: self.config.metadata_url.clone(),
        };
        let body = serde_json::to_string(&payload)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{METADATA_PATH}", self.config.origin),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            timeout: self.config.metadata_timeout,
        })
    }
}

/// How a probe is labeled and printed.
///
/// Only the metadata probe reports non-2xx responses on their own line; the
/// health probe folds them into its generic error line. The health probe
/// also prints its body bare, without a `body:` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub label: &'static str,
    pub distinct_http_errors: bool,
    pub labeled_body: bool,
}

impl Probe {
    pub fn health() -> Self {
        Self {
            label: HEALTH_PATH,
            distinct_http_errors: false,
            labeled_body: false,
        }
    }

    pub fn metadata() -> Self {
        Self {
            label: METADATA_PATH,
            distinct_http_errors: true,
            labeled_body: true,
        }
    }

    /// Human-readable report for one outcome. No trailing newline.
    pub fn render(&self, outcome: &ProbeOutcome) -> String {
        let label = self.label;
        match outcome {
            ProbeOutcome::Success { status, body } if self.labeled_body => {
                format!("{label} status: {status}\nbody: {body}")
            }
            ProbeOutcome::Success { status, body } => {
                format!("{label} status: {status}\n{body}")
            }
            ProbeOutcome::HttpError { status, body } if self.distinct_http_errors => {
                format!("{label} HTTPError: {status} {body}")
            }
            ProbeOutcome::HttpError { status, body } => {
                format!("{label} error: HTTP {status}: {body}")
            }
            ProbeOutcome::TransportError { kind, description } => {
                format!("{label} error: {kind}: {description}")
            }
        }
    }
}
