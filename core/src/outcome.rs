//! Discriminated result of a single probe.
//!
//! # Design
//! A probe never raises. Whatever happens between building the request and
//! reading the body ends up in one of three variants, and the caller decides
//! how to print it.

use std::fmt;

use crate::http::HttpResponse;

/// Coarse class of a failure that produced no usable response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    ConnectionRefused,
    HostNotFound,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::ConnectionRefused => "connection refused",
            TransportErrorKind::HostNotFound => "host not found",
            TransportErrorKind::Other => "transport error",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with a 2xx status.
    Success { status: u16, body: String },

    /// The server answered, but with a non-2xx status.
    HttpError { status: u16, body: String },

    /// No response could be read: connect failure, timeout, broken body.
    TransportError {
        kind: TransportErrorKind,
        description: String,
    },
}

impl ProbeOutcome {
    /// Classify a complete response by its status code. Body is kept verbatim.
    pub fn from_response(response: HttpResponse) -> Self {
        if response.is_success() {
            ProbeOutcome::Success {
                status: response.status,
                body: response.body,
            }
        } else {
            ProbeOutcome::HttpError {
                status: response.status,
                body: response.body,
            }
        }
    }

    pub fn transport(kind: TransportErrorKind, description: impl Into<String>) -> Self {
        ProbeOutcome::TransportError {
            kind,
            description: description.into(),
        }
    }

    /// Status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Success { status, .. } | ProbeOutcome::HttpError { status, .. } => {
                Some(*status)
            }
            ProbeOutcome::TransportError { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }
}
