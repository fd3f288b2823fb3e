//! I/O-free core of the server probe.
//!
//! # Overview
//! Builds `HttpRequest` values for the two fixed probes and turns the
//! results into `ProbeOutcome` values without touching the network
//! (host-does-IO pattern). The runner crate executes the round-trip.
//!
//! # Design
//! - `ProbeClient` is stateless. It holds only a `ProbeConfig`.
//! - Every probe ends in a `ProbeOutcome`: success, HTTP error status, or
//!   transport failure. Callers print outcomes, they never propagate them.
//! - Rendering lives next to the outcome so the console format is testable
//!   without a server.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod outcome;
pub mod types;

pub use client::{Probe, ProbeClient};
pub use config::ProbeConfig;
pub use error::ProbeError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::{ProbeOutcome, TransportErrorKind};
pub use types::MetadataRequest;
