//! Probe runner: executes the two fixed probes and prints what happened.
//!
//! # Design
//! The probes run one after another on the calling thread. Each is fully
//! contained: a failure in the health check is reported and the metadata
//! post still runs. The only error `run` can return is a failure to write
//! the report itself.

pub mod transport;

use std::io::{self, Write};

use probe_core::{Probe, ProbeClient, ProbeOutcome, TransportErrorKind};

pub use transport::execute;

/// `GET /health` with the health timeout.
pub fn check_health(client: &ProbeClient) -> ProbeOutcome {
    execute(&client.build_health_check())
}

/// `POST /api/metadata` with the fixed JSON payload and the metadata timeout.
pub fn post_metadata(client: &ProbeClient) -> ProbeOutcome {
    match client.build_post_metadata() {
        Ok(req) => execute(&req),
        Err(err) => {
            tracing::warn!(error = %err, "could not build metadata request");
            ProbeOutcome::transport(TransportErrorKind::Other, err.to_string())
        }
    }
}

/// Run both probes, health first, writing one report per probe.
pub fn run<W: Write>(client: &ProbeClient, out: &mut W) -> io::Result<()> {
    let health = check_health(client);
    report(out, Probe::health(), &health)?;

    let metadata = post_metadata(client);
    report(out, Probe::metadata(), &metadata)?;

    out.flush()
}

fn report<W: Write>(out: &mut W, probe: Probe, outcome: &ProbeOutcome) -> io::Result<()> {
    tracing::debug!(
        probe = probe.label,
        success = outcome.is_success(),
        status = ?outcome.status(),
        "probe finished"
    );
    writeln!(out, "{}", probe.render(outcome))
}
