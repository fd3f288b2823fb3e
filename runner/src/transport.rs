//! Blocking HTTP execution of core request descriptors.
//!
//! # Design
//! Every call gets a fresh `ureq` agent, so no connection outlives its probe.
//! Status-as-error is disabled: non-2xx responses come back as data and the
//! core classifies them. Anything else `ureq` reports becomes a
//! `TransportError` outcome; this module never returns `Err`.

use std::io;
use std::time::Instant;

use probe_core::{HttpMethod, HttpRequest, HttpResponse, ProbeOutcome, TransportErrorKind};

/// Run one request to completion or timeout.
pub fn execute(req: &HttpRequest) -> ProbeOutcome {
    let started = Instant::now();
    tracing::debug!(method = %req.method, url = %req.url, timeout = ?req.timeout, "sending probe");

    match send(req) {
        Ok(response) => {
            tracing::debug!(
                url = %req.url,
                status = response.status,
                elapsed = ?started.elapsed(),
                "probe answered"
            );
            ProbeOutcome::from_response(response)
        }
        Err(err) => {
            let kind = classify(&err);
            tracing::warn!(url = %req.url, %kind, error = %err, elapsed = ?started.elapsed(), "probe failed");
            ProbeOutcome::transport(kind, err.to_string())
        }
    }
}

fn send(req: &HttpRequest) -> Result<HttpResponse, ureq::Error> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(req.timeout))
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => {
            let mut builder = agent.get(&req.url);
            for (name, value) in &req.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.call()?
        }
        HttpMethod::Post => {
            let mut builder = agent.post(&req.url);
            for (name, value) in &req.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            match &req.body {
                Some(body) => builder.send(body.as_bytes())?,
                None => builder.send_empty()?,
            }
        }
    };

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    // Decoded lossily so a non-UTF-8 error page still reaches the status branch.
    let bytes = response.body_mut().read_to_vec()?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

/// Map a `ureq` failure onto the coarse kinds the report distinguishes.
pub fn classify(err: &ureq::Error) -> TransportErrorKind {
    match err {
        ureq::Error::Timeout(_) => TransportErrorKind::Timeout,
        ureq::Error::HostNotFound => TransportErrorKind::HostNotFound,
        ureq::Error::ConnectionFailed => TransportErrorKind::ConnectionRefused,
        ureq::Error::Io(e) if is_lookup_failure(e) => TransportErrorKind::HostNotFound,
        ureq::Error::Io(e) => match e.kind() {
            io::ErrorKind::ConnectionRefused => TransportErrorKind::ConnectionRefused,
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TransportErrorKind::Timeout,
            _ => TransportErrorKind::Other,
        },
        _ => TransportErrorKind::Other,
    }
}

/// `ureq` resolves through `ToSocketAddrs`, whose resolver errors carry no
/// dedicated `ErrorKind`; only the message identifies them.
fn is_lookup_failure(err: &io::Error) -> bool {
    err.to_string().contains("failed to lookup address")
}
