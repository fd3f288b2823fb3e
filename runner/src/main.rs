use probe_core::{ProbeClient, ProbeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), std::io::Error> {
    // Diagnostics go to stderr; stdout carries only the probe report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let client = ProbeClient::new(ProbeConfig::default());
    let stdout = std::io::stdout();
    check_server::run(&client, &mut stdout.lock())
}
