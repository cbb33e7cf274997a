//! # WebSocket Smoke-Test Probe
//!
//! This binary opens a single WebSocket connection, sends one text message,
//! waits for exactly one response, prints both, and exits.
//!
//! ## Features
//! - One round trip per invocation, no retry
//! - Environment-based configuration loading
//! - Bounded connect and receive waits
//! - Graceful abort on Ctrl+C
//!
//! ## Dependencies
//! - `tokio` for asynchronous runtime
//! - `tokio-tungstenite` for the WebSocket transport
//! - `dotenv` for environment configuration
//! - `tracing` for logging

use tokio::signal;
use tracing::{error, info};
use ws_probe::{config, probe::ProbeRunner};

/// Entry point for the probe.
///
/// Initializes logging, loads configuration from the environment, and runs
/// one round trip against the configured endpoint.
///
/// # Errors
/// Returns an error if configuration validation fails or if any step of the
/// round trip (connect, send, receive) fails; the process then exits non-zero.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let _ = dotenv::dotenv();
    // Logs go to stderr; stdout carries only the two report lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = config::ProbeConfig::from_env()?;
    config.validate()?;

    let runner = ProbeRunner::from_config(&config)?;

    // Race the round trip against a shutdown signal
    tokio::select! {
        result = runner.run() => {
            match result {
                Ok(report) => {
                    info!(sent = %report.sent, received = %report.received, "probe completed");
                    Ok(())
                }
                Err(e) => {
                    error!("Probe failed: {}", e);
                    Err(e.into())
                }
            }
        }
        _ = shutdown_signal() => {
            error!("Interrupted before the round trip completed");
            std::process::exit(1);
        }
    }
}

/// Listens for a shutdown signal (Ctrl+C) so an unresponsive endpoint never
/// traps the probe.
///
/// Dropping the in-flight connection on this path still tears down the
/// underlying stream.
async fn shutdown_signal() {
    signal::ctrl_c().await.expect("Failed to listen for shutdown signal");
}
