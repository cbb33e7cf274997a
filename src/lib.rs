//! A minimal WebSocket smoke-test client.
//!
//! Connects to a configured endpoint, performs one send/receive round trip,
//! reports both payloads on stdout, and terminates. The connection is closed
//! on every exit path.

pub mod config;
pub mod probe;
pub mod utils;

pub use config::ProbeConfig;
pub use probe::{Endpoint, ProbeReport, ProbeRunner};
pub use utils::error::ProbeError;
