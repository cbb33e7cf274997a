use std::time::Duration;
use thiserror::Error;

/// Represents the failures a probe run can surface.
///
/// Each variant names the step that failed so that the one-line report
/// printed on exit identifies where the round trip broke down.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Represents an error in the probe configuration.
    ///
    /// This occurs when the environment cannot be loaded or a setting
    /// fails validation.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Indicates that the endpoint URL is unusable.
    ///
    /// The URL failed to parse, carries a scheme other than `ws`/`wss`,
    /// or names no host.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Represents a failure to establish the connection.
    ///
    /// The endpoint was unreachable or the WebSocket handshake was rejected.
    #[error("Connection error: {0}")]
    ConnectionFailure(String),

    /// Indicates that the connection attempt exceeded its bound.
    #[error("Connection timed out after {}s", .0.as_secs())]
    ConnectTimeout(Duration),

    /// Represents a failure while transmitting the outbound message.
    #[error("Send error: {0}")]
    SendFailure(String),

    /// Indicates that the connection closed or errored before a response
    /// arrived.
    #[error("Receive error: {0}")]
    ReceiveFailure(String),

    /// Indicates that no response arrived within the configured bound.
    #[error("No response within {}s", .0.as_secs())]
    ReceiveTimeout(Duration),
}
