use std::fmt;
use url::Url;
use crate::utils::error::ProbeError;

/// The address of the WebSocket server the probe talks to.
///
/// Wraps a parsed URL whose scheme is guaranteed to be `ws` or `wss` and
/// which names a host. Fixed at construction; immutable for the run.
#[derive(Debug, Clone)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Parses and validates an endpoint URL.
    ///
    /// # Errors
    /// Returns a `ProbeError::InvalidEndpoint` if the URL does not parse,
    /// uses a scheme other than `ws`/`wss`, or names no host.
    pub fn parse(raw: &str) -> Result<Self, ProbeError> {
        let url = Url::parse(raw)
            .map_err(|e| ProbeError::InvalidEndpoint(format!("{}: {}", raw, e)))?;

        match url.scheme() {
            "ws" | "wss" => {}
            other => {
                return Err(ProbeError::InvalidEndpoint(format!(
                    "unsupported scheme `{}` in {}",
                    other, raw
                )));
            }
        }

        if url.host_str().is_none() {
            return Err(ProbeError::InvalidEndpoint(format!(
                "no host in {}",
                raw
            )));
        }

        Ok(Self(url))
    }

    /// The endpoint as the string handed to the transport.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The underlying parsed URL.
    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
