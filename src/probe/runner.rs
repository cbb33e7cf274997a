use std::time::Duration;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::{timeout, timeout_at, Instant};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, instrument};
use tungstenite::Message;

use crate::config::ProbeConfig;
use crate::probe::endpoint::Endpoint;
use crate::utils::error::ProbeError;

/// The single connection a probe run owns.
type Connection = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// What a successful round trip exchanged.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// The payload transmitted to the server.
    pub sent: String,
    /// The payload the server answered with.
    pub received: String,
}

/// Performs one send/receive round trip against a WebSocket endpoint.
///
/// The runner opens exactly one connection, sends one text message, waits
/// for exactly one response, and closes the connection on every exit path.
/// Nothing is retried; any failure aborts the run.
#[derive(Debug)]
pub struct ProbeRunner {
    endpoint: Endpoint,
    message: String,
    connect_timeout: Duration,
    receive_timeout: Duration,
}

impl ProbeRunner {
    /// Builds a runner over an already-validated endpoint.
    pub fn new(
        endpoint: Endpoint,
        message: String,
        connect_timeout: Duration,
        receive_timeout: Duration,
    ) -> Self {
        Self {
            endpoint,
            message,
            connect_timeout,
            receive_timeout,
        }
    }

    /// Builds a runner from a loaded configuration.
    ///
    /// # Errors
    /// Returns a `ProbeError::InvalidEndpoint` if the configured URL is unusable.
    pub fn from_config(config: &ProbeConfig) -> Result<Self, ProbeError> {
        Ok(Self::new(
            Endpoint::parse(&config.url)?,
            config.message.clone(),
            config.connect_timeout(),
            config.receive_timeout(),
        ))
    }

    /// Runs the probe: connect, send, receive, close.
    ///
    /// On the success path this prints the two report lines
    /// (`Sent message: ...` and `Received response: ...`) to stdout.
    ///
    /// # Errors
    /// Returns the `ProbeError` for whichever step failed. The connection,
    /// once established, is closed before the error is surfaced.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn run(&self) -> Result<ProbeReport, ProbeError> {
        let mut connection = self.connect().await?;
        let result = self.exchange(&mut connection).await;
        self.close(connection).await;
        result
    }

    async fn connect(&self) -> Result<Connection, ProbeError> {
        debug!("connecting");
        let (connection, response) =
            timeout(self.connect_timeout, connect_async(self.endpoint.as_str()))
                .await
                .map_err(|_| ProbeError::ConnectTimeout(self.connect_timeout))?
                .map_err(|e| ProbeError::ConnectionFailure(e.to_string()))?;
        debug!(status = %response.status(), "handshake complete");
        Ok(connection)
    }

    async fn exchange(&self, connection: &mut Connection) -> Result<ProbeReport, ProbeError> {
        connection
            .send(Message::Text(self.message.clone()))
            .await
            .map_err(|e| ProbeError::SendFailure(e.to_string()))?;
        println!("Sent message: {}", self.message);
        info!("message sent");

        let received = self.receive_one(connection).await?;
        println!("Received response: {}", received);
        info!("response received");

        Ok(ProbeReport {
            sent: self.message.clone(),
            received,
        })
    }

    /// Waits for exactly one data message within the receive bound.
    ///
    /// Control frames do not count as the response; a close frame or the
    /// end of the stream before a data message is a receive failure.
    async fn receive_one(&self, connection: &mut Connection) -> Result<String, ProbeError> {
        let deadline = Instant::now() + self.receive_timeout;
        loop {
            let frame = timeout_at(deadline, connection.next())
                .await
                .map_err(|_| ProbeError::ReceiveTimeout(self.receive_timeout))?;

            match frame {
                Some(Ok(Message::Text(text))) => return Ok(text),
                Some(Ok(Message::Binary(data))) => {
                    return Ok(String::from_utf8_lossy(&data).into_owned());
                }
                Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => continue,
                Some(Ok(Message::Close(Some(frame)))) => {
                    return Err(ProbeError::ReceiveFailure(format!(
                        "server closed the connection before responding (code {:?}, reason {:?})",
                        frame.code, frame.reason
                    )));
                }
                Some(Ok(Message::Close(None))) => {
                    return Err(ProbeError::ReceiveFailure(
                        "server closed the connection before responding".into(),
                    ));
                }
                Some(Err(e)) => return Err(ProbeError::ReceiveFailure(e.to_string())),
                None => {
                    return Err(ProbeError::ReceiveFailure(
                        "connection ended before a response arrived".into(),
                    ));
                }
            }
        }
    }

    /// Closes the connection, tolerating peers that already hung up.
    async fn close(&self, mut connection: Connection) {
        match connection.close(None).await {
            Ok(())
            | Err(tungstenite::Error::ConnectionClosed)
            | Err(tungstenite::Error::AlreadyClosed) => {}
            Err(e) => debug!("close after probe failed: {}", e),
        }
    }
}
