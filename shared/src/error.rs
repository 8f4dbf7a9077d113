use tokio_tungstenite::tungstenite;

/// Errors raised by the subscription tester
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// WebSocket handshake failed
    #[error("connect failed: {0}")]
    Connect(#[source] tungstenite::Error),

    /// Read or write on an open socket failed
    #[error("{0}")]
    Transport(#[source] tungstenite::Error),

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    /// Subprotocol or token is not a valid header value
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] tungstenite::http::header::InvalidHeaderValue),

    /// Console output could not be written
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
