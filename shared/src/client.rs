use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Request;
use tokio_tungstenite::tungstenite::http::header::{AUTHORIZATION, SEC_WEBSOCKET_PROTOCOL};
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::console::Console;
use crate::error::ClientError;
use crate::messages::{ConnectionInit, StartMessage};
use crate::session::{self, Outcome};
use crate::subscription::Variant;

pub const DEFAULT_URL: &str = "ws://localhost:8000/ws/graphql/";
pub const DEFAULT_SUBPROTOCOL: &str = "graphql-ws";
pub const DEFAULT_TOKEN: &str = "YOUR_TOKEN_HERE";
pub const DEFAULT_SUBSCRIPTION_ID: &str = "1";

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Configuration for one tester run
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub url: String,
    pub subprotocol: String,
    pub token: String,
    pub subscription_id: String,
    pub variant: Variant,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            subprotocol: DEFAULT_SUBPROTOCOL.to_string(),
            token: DEFAULT_TOKEN.to_string(),
            subscription_id: DEFAULT_SUBSCRIPTION_ID.to_string(),
            variant: Variant::default(),
        }
    }
}

impl ClientConfig {
    /// Authorization value carried both on the handshake and in `connection_init`
    pub fn authorization(&self) -> String {
        format!("JWT {}", self.token)
    }

    /// Handshake request with the subprotocol and authorization headers set.
    ///
    /// The chat server authenticates from the handshake headers; the copy in
    /// `connection_init` is what the graphql-ws payload carries.
    pub fn request(&self) -> Result<Request, ClientError> {
        let mut request = self
            .url
            .as_str()
            .into_client_request()
            .map_err(ClientError::Connect)?;
        let headers = request.headers_mut();
        headers.insert(SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_str(&self.subprotocol)?);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&self.authorization())?);
        Ok(request)
    }

    /// The two frames sent after the socket opens, in order
    pub fn frames(&self) -> Result<Vec<Message>, ClientError> {
        Ok(vec![
            ConnectionInit::new(self.authorization()).to_frame()?,
            StartMessage::new(&self.subscription_id, self.variant.document()).to_frame()?,
        ])
    }
}

/// Open the socket and complete the WebSocket handshake.
///
/// tungstenite fails the handshake when the server does not accept the
/// requested subprotocol, so a returned stream has always negotiated it.
pub async fn connect(config: &ClientConfig) -> Result<WsStream, ClientError> {
    let request = config.request()?;
    tracing::info!(url = %config.url, subprotocol = %config.subprotocol, "connecting");

    let (ws_stream, response) = connect_async(request)
        .await
        .map_err(ClientError::Connect)?;

    tracing::info!(
        subprotocol = ?response.headers().get(SEC_WEBSOCKET_PROTOCOL),
        "connected"
    );

    Ok(ws_stream)
}

/// Connect, send the subscription, and report everything the server sends
/// back until the connection goes away.
///
/// A failed handshake is reported through `console` the same way as a
/// transport error on an open socket. The connection is never reopened.
pub async fn run<C>(config: &ClientConfig, console: &mut C) -> Result<Outcome, ClientError>
where
    C: Console + ?Sized,
{
    let frames = config.frames()?;

    let ws_stream = match connect(config).await {
        Ok(stream) => stream,
        Err(e @ ClientError::Connect(_)) => return session::fail(console, e),
        Err(e) => return Err(e),
    };

    let (mut write, mut read) = ws_stream.split();
    tracing::info!(
        variant = %config.variant,
        id = %config.subscription_id,
        "sending subscription"
    );
    session::drive(&mut write, &mut read, frames, console).await
}
