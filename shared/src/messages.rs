// Outbound graphql-ws message envelopes

use serde::Serialize;
use tokio_tungstenite::tungstenite::Message;

use crate::error::ClientError;

/// Message type of the handshake envelope
pub const CONNECTION_INIT: &str = "connection_init";

/// Message type of the subscription request envelope
pub const START: &str = "start";

/// `connection_init` envelope, sent once right after the socket opens
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionInit {
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub payload: InitPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitPayload {
    pub headers: AuthHeaders,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthHeaders {
    #[serde(rename = "Authorization")]
    pub authorization: String,
}

impl ConnectionInit {
    pub fn new(authorization: impl Into<String>) -> Self {
        Self {
            message_type: CONNECTION_INIT,
            payload: InitPayload {
                headers: AuthHeaders {
                    authorization: authorization.into(),
                },
            },
        }
    }

    /// Render as a text frame
    pub fn to_frame(&self) -> Result<Message, ClientError> {
        Ok(Message::text(serde_json::to_string(self)?))
    }
}

/// `start` envelope carrying the subscription document
#[derive(Debug, Clone, Serialize)]
pub struct StartMessage {
    pub id: String, // Client-assigned operation id
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub payload: StartPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartPayload {
    pub query: String,
}

impl StartMessage {
    pub fn new(id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message_type: START,
            payload: StartPayload {
                query: query.into(),
            },
        }
    }

    /// Render as a text frame
    pub fn to_frame(&self) -> Result<Message, ClientError> {
        Ok(Message::text(serde_json::to_string(self)?))
    }
}
