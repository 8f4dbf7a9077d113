// Drives one subscription over an open socket

use futures_util::{Sink, SinkExt, Stream, StreamExt};
use tokio_tungstenite::tungstenite::{self, Message};

use crate::console::Console;
use crate::error::ClientError;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Stream ended without a transport error
    Closed,
    /// A transport error was reported
    Failed,
}

/// Send `frames` in order, then report inbound frames until the stream ends.
///
/// Frames are sent back to back without waiting on the server. A transport
/// error on either half is reported once, followed by the close notice, and
/// nothing more is written to the socket. Only console failures are returned
/// as `Err`.
pub async fn drive<W, R, C>(
    write: &mut W,
    read: &mut R,
    frames: Vec<Message>,
    console: &mut C,
) -> Result<Outcome, ClientError>
where
    W: Sink<Message, Error = tungstenite::Error> + Unpin,
    R: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
    C: Console + ?Sized,
{
    for frame in frames {
        if let Err(e) = write.send(frame).await {
            return fail(console, ClientError::Transport(e));
        }
    }
    tracing::debug!("subscription request sent");

    let mut inbound = 0u64;
    while let Some(msg_result) = read.next().await {
        match msg_result {
            Ok(Message::Text(text)) => {
                inbound += 1;
                console.received(&text)?;
            }
            Ok(Message::Binary(data)) => {
                inbound += 1;
                console.received(&String::from_utf8_lossy(&data))?;
            }
            Ok(Message::Close(frame)) => {
                tracing::debug!(?frame, "close frame received");
            }
            Ok(_) => {
                // Ping/Pong are answered by the transport
            }
            Err(e) => {
                tracing::debug!(inbound, "session failed");
                return fail(console, ClientError::Transport(e));
            }
        }
    }

    tracing::info!(inbound, "connection closed");
    console.closed()?;
    Ok(Outcome::Closed)
}

/// Report a transport failure: one diagnostic, then the close notice
pub(crate) fn fail<C: Console + ?Sized>(
    console: &mut C,
    error: ClientError,
) -> Result<Outcome, ClientError> {
    console.error(&error)?;
    console.closed()?;
    Ok(Outcome::Failed)
}
