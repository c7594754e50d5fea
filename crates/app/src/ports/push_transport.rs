//! Push transport port — the persistent server-to-client channel.

use std::future::Future;

/// Something that happened on an open connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    /// The handshake completed.
    Opened,
    /// A text frame arrived.
    Message(String),
    /// The transport reported an error. A [`Closed`](Self::Closed) event
    /// follows when the error ends the connection.
    Error(String),
    /// The connection is gone, whoever closed it.
    Closed,
}

/// The connection could not even be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to open push channel to {url}: {reason}")]
pub struct TransportError {
    pub url: String,
    pub reason: String,
}

/// Opens push connections.
pub trait PushTransport {
    type Connection: PushConnection;

    /// Whether the environment offers the push capability at all.
    fn is_supported(&self) -> bool;

    /// Start connecting to `url`. Returns as soon as the connection object
    /// exists; the handshake result arrives as a [`ChannelEvent`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the connection cannot be created
    /// (malformed URL, blocked by the environment, …).
    fn connect(&self, url: &str) -> Result<Self::Connection, TransportError>;
}

/// A single live connection. Dropping it closes the connection.
pub trait PushConnection {
    /// Wait for the next event. After [`ChannelEvent::Closed`] the
    /// connection is not polled again.
    fn next_event(&mut self) -> impl Future<Output = ChannelEvent>;
}
