//! Real-time channel — decodes pushed messages and keeps the connection alive.
//!
//! ```text
//!  Disconnected ──setup──▶ Connecting ──handshake──▶ Open
//!       │                      ▲   │                   │
//!  (unsupported:               │   └──────close────────┤
//!   stays here)          delay │                       ▼
//!                              └──────────────────── Closed
//! ```
//!
//! Every close (server-initiated, network loss, or failure to construct the
//! connection) schedules exactly one new attempt after the fixed delay of the
//! [`ReconnectPolicy`]. Retries are unbounded until the policy is cancelled.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use pyropanel_domain::message::RealtimeMessage;

use crate::ports::{ChannelEvent, DashboardUpdates, PushConnection, PushTransport, Sleeper};

/// Connection state of a [`RealtimeChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelState {
    #[default]
    Disconnected,
    Connecting,
    Open,
    Closed,
}

/// Why [`RealtimeChannel::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelExit {
    /// The environment has no push capability; nothing was attempted.
    Unsupported,
    /// The reconnect policy was cancelled.
    Cancelled,
}

/// Fixed-delay, unbounded reconnect policy with an explicit stop.
///
/// Clones share the cancellation flag, so a handle kept by the page can stop
/// a channel that is already running.
#[derive(Debug, Clone)]
pub struct ReconnectPolicy {
    delay: Duration,
    cancelled: Rc<Cell<bool>>,
}

impl ReconnectPolicy {
    #[must_use]
    pub fn fixed(delay: Duration) -> Self {
        Self {
            delay,
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    /// Delay before the next attempt, or `None` once cancelled.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        (!self.is_cancelled()).then_some(self.delay)
    }

    /// Stop scheduling attempts. A connection that is already open stays
    /// open until it closes.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::fixed(Duration::from_millis(5000))
    }
}

/// URL of the push endpoint for a page served with `page_protocol`
/// (`"https:"` gives `wss://`, anything else `ws://`).
#[must_use]
pub fn channel_url(page_protocol: &str, host: &str, path: &str) -> String {
    let scheme = if page_protocol == "https:" { "wss" } else { "ws" };
    format!("{scheme}://{host}{path}")
}

/// Route one decoded message to the dashboard.
pub fn dispatch(message: RealtimeMessage, updates: &impl DashboardUpdates) {
    match message {
        RealtimeMessage::ServerStatus { server_id, status } => {
            updates.apply_status(&server_id, &status);
        }
        RealtimeMessage::StatsUpdate(sample) => updates.apply_sample(&sample),
        RealtimeMessage::Notification {
            notification_type,
            message,
        } => updates.notify(notification_type, message),
        RealtimeMessage::Unknown => {}
    }
}

/// Decode a text frame and dispatch it. A malformed frame is logged and
/// dropped; it never affects the connection.
pub fn handle_frame(text: &str, updates: &impl DashboardUpdates) {
    match RealtimeMessage::decode(text) {
        Ok(message) => {
            tracing::trace!(kind = message.kind(), "push message received");
            dispatch(message, updates);
        }
        Err(err) => tracing::error!(error = %err, "error processing push message"),
    }
}

/// Push channel driver.
pub struct RealtimeChannel<T, S> {
    transport: T,
    sleeper: S,
    policy: ReconnectPolicy,
    url: String,
    state: Cell<ChannelState>,
    attempts: Cell<u32>,
}

impl<T: PushTransport, S: Sleeper> RealtimeChannel<T, S> {
    pub fn new(transport: T, sleeper: S, policy: ReconnectPolicy, url: impl Into<String>) -> Self {
        Self {
            transport,
            sleeper,
            policy,
            url: url.into(),
            state: Cell::new(ChannelState::Disconnected),
            attempts: Cell::new(0),
        }
    }

    #[must_use]
    pub fn state(&self) -> ChannelState {
        self.state.get()
    }

    /// Number of connection attempts made so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts.get()
    }

    #[must_use]
    pub fn policy(&self) -> &ReconnectPolicy {
        &self.policy
    }

    /// Connect, pump messages into `updates`, and reconnect after every
    /// close until the policy is cancelled.
    pub async fn run(&self, updates: &impl DashboardUpdates) -> ChannelExit {
        if !self.transport.is_supported() {
            tracing::info!("push channel not supported, real-time updates disabled");
            return ChannelExit::Unsupported;
        }

        loop {
            if self.policy.is_cancelled() {
                return ChannelExit::Cancelled;
            }

            self.state.set(ChannelState::Connecting);
            self.attempts.set(self.attempts.get().saturating_add(1));
            tracing::debug!(url = %self.url, attempt = self.attempts.get(), "connecting push channel");

            match self.transport.connect(&self.url) {
                Ok(mut connection) => self.pump(&mut connection, updates).await,
                Err(err) => tracing::error!(error = %err, "error setting up push channel"),
            }
            self.state.set(ChannelState::Closed);

            let Some(delay) = self.policy.next_delay() else {
                return ChannelExit::Cancelled;
            };
            tracing::debug!(?delay, "scheduling push channel reconnect");
            self.sleeper.sleep(delay).await;
        }
    }

    async fn pump(&self, connection: &mut T::Connection, updates: &impl DashboardUpdates) {
        loop {
            match connection.next_event().await {
                ChannelEvent::Opened => {
                    self.state.set(ChannelState::Open);
                    tracing::info!("push channel connection established");
                }
                ChannelEvent::Message(text) => {
                    if self.state.get() == ChannelState::Open {
                        handle_frame(&text, updates);
                    } else {
                        tracing::debug!("dropping frame received before handshake");
                    }
                }
                ChannelEvent::Error(reason) => {
                    tracing::warn!(%reason, "push channel error");
                }
                ChannelEvent::Closed => {
                    tracing::info!("push channel connection closed");
                    return;
                }
            }
        }
    }
}
