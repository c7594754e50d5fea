//! Real-time messages pushed by the backend over the push channel.
//!
//! Frames are JSON objects tagged by a `type` field. They are decoded once,
//! at the boundary, into the closed [`RealtimeMessage`] union.

use serde::Deserialize;

use crate::error::DecodeError;
use crate::id::ServerId;
use crate::notification::NotificationKind;
use crate::server::ServerStatus;
use crate::stats::ResourceSample;

/// A decoded push message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RealtimeMessage {
    /// One server changed lifecycle state.
    ServerStatus {
        server_id: ServerId,
        status: ServerStatus,
    },
    /// Fresh resource usage figures.
    StatsUpdate(ResourceSample),
    /// A message to surface as a notification.
    Notification {
        notification_type: NotificationKind,
        message: String,
    },
    /// Any other tag, or no tag at all. Ignored by consumers.
    #[serde(other)]
    Unknown,
}

impl RealtimeMessage {
    /// Decode a text frame.
    ///
    /// Valid JSON without a string `type` field decodes to
    /// [`Unknown`](Self::Unknown), as does an unrecognised tag.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] when the frame is not JSON, or when a
    /// known message kind is missing fields or has fields of the wrong type.
    pub fn decode(text: &str) -> Result<Self, DecodeError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.get("type").is_some_and(serde_json::Value::is_string) {
            return Ok(Self::Unknown);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The wire tag, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ServerStatus { .. } => "server_status",
            Self::StatsUpdate(_) => "stats_update",
            Self::Notification { .. } => "notification",
            Self::Unknown => "unknown",
        }
    }
}
