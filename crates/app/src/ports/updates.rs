//! Driven UI ports — where use-cases push their visible effects.

use pyropanel_domain::id::ServerId;
use pyropanel_domain::notification::NotificationKind;
use pyropanel_domain::server::ServerStatus;
use pyropanel_domain::stats::ResourceSample;

/// Receives the visible effects of actions and push messages.
///
/// Shared by the action dispatcher and the real-time channel, so both
/// update the page through the same routines.
pub trait DashboardUpdates {
    /// Show `status` on the status indicator of `server_id`.
    fn apply_status(&self, server_id: &ServerId, status: &ServerStatus);

    /// Update gauges and the rolling chart from `sample`.
    fn apply_sample(&self, sample: &ResourceSample);

    /// Show a transient notification.
    fn notify(&self, kind: NotificationKind, message: String);
}

/// The clicked action control.
pub trait ActionControl {
    /// Enter (`true`) or leave (`false`) the busy state: loading marker and
    /// disabled while busy.
    fn set_busy(&self, busy: bool);
}
