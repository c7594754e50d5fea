//! Action service — performs server actions clicked on the dashboard.

use pyropanel_domain::action::{ActionOutcome, ActionRequest};
use pyropanel_domain::notification::NotificationKind;

use crate::ports::{ActionControl, ActionError, ActionGateway, DashboardUpdates};

/// Text of the notification shown for every failed action.
pub const ACTION_FAILED_MESSAGE: &str = "Failed to perform server action";

/// Clears the busy state of a control when dropped, so every exit path of
/// an action (success, failure, cancelled future) leaves it idle.
struct BusyGuard<'a, C: ActionControl>(&'a C);

impl<'a, C: ActionControl> BusyGuard<'a, C> {
    fn enter(control: &'a C) -> Self {
        control.set_busy(true);
        Self(control)
    }
}

impl<C: ActionControl> Drop for BusyGuard<'_, C> {
    fn drop(&mut self) {
        self.0.set_busy(false);
    }
}

/// Application service turning clicks on action controls into requests.
pub struct ActionService<G> {
    gateway: G,
}

impl<G: ActionGateway> ActionService<G> {
    /// Create a new service backed by the given gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Handle a click on an action control given its raw `data-server-id`
    /// and `data-action` attribute values.
    ///
    /// Returns `None` without sending anything when either attribute is
    /// missing or empty.
    pub async fn handle_click<C, U>(
        &self,
        server_id: Option<&str>,
        action: Option<&str>,
        control: &C,
        updates: &U,
    ) -> Option<ActionOutcome>
    where
        C: ActionControl,
        U: DashboardUpdates,
    {
        let Some(request) = ActionRequest::from_attributes(server_id, action) else {
            tracing::debug!("action control without server id or action, ignoring click");
            return None;
        };
        Some(self.perform(request, control, updates).await)
    }

    /// Send one request for `request` and reflect the outcome.
    ///
    /// On success the server's message (or a default) is shown and the
    /// status indicator is set optimistically from the action. On any
    /// failure a generic error is shown and the status is left alone. The
    /// control is busy for the duration of the call and idle afterwards.
    #[tracing::instrument(skip(self, control, updates), fields(server_id = %request.server_id, action = %request.action))]
    pub async fn perform<C, U>(
        &self,
        request: ActionRequest,
        control: &C,
        updates: &U,
    ) -> ActionOutcome
    where
        C: ActionControl,
        U: DashboardUpdates,
    {
        let _busy = BusyGuard::enter(control);

        match self.gateway.send(&request).await {
            Ok(response) => {
                let message = request.success_message(&response);
                tracing::info!(%message, "server action succeeded");
                updates.notify(NotificationKind::Success, message.clone());
                updates.apply_status(&request.server_id, &request.action.optimistic_status());
                ActionOutcome::success(message)
            }
            Err(err) => {
                log_failure(&err);
                updates.notify(NotificationKind::Error, ACTION_FAILED_MESSAGE.to_string());
                ActionOutcome::failure()
            }
        }
    }
}

fn log_failure(err: &ActionError) {
    match err {
        ActionError::Status {
            status,
            detail: Some(detail),
        } => tracing::error!(status, %detail, "server action rejected"),
        other => tracing::error!(error = %other, "error performing server action"),
    }
}
