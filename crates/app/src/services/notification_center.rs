//! Notification center — transient status messages with a two-phase removal.
//!
//! Notifications stack in a single container in arrival order. Each one is
//! fully visible for [`NotificationTiming::visible`], then marked as fading
//! for [`NotificationTiming::fade`], then removed. There is no cap and no
//! queue.

use std::cell::RefCell;
use std::rc::Rc;

use pyropanel_domain::notification::{
    Notification, NotificationId, NotificationKind, NotificationPhase, NotificationTiming,
};

use crate::ports::Sleeper;

/// The notifications currently on the page.
#[derive(Debug, Clone, Default)]
pub struct NotificationTray {
    entries: Vec<Notification>,
    next_id: NotificationId,
    container: bool,
}

impl NotificationTray {
    /// Append a visible notification, creating the container on first use.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let id = self.next_id;
        self.next_id = id.next();
        self.container = true;
        self.entries.push(Notification::new(id, kind, message));
        id
    }

    /// Mark a notification as fading. Returns `false` if it is gone.
    pub fn begin_fade(&mut self, id: NotificationId) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.phase = NotificationPhase::FadingOut;
                true
            }
            None => false,
        }
    }

    /// Detach a notification. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// Notifications in display order (oldest first).
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Whether the container exists. It is created by the first
    /// [`push`](Self::push) and never removed, even when empty.
    #[must_use]
    pub fn has_container(&self) -> bool {
        self.container
    }
}

/// Shared access to the page's [`NotificationTray`].
///
/// Adapters back this with whatever their render layer observes.
pub trait TrayStore {
    /// Run `f` against the tray. Returns `None` if the tray is no longer
    /// available (e.g. the page is being torn down).
    fn modify<R>(&self, f: impl FnOnce(&mut NotificationTray) -> R) -> Option<R>;
}

impl TrayStore for RefCell<NotificationTray> {
    fn modify<R>(&self, f: impl FnOnce(&mut NotificationTray) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: TrayStore> TrayStore for Rc<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut NotificationTray) -> R) -> Option<R> {
        (**self).modify(f)
    }
}

/// Shows notifications and runs their removal timers.
pub struct NotificationCenter<T, S> {
    tray: T,
    sleeper: S,
    timing: NotificationTiming,
}

impl<T: TrayStore, S: Sleeper> NotificationCenter<T, S> {
    pub fn new(tray: T, sleeper: S, timing: NotificationTiming) -> Self {
        Self {
            tray,
            sleeper,
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    /// Insert a notification without scheduling its removal.
    pub fn post(&self, kind: NotificationKind, message: String) -> Option<NotificationId> {
        tracing::debug!(%kind, %message, "showing notification");
        self.tray.modify(|tray| tray.push(kind, message))
    }

    /// Run the two-phase removal of `id`: fade after the visible delay,
    /// detach after the fade delay.
    pub async fn expire(&self, id: NotificationId) {
        self.sleeper.sleep(self.timing.visible).await;
        self.tray.modify(|tray| tray.begin_fade(id));
        self.sleeper.sleep(self.timing.fade).await;
        self.tray.modify(|tray| tray.remove(id));
    }

    /// Show a notification and resolve once it has been removed.
    pub async fn show(&self, kind: NotificationKind, message: String) {
        if let Some(id) = self.post(kind, message) {
            self.expire(id).await;
        }
    }
}
