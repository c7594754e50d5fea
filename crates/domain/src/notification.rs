//! Notifications — transient, auto-dismissing status messages.

use std::fmt;
use std::time::Duration;

use crate::time::{Timestamp, now};

define_open_enum!(
    /// Visual category of a notification.
    NotificationKind {
        Success => "success",
        Error => "error",
        Info => "info",
        Warning => "warning",
    }
);

impl NotificationKind {
    /// CSS classes carried by a notification node of this kind.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// Identifier of a notification within one page. Sequences start at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u32);

impl NotificationId {
    /// Wrap a raw sequence number.
    #[must_use]
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The identifier following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a notification is in its removal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPhase {
    #[default]
    Visible,
    FadingOut,
}

/// A single notification shown in the notification container.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Timestamp,
    pub phase: NotificationPhase,
}

impl Notification {
    /// Create a visible notification stamped with the current time.
    #[must_use]
    pub fn new(id: NotificationId, kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            created_at: now(),
            phase: NotificationPhase::Visible,
        }
    }

    /// CSS classes for the rendered node, including `fade-out` once fading.
    #[must_use]
    pub fn css_class(&self) -> String {
        match self.phase {
            NotificationPhase::Visible => self.kind.css_class(),
            NotificationPhase::FadingOut => format!("{} fade-out", self.kind.css_class()),
        }
    }
}

/// Delays of the two-phase removal: fully visible, then fading, then gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub visible: Duration,
    pub fade: Duration,
}

impl NotificationTiming {
    /// Total time from creation to removal.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.visible + self.fade
    }
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            visible: Duration::from_millis(5000),
            fade: Duration::from_millis(300),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_kind_css_class() {
        assert_eq!(
            NotificationKind::Success.css_class(),
            "notification notification-success"
        );
        assert_eq!(
            NotificationKind::from("debug").css_class(),
            "notification notification-debug"
        );
    }

    #[test]
    fn should_start_visible() {
        let n = Notification::new(NotificationId::from_raw(0), NotificationKind::Info, "hi");
        assert_eq!(n.phase, NotificationPhase::Visible);
        assert_eq!(n.css_class(), "notification notification-info");
    }

    #[test]
    fn should_add_fade_out_class_when_fading() {
        let mut n = Notification::new(NotificationId::from_raw(0), NotificationKind::Error, "x");
        n.phase = NotificationPhase::FadingOut;
        assert_eq!(n.css_class(), "notification notification-error fade-out");
    }

    #[test]
    fn should_default_to_five_seconds_plus_fade() {
        let timing = NotificationTiming::default();
        assert_eq!(timing.visible, Duration::from_millis(5000));
        assert_eq!(timing.fade, Duration::from_millis(300));
        assert_eq!(timing.lifetime(), Duration::from_millis(5300));
    }

    #[test]
    fn should_wrap_ids_at_the_end_of_the_sequence() {
        assert_eq!(NotificationId::from_raw(u32::MAX).next(), NotificationId::default());
    }

    #[test]
    fn should_increment_ids() {
        let id = NotificationId::from_raw(4);
        assert_eq!(id.next(), NotificationId::from_raw(5));
        assert_eq!(id.to_string(), "4");
    }
}
