//! Notification container rendered with Leptos.
//!
//! The tray lives in a signal; the container is mounted into `<body>` the
//! first time a notification is posted, then re-renders on every change.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use pyropanel_app::services::notification_center::{NotificationTray, TrayStore};

use crate::dom::document;

/// Signal-backed tray shared between the notification center and the view.
#[derive(Clone)]
pub struct SignalTray {
    tray: ArcRwSignal<NotificationTray>,
    mounted: Rc<Cell<bool>>,
}

impl SignalTray {
    pub fn new() -> Self {
        Self {
            tray: ArcRwSignal::new(NotificationTray::default()),
            mounted: Rc::new(Cell::new(false)),
        }
    }

    fn mount(&self) {
        let Some(body) = document().and_then(|document| document.body()) else {
            tracing::warn!("no <body> to mount notifications into");
            return;
        };
        let tray = self.tray.clone();
        leptos::mount::mount_to(body, move || view! { <NotificationContainer tray/> }).forget();
        self.mounted.set(true);
    }
}

impl TrayStore for SignalTray {
    fn modify<R>(&self, f: impl FnOnce(&mut NotificationTray) -> R) -> Option<R> {
        let result = self.tray.try_update(f);
        if !self.mounted.get() && self.tray.with_untracked(NotificationTray::has_container) {
            self.mount();
        }
        result
    }
}

/// Stack of active notifications, newest last.
#[component]
fn NotificationContainer(tray: ArcRwSignal<NotificationTray>) -> impl IntoView {
    view! {
        <div class="notifications-container">
            {move || {
                tray.with(|tray| {
                    tray.entries()
                        .iter()
                        .map(|notification| {
                            view! {
                                <div class=notification.css_class()>
                                    {notification.message.clone()}
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
