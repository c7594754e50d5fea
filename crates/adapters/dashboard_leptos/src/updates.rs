//! The page-side sink for dashboard updates.

use std::rc::Rc;

use pyropanel_app::dashboard::DashboardStore;
use pyropanel_app::ports::DashboardUpdates;
use pyropanel_app::services::notification_center::NotificationCenter;
use pyropanel_domain::id::ServerId;
use pyropanel_domain::notification::NotificationKind;
use pyropanel_domain::server::ServerStatus;
use pyropanel_domain::stats::ResourceSample;
use wasm_bindgen_futures::spawn_local;

use crate::timer::GlooSleeper;
use crate::toast::SignalTray;

pub type PageNotifications = NotificationCenter<SignalTray, GlooSleeper>;

/// Routes status and stats into the store and notifications into the tray.
pub struct PageUpdates {
    store: Rc<DashboardStore>,
    notifications: Rc<PageNotifications>,
}

impl PageUpdates {
    pub fn new(store: Rc<DashboardStore>, notifications: Rc<PageNotifications>) -> Self {
        Self {
            store,
            notifications,
        }
    }
}

impl DashboardUpdates for PageUpdates {
    fn apply_status(&self, server_id: &ServerId, status: &ServerStatus) {
        self.store.set_status(server_id.clone(), status.clone());
    }

    fn apply_sample(&self, sample: &ResourceSample) {
        self.store.apply_sample(sample);
    }

    fn notify(&self, kind: NotificationKind, message: String) {
        let notifications = Rc::clone(&self.notifications);
        spawn_local(async move { notifications.show(kind, message).await });
    }
}
