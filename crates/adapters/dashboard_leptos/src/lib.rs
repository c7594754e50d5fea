//! Browser adapter for the PyroPanel dashboard.
//!
//! Binds a server-rendered page to the app layer: navigation highlighting,
//! server action controls, live resource gauges and chart, and the
//! realtime push channel.

use std::rc::Rc;

use anyhow::Context;
use futures::future::{AbortHandle, Abortable};
use pyropanel_app::config::DashboardConfig;
use pyropanel_app::dashboard::{DashboardState, DashboardStore};
use pyropanel_app::realtime::{RealtimeChannel, ReconnectPolicy, channel_url};
use pyropanel_app::services::action_service::ActionService;
use pyropanel_app::services::notification_center::NotificationCenter;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

pub mod actions;
pub mod api;
pub mod chart;
pub mod config;
pub mod dom;
pub mod logging;
pub mod nav;
pub mod page;
pub mod timer;
pub mod toast;
pub mod updates;
pub mod ws;

use api::HttpActionGateway;
use chart::ResourceChart;
use dom::EventListener;
use timer::GlooSleeper;
use toast::SignalTray;
use updates::PageUpdates;
use ws::WebSocketTransport;

fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{err:?}")
}

/// Stops the realtime channel, including any pending reconnect.
#[derive(Debug, Clone)]
pub struct RealtimeHandle {
    policy: ReconnectPolicy,
    abort: AbortHandle,
}

impl RealtimeHandle {
    pub fn cancel(&self) {
        self.policy.cancel();
        self.abort.abort();
    }
}

/// Everything the running dashboard keeps alive. Dropping it detaches the
/// page listeners; the realtime task keeps running until cancelled.
pub struct DashboardHandle {
    listeners: Vec<EventListener>,
    realtime: RealtimeHandle,
}

impl DashboardHandle {
    pub fn realtime(&self) -> &RealtimeHandle {
        &self.realtime
    }

    /// Keep the dashboard bound for the lifetime of the page.
    pub fn forget(self) {
        tracing::debug!(listeners = self.listeners.len(), "dashboard bound for page lifetime");
        std::mem::forget(self);
    }
}

/// Bind the current page: nav first, then action controls, then the
/// realtime channel.
///
/// # Errors
///
/// Fails outside a browser document or with an invalid chart capacity.
pub fn start(config: &DashboardConfig) -> anyhow::Result<DashboardHandle> {
    let window = web_sys::window().context("no window")?;
    let document = window.document().context("no document")?;
    let location = window.location();

    let path = location.pathname().map_err(js_err)?;
    nav::highlight(&document, &path);
    let mut listeners: Vec<EventListener> = nav::bind_mobile_toggle(&document).into_iter().collect();

    let store = Rc::new(DashboardStore::new(DashboardState::new(config.chart.capacity)?));
    page::attach(&store, document.clone(), ResourceChart::find(&config.chart.canvas_id));
    let notifications = Rc::new(NotificationCenter::new(
        SignalTray::new(),
        GlooSleeper,
        config.notification_timing(),
    ));
    let updates = Rc::new(PageUpdates::new(store, notifications));

    let service = Rc::new(ActionService::new(HttpActionGateway::new(&config.api.base_path)));
    listeners.extend(actions::bind(&document, &service, &updates));

    let url = channel_url(
        &location.protocol().map_err(js_err)?,
        &location.host().map_err(js_err)?,
        &config.realtime.path,
    );
    let realtime = spawn_realtime(url, config.reconnect_policy(), updates);

    tracing::info!(%path, "dashboard started");
    Ok(DashboardHandle {
        listeners,
        realtime,
    })
}

fn spawn_realtime(url: String, policy: ReconnectPolicy, updates: Rc<PageUpdates>) -> RealtimeHandle {
    let channel = RealtimeChannel::new(WebSocketTransport, GlooSleeper, policy.clone(), url);
    let (abort, registration) = AbortHandle::new_pair();
    let task = Abortable::new(
        async move {
            let exit = channel.run(&*updates).await;
            tracing::info!(?exit, "realtime channel stopped");
        },
        registration,
    );
    spawn_local(async move {
        if task.await.is_err() {
            tracing::debug!("realtime channel aborted");
        }
    });
    RealtimeHandle { policy, abort }
}
