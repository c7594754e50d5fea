//! Renders dashboard state changes onto the server-rendered page.

use pyropanel_app::dashboard::{DashboardChange, DashboardStore};
use pyropanel_domain::id::ServerId;
use pyropanel_domain::server::ServerStatus;
use pyropanel_domain::stats::{Resource, format_percent};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::chart::ResourceChart;
use crate::dom::{query, query_all};

const SERVER_ITEMS: &str = ".server-item";
const SERVER_STATUS: &str = ".server-status";

/// Subscribe the page to every change the store publishes.
pub fn attach(store: &DashboardStore, document: Document, chart: Option<ResourceChart>) {
    if chart.is_none() {
        tracing::debug!("no resource chart canvas on this page");
    }
    store.subscribe(move |change, state| match change {
        DashboardChange::Status { server_id, status } => {
            render_status(&document, server_id, status);
        }
        DashboardChange::Gauges(resources) => {
            for resource in resources {
                if let Some(value) = state.gauges().get(*resource) {
                    render_gauge(&document, *resource, value);
                }
            }
        }
        DashboardChange::Chart => {
            if let Some(chart) = &chart
                && let Err(err) = chart.draw(state.chart())
            {
                tracing::warn!(error = %err, "failed to redraw resource chart");
            }
        }
    });
}

fn class_selector(class: &str) -> String {
    format!(".{class}")
}

/// Whether a `.server-item` carrying `data-server-id = item_id` belongs to
/// `server_id`. A missing attribute never matches.
fn is_server_item(item_id: Option<&str>, server_id: &ServerId) -> bool {
    item_id == Some(server_id.as_str())
}

fn status_indicator(document: &Document, server_id: &ServerId) -> Option<Element> {
    query_all(document, SERVER_ITEMS)
        .into_iter()
        .filter(|item| is_server_item(item.get_attribute("data-server-id").as_deref(), server_id))
        .find_map(|item| item.query_selector(SERVER_STATUS).ok().flatten())
}

fn render_status(document: &Document, server_id: &ServerId, status: &ServerStatus) {
    let Some(indicator) = status_indicator(document, server_id) else {
        tracing::debug!(%server_id, "no status indicator for server");
        return;
    };
    let classes = indicator.class_list();
    for class in ServerStatus::KNOWN_CSS_CLASSES {
        let _ = classes.remove_1(class);
    }
    if let Err(err) = classes.add_1(&status.css_class()) {
        tracing::warn!(error = ?err, %server_id, "failed to set status class");
    }
    indicator.set_text_content(Some(status.as_str()));
}

fn render_gauge(document: &Document, resource: Resource, value: f64) {
    let Some(text) = query(document, &class_selector(resource.usage_class())) else {
        return;
    };
    let percent = format_percent(value);
    text.set_text_content(Some(&percent));
    let bar = query(document, &class_selector(resource.progress_class()))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    if let Some(bar) = bar
        && let Err(err) = bar.style().set_property("width", &percent)
    {
        tracing::warn!(error = ?err, "failed to set progress width");
    }
}
