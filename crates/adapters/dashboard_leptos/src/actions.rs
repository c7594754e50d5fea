//! Binds the server action controls rendered on the page.

use std::rc::Rc;

use pyropanel_app::ports::{ActionControl, ActionGateway, DashboardUpdates};
use pyropanel_app::services::action_service::ActionService;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::dom::{EventListener, query_all};

const ACTION_CONTROLS: &str = ".server-action";
const LOADING_CLASS: &str = "loading";

/// An action button, shown busy with the `loading` class and `disabled`.
pub struct ElementControl(Element);

impl ActionControl for ElementControl {
    fn set_busy(&self, busy: bool) {
        let classes = self.0.class_list();
        let result = if busy {
            classes
                .add_1(LOADING_CLASS)
                .and_then(|()| self.0.set_attribute("disabled", ""))
        } else {
            classes
                .remove_1(LOADING_CLASS)
                .and_then(|()| self.0.remove_attribute("disabled"))
        };
        if let Err(err) = result {
            tracing::warn!(error = ?err, busy, "failed to update action control");
        }
    }
}

/// Attach a click handler to every `.server-action` present now.
///
/// Controls added to the page later are not bound.
pub fn bind<G, U>(
    document: &Document,
    service: &Rc<ActionService<G>>,
    updates: &Rc<U>,
) -> Vec<EventListener>
where
    G: ActionGateway + 'static,
    U: DashboardUpdates + 'static,
{
    let controls = query_all(document, ACTION_CONTROLS);
    tracing::debug!(count = controls.len(), "binding server action controls");
    controls
        .into_iter()
        .filter_map(|control| {
            let service = Rc::clone(service);
            let updates = Rc::clone(updates);
            let element = control.clone();
            let listener = EventListener::new(&control, "click", move |event| {
                event.prevent_default();
                let server_id = element.get_attribute("data-server-id");
                let action = element.get_attribute("data-action");
                let service = Rc::clone(&service);
                let updates = Rc::clone(&updates);
                let control = ElementControl(element.clone());
                spawn_local(async move {
                    service
                        .handle_click(server_id.as_deref(), action.as_deref(), &control, &*updates)
                        .await;
                });
            });
            listener
                .inspect_err(|err| tracing::warn!(error = ?err, "failed to bind action control"))
                .ok()
        })
        .collect()
}
