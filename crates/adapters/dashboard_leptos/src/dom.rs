//! Small helpers over `web-sys` for querying the server-rendered page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Element, EventTarget};

/// The page's document, if running inside a browser window.
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// First element matching `selector`, swallowing invalid selectors.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Run `f` once the document has been parsed.
pub fn when_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != DocumentReadyState::Loading {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        tracing::error!(error = ?err, "failed to wait for DOMContentLoaded");
    }
}

/// Guard that detaches its event listener on drop.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    /// Attach `handler` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns the JS exception raised by `addEventListener`.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
