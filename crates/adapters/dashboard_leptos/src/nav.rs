//! Navigation highlighting and the mobile menu toggle.

use std::cell::Cell;

use pyropanel_app::nav::{ACTIVE_CLASS, MobileMenu, SHOW_CLASS, active_links};
use web_sys::Document;

use crate::dom::{EventListener, query, query_all};

const NAV_LINKS: &str = "nav ul li a";
const NAV_LIST: &str = "nav ul";
const MOBILE_TOGGLE: &str = ".mobile-menu-toggle";

/// Add the active class to every nav link whose `href` equals `current_path`.
pub fn highlight(document: &Document, current_path: &str) {
    let links = query_all(document, NAV_LINKS);
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    for index in active_links(current_path, hrefs.iter().map(Option::as_deref)) {
        if let Err(err) = links[index].class_list().add_1(ACTIVE_CLASS) {
            tracing::warn!(error = ?err, "failed to mark nav link active");
        }
    }
}

/// Wire the mobile menu toggle, if the page has one.
pub fn bind_mobile_toggle(document: &Document) -> Option<EventListener> {
    let toggle = query(document, MOBILE_TOGGLE)?;
    let document = document.clone();
    let menu = Cell::new(MobileMenu::new(
        query(&document, NAV_LIST).is_some_and(|list| list.class_list().contains(SHOW_CLASS)),
    ));
    let listener = EventListener::new(&toggle, "click", move |_| {
        let Some(list) = query(&document, NAV_LIST) else {
            return;
        };
        let mut state = menu.get();
        let shown = state.toggle();
        menu.set(state);
        if let Err(err) = list.class_list().toggle_with_force(SHOW_CLASS, shown) {
            tracing::warn!(error = ?err, "failed to toggle mobile menu");
        }
    });
    match listener {
        Ok(listener) => Some(listener),
        Err(err) => {
            tracing::warn!(error = ?err, "failed to bind mobile menu toggle");
            None
        }
    }
}
