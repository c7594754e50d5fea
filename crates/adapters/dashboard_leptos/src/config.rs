//! Reads the optional inline configuration block from the page.

use pyropanel_app::config::{ConfigError, DashboardConfig};

use crate::dom::document;

/// Id of the `<script type="application/toml">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "pyropanel-config";

/// Load the dashboard config from the page, or defaults when absent.
///
/// # Errors
///
/// Returns the parse or validation error of a malformed block.
pub fn from_page() -> Result<DashboardConfig, ConfigError> {
    let source = document()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    DashboardConfig::load(source.as_deref())
}
