use pyropanel_app::config::DashboardConfig;
use pyropanel_dashboard::{config, dom, logging};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::from_page() {
        Ok(config) => (config, None),
        Err(err) => (DashboardConfig::default(), Some(err)),
    };
    logging::init(config.log_level().unwrap_or(tracing::Level::INFO));
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "invalid dashboard config, using defaults");
    }

    let Some(document) = dom::document() else {
        tracing::error!("not running in a browser document");
        return;
    };
    dom::when_ready(&document, move || match pyropanel_dashboard::start(&config) {
        Ok(handle) => handle.forget(),
        Err(err) => tracing::error!(error = %err, "failed to start dashboard"),
    });
}
