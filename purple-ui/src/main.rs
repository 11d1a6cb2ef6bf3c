use leptos::*;
use purple_ui::app::App;
use purple_ui::config::{Bootstrap, DEFAULT_LOG_LEVEL};
use purple_ui::store::{self, Action};
use purple_ui::{bridge, routes};

fn main() {
    console_error_panic_hook::set_once();

    let (bootstrap, bootstrap_err) = match bridge::read_bootstrap() {
        Ok(b) => (b, None),
        Err(e) => (Bootstrap::default(), Some(e)),
    };
    let (level, level_err) = match bootstrap.config.level() {
        Ok(level) => (level, None),
        Err(e) => (DEFAULT_LOG_LEVEL, Some(e)),
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    for err in [bootstrap_err, level_err].into_iter().flatten() {
        log::warn!("bootstrap: {err}, using defaults");
    }
    if let Err(e) = routes::validate(routes::ROUTES) {
        log::error!("invalid route table: {e}");
    }

    store::global().dispatch(Action::ReplaceState(bootstrap.state));
    log::info!("purple-ui mounted at {level} level");

    mount_to_body(|| view! { <App/> })
}
