mod app;

use datatable::platform::desktop::paths::{default_webview_data_dir, WINDOW_TITLE};

fn main() {
    dioxus::logger::initialize_default();

    let mut config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title(WINDOW_TITLE));
    match default_webview_data_dir() {
        Ok(dir) => config = config.with_data_directory(dir),
        Err(err) => tracing::warn!("falling back to the default WebView data directory: {err:#}"),
    }

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);
}
