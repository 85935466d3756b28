use dioxus::prelude::*;

use portal::PortalConfig;
use ui::{Dashboard, LoginSection, Notice, PageProvider};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const PORTAL_TOML: &str = include_str!("../portal.toml");

fn main() {
    dioxus::launch(App);
}

/// Embedded `portal.toml`, with relative endpoints anchored to the page origin
/// in the browser and environment overrides applied natively.
fn load_config() -> PortalConfig {
    let config = match PortalConfig::from_toml(PORTAL_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {}", PortalConfig::filename(), e);
            PortalConfig::default()
        }
    };

    #[cfg(target_arch = "wasm32")]
    let config = match web_sys::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => config.with_origin(origin),
        None => config,
    };

    #[cfg(not(target_arch = "wasm32"))]
    let config = api::config::apply_env(config);

    tracing::info!("Endpoints: {:?}", config.endpoints);
    config
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Title { "Hostel Portal" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        PageProvider {
            config,
            Notice {}
            LoginSection {}
            Dashboard {}
        }
    }
}
