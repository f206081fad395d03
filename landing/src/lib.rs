// Green Innovations Institute landing page (Leptos 0.8 CSR)

mod page;
pub mod platform;
mod sections;
mod shell;

use gii_page::SiteConfig;
use leptos::prelude::*;
use tracing::Level;

pub use page::{ContentView, PageHandle};
pub use shell::PageShell;

/// Build-time site configuration.
const SITE_TOML: &str = include_str!("../site.toml");

/// Install panic and log hooks, then mount the page shell on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();

    let parsed = SiteConfig::from_toml_str(SITE_TOML);
    let level = parsed.as_ref().map(SiteConfig::max_level).unwrap_or(Level::INFO);
    init_logging(level);

    let config = parsed.unwrap_or_else(|e| {
        tracing::warn!("site.toml rejected, using defaults: {e}");
        SiteConfig::default()
    });

    tracing::info!(brand = %config.brand.name, "starting landing page");
    leptos::mount::mount_to_body(move || view! { <PageShell config=config /> });
}

fn init_logging(level: Level) {
    let layer_config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();
    tracing_wasm::set_as_global_default_with_config(layer_config);
}
