use anyhow::{Context, Result};
use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vitrine::config::AppConfig;
use vitrine::services::{HttpCatalog, ProductCatalog};
use vitrine::ui_dioxus::App;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(api = %config.api_base_url, "Starting product search");

    let catalog: Arc<dyn ProductCatalog> =
        Arc::new(HttpCatalog::new(&config).context("Failed to build search client")?);

    let window = WindowBuilder::new().with_title("Vitrine - Product Search");

    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .with_context(catalog)
        .launch(App);

    Ok(())
}
