//! Binary crate for the `weatherpane` desktop window.
//!
//! This crate focuses on:
//! - Window setup and the event loop
//! - Wiring the URL field and button to the core fetch handler
//! - Presenting failures as modal dialogs

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("weatherpane=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([440.0, 280.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Weather App",
        options,
        Box::new(|_cc| Ok(Box::new(app::WeatherPaneApp::new()?))),
    )
    .map_err(|e| anyhow!("failed to run the weather window: {e}"))
}
