mod types;
mod ui;

use anyhow::Context;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::types::playback_state::PlaybackState;
use crate::ui::app::ScrubberApp;

/// Demo clip length. A real player would take this from media metadata.
const DEMO_DURATION_SECONDS: f64 = 120.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = PlaybackState::new(DEMO_DURATION_SECONDS)
        .context("constructing playback state")?;
    info!(total_seconds = DEMO_DURATION_SECONDS, "starting scrubber demo");

    let app = ScrubberApp::new(state);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 320.0])
            .with_title("Scrubber"),
        ..Default::default()
    };
    eframe::run_native(
        "Scrubber",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with error: {err}"))?;
    Ok(())
}
