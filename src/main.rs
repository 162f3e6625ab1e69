use draw_together::gui::{DrawTogetherApp, APP_TITLE};
use draw_together::logging;
use draw_together::settings::{Settings, SETTINGS_FILE};

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(
        settings.debug_logging,
        settings.log_file.as_ref().map(PathBuf::from),
    );
    tracing::info!(capture_mode = ?settings.capture_mode, "starting {APP_TITLE}");

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([width, height])
            .with_min_inner_size([420.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |_cc| Box::new(DrawTogetherApp::new(&settings))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run {APP_TITLE}: {e}"))
}
