//! deskclock — a frameless, transparent analog clock for the desktop
//!
//! Drag anywhere on the face to move the window; scroll to resize it.
//! Escape closes.

mod app;

use app::DeskClockApp;
use clockcore::config::{self, ClockConfig};
use clockcore::logging::{init_logging, LoggingConfig};
use clockcore::ClockTheme;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    // Read the file before the logger exists so its filter can apply;
    // load errors are reported once logging is up.
    let path = config::config_path();
    let loaded = ClockConfig::load(&path);
    init_logging(LoggingConfig {
        filter: loaded.as_ref().ok().and_then(|c| c.log_filter.clone()),
        ..Default::default()
    });
    let config = ClockConfig::or_default(loaded, &path);

    let side = config.radius * 2.0;
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([side, side])
        .with_title("deskclock")
        .with_decorations(false)
        .with_transparent(true);

    if config.always_on_top {
        viewport = viewport.with_always_on_top();
    }

    if let Some(pos) = config.position {
        viewport = viewport.with_position(pos);
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    log::info!("starting deskclock (radius {})", config.radius);
    let result = eframe::run_native(
        "deskclock",
        options,
        Box::new(move |cc| {
            ClockTheme::default().apply(&cc.egui_ctx);
            Box::new(DeskClockApp::new(cc, config))
        }),
    );
    match &result {
        Ok(()) => log::info!("window closed"),
        Err(e) => log::error!("eframe error: {}", e),
    }
    result
}
