#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod form;
mod handlers;
mod logger;
mod preview;
mod worker;

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(200, log::LevelFilter::Info);
    logger.clone().init()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("E248 Labels"),
        ..Default::default()
    };

    eframe::run_native(
        "E248 Labels",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::LabelSheetApp::new(
                cc,
                tokio_handle,
                logger,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start GUI: {e}"))?;

    drop(runtime);
    Ok(())
}
