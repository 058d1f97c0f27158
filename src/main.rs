mod core;
mod gui;
mod hotkeys;
mod media;
mod player;

use eframe::egui;
use gui::OverlayPlayerApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 560.0])
            .with_title("Overlay Player"),
        ..Default::default()
    };

    eframe::run_native(
        "Overlay Player",
        options,
        Box::new(|cc| {
            match OverlayPlayerApp::new(cc) {
                Ok(app) => Ok(Box::new(app)),
                Err(e) => {
                    eprintln!("Failed to initialize app: {}", e);
                    std::process::exit(1);
                }
            }
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
