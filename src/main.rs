// src/main.rs
use anyhow::Result;
use eframe::egui;

use pentrust::config::Settings;
use pentrust::PenTrustApp;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    log::debug!("loaded settings: {:?}", settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title(settings.title.clone()),
        ..Default::default()
    };

    let app_name = settings.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Box::new(PenTrustApp::new(cc, settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
