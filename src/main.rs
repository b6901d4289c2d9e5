mod app;
mod config;
mod consent_gate;
mod disclaimer_text;
mod logger;

use crate::app::PulseApp;
use crate::config::Config;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    println!("[*] Loading Pulse Demo...");

    if let Err(e) = logger::init() {
        eprintln!("[!] Logger init failed: {}", e);
    }

    config::ensure_directories()?;

    // First run has no config file yet; start from defaults.
    let config = Config::try_load().unwrap_or_default();
    log::info!(
        "Starting. Disclaimer consent required: {}",
        config.needs_consent()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 420.0])
            .with_title("Pulse Demo")
            .with_resizable(true),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Pulse Demo",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(PulseApp::new(config)))
        }),
    );

    if let Err(e) = result {
        log::error!("eframe exited with error: {}", e);
    }

    Ok(())
}
