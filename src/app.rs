//! Application shell. Shows the consent gate until the disclaimer has been
//! accepted for the current copy version, then the demo content.

use eframe::egui;

use crate::config::Config;
use crate::consent_gate::ConsentGate;

pub struct PulseApp {
    config: Config,
    gate: ConsentGate,
    consented: bool,
}

impl PulseApp {
    pub fn new(config: Config) -> Self {
        let consented = !config.needs_consent();
        Self {
            config,
            gate: ConsentGate::new(),
            consented,
        }
    }

    fn show_demo(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Pulse Demo");
        });
        ui.add_space(8.0);
        ui.label("Simulated vitals. Values below are generated, not measured.");
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);

        let t = ui.input(|i| i.time);
        let heart_rate = 72.0 + 6.0 * (t * 0.8).sin();
        let spo2 = 97.5 + 1.2 * (t * 0.3).sin();
        let resp_rate = 15.0 + 2.0 * (t * 0.5).sin();

        egui::Grid::new("vitals_grid")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.label("Heart Rate:");
                ui.label(format!("{:.0} bpm", heart_rate));
                ui.end_row();

                ui.label("SpO2:");
                ui.label(format!("{:.1} %", spo2));
                ui.end_row();

                ui.label("Respiratory Rate:");
                ui.label(format!("{:.0} /min", resp_rate));
                ui.end_row();
            });
    }
}

impl eframe::App for PulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.consented {
            // Empty panel behind the modal so the backdrop has something to dim.
            egui::CentralPanel::default().show(ctx, |_ui| {});

            let mut confirmed = false;
            self.gate.show(ctx, || confirmed = true);

            if confirmed {
                self.config.record_acceptance();
                if let Err(e) = self.config.save() {
                    log::error!("Failed to persist disclaimer acceptance: {}", e);
                }
                log::info!(
                    "Disclaimer v{} accepted",
                    self.config.general.disclaimer_accepted_version
                );
                self.consented = true;
            }
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| self.show_demo(ui));

        // Animated readouts need continuous frames.
        ctx.request_repaint();
    }
}
