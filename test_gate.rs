// Simple test gate - opens the consent dialog standalone
// Usage: cargo run --bin test_gate

use eframe::egui;

// ===== CONFIGURATION - EDIT THESE VALUES =====
const TITLE: &str = "Welcome to Pulse Demo";
const BODY: &str = "This demo uses AI to simulate or display health-related data.";
const CHECKBOX_LABEL: &str = "I have read and understood the above";
const CONFIRM_LABEL: &str = "I Understand";
// =============================================

struct TestGateApp {
    acknowledged: bool,
    confirmed: bool,
}

impl eframe::App for TestGateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.confirmed {
                ui.heading("Confirmed.");
                ui.label("The callback fired once. Close this window.");
                return;
            }

            ui.vertical_centered(|ui| {
                ui.heading(TITLE);
            });
            ui.add_space(8.0);
            ui.label(BODY);
            ui.add_space(12.0);

            ui.checkbox(&mut self.acknowledged, CHECKBOX_LABEL);
            ui.add_space(8.0);

            let confirm = ui.add_enabled(self.acknowledged, egui::Button::new(CONFIRM_LABEL));
            if confirm.clicked() {
                println!("[*] Confirm clicked while acknowledged - callback fires");
                self.confirmed = true;
            }
        });
    }
}

fn main() {
    println!("[*] Opening consent gate test window...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 360.0])
            .with_title("Consent Gate Test"),
        ..Default::default()
    };

    let _ = eframe::run_native(
        "Consent Gate Test",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(TestGateApp {
                acknowledged: false,
                confirmed: false,
            }))
        }),
    );
}
