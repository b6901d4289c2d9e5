//! Consent Gate Module
//! Blocking disclaimer modal shown before the demo is usable. The confirm
//! button stays disabled until the acknowledgment box is checked.

use eframe::egui;

use crate::disclaimer_text::{
    DISCLAIMER_BODY, DISCLAIMER_CHECKBOX_LABEL, DISCLAIMER_CONFIRM_LABEL, DISCLAIMER_NOTICE,
    DISCLAIMER_TITLE,
};

pub struct ConsentGate {
    acknowledged: bool,
}

impl Default for ConsentGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsentGate {
    pub fn new() -> Self {
        Self {
            acknowledged: false,
        }
    }

    /// Runs the host callback if the box is checked. Returns whether it fired.
    fn confirm(&self, on_confirm: impl FnOnce()) -> bool {
        if !self.acknowledged {
            return false;
        }
        on_confirm();
        true
    }

    /// Render the modal for this frame. `on_confirm` is invoked synchronously,
    /// at most once, when the enabled confirm button is clicked.
    pub fn show(&mut self, ctx: &egui::Context, on_confirm: impl FnOnce()) {
        // Dimmed backdrop that also swallows clicks behind the dialog.
        egui::Area::new(egui::Id::new("consent_gate_backdrop"))
            .fixed_pos(egui::Pos2::ZERO)
            .order(egui::Order::Middle)
            .show(ctx, |ui| {
                let screen = ui.ctx().screen_rect();
                ui.allocate_response(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(160));
            });

        egui::Window::new("Disclaimer")
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.set_max_width(420.0);

                ui.vertical_centered(|ui| {
                    ui.heading(DISCLAIMER_TITLE);
                });
                ui.add_space(8.0);

                ui.label(DISCLAIMER_BODY);
                ui.add_space(4.0);
                ui.label(egui::RichText::new(DISCLAIMER_NOTICE).strong());

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                ui.checkbox(&mut self.acknowledged, DISCLAIMER_CHECKBOX_LABEL);
                ui.add_space(8.0);

                // Disabled until the box is checked.
                let confirm = ui.add_enabled(
                    self.acknowledged,
                    egui::Button::new(DISCLAIMER_CONFIRM_LABEL),
                );
                if confirm.clicked() {
                    self.confirm(on_confirm);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_unacknowledged() {
        let gate = ConsentGate::new();
        assert!(!gate.acknowledged);
    }

    #[test]
    fn test_confirm_without_acknowledgment_is_noop() {
        let gate = ConsentGate::new();
        let mut fired = 0;
        assert!(!gate.confirm(|| fired += 1));
        assert_eq!(fired, 0);
    }

    #[test]
    fn test_confirm_after_acknowledgment_fires_once() {
        let mut gate = ConsentGate::new();
        gate.acknowledged = true;
        let mut fired = 0;
        assert!(gate.confirm(|| fired += 1));
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_toggle_sequence_tracks_last_value() {
        let mut gate = ConsentGate::new();
        for _ in 0..5 {
            gate.acknowledged = !gate.acknowledged;
        }
        assert!(gate.acknowledged);
        gate.acknowledged = !gate.acknowledged;
        assert!(!gate.acknowledged);
    }

    #[test]
    fn test_unchecking_disables_confirm_again() {
        let mut gate = ConsentGate::new();
        gate.acknowledged = true;
        gate.acknowledged = false;
        let mut fired = 0;
        assert!(!gate.confirm(|| fired += 1));
        assert_eq!(fired, 0);
    }

    #[test]
    fn test_each_activation_fires_separately() {
        let mut gate = ConsentGate::new();
        gate.acknowledged = true;
        let mut fired = 0;
        gate.confirm(|| fired += 1);
        gate.confirm(|| fired += 1);
        assert_eq!(fired, 2);
    }
}
