//! In-game header bar: quit, title, timer, hint toggle.

use eframe::egui::{Align, Button, Layout, RichText, Ui};
use snapfit_game::format_mm_ss;

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone)]
pub struct HudViewModel {
    pub image_name: String,
    pub elapsed_seconds: u64,
    pub hint_enabled: bool,
    pub won: bool,
}

pub fn show(ui: &mut Ui, vm: &HudViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        if ui.button("< Gallery").clicked() {
            action_queue.request(Action::QuitGame);
        }
        ui.separator();
        ui.label(RichText::new(&vm.image_name).strong());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(format_mm_ss(vm.elapsed_seconds)).monospace());
            ui.separator();
            let hint = Button::new("Hint").selected(vm.hint_enabled);
            if ui.add_enabled(!vm.won, hint).clicked() {
                action_queue.request(Action::ToggleHint);
            }
        });
    });
}
