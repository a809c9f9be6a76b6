//! Victory overlay shown above the finished board.

use eframe::egui::{Align2, Context, RichText, Window};
use snapfit_game::format_mm_ss;

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone)]
pub struct VictoryViewModel {
    pub image_name: String,
    pub elapsed_seconds: u64,
}

pub fn show(ctx: &Context, vm: &VictoryViewModel, action_queue: &mut ActionRequestQueue) {
    Window::new("Puzzle complete")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&vm.image_name).strong());
                ui.label(format!(
                    "Solved in {}",
                    format_mm_ss(vm.elapsed_seconds)
                ));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Play again").clicked() {
                        action_queue.request(Action::PlayAgain);
                    }
                    if ui.button("Gallery").clicked() {
                        action_queue.request(Action::QuitGame);
                    }
                });
            });
        });
}
