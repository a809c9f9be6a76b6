//! The play screen: header bar, puzzle canvas, and victory overlay.

use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{canvas, hud, victory};
use crate::{action::ActionRequestQueue, state::ActiveGame};

const HUD_HEIGHT: f32 = 28.0;

pub fn show(ui: &mut Ui, game: &ActiveGame, action_queue: &mut ActionRequestQueue) {
    let hud_vm = hud::HudViewModel {
        image_name: game.image_name.clone(),
        elapsed_seconds: game.session.elapsed_seconds(),
        hint_enabled: game.session.show_hint(),
        won: game.session.is_won(),
    };

    StripBuilder::new(ui)
        .size(Size::exact(HUD_HEIGHT))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                hud::show(ui, &hud_vm, action_queue);
            });
            strip.cell(|ui| {
                let canvas_rect = canvas::show(ui, game, action_queue);
                if let Some(confetti) = &game.confetti {
                    confetti.paint(&ui.painter_at(canvas_rect), canvas_rect);
                }
            });
        });

    if game.session.is_won() {
        let victory_vm = victory::VictoryViewModel {
            image_name: game.image_name.clone(),
            elapsed_seconds: game.session.elapsed_seconds(),
        };
        victory::show(ui.ctx(), &victory_vm, action_queue);
    }
}
