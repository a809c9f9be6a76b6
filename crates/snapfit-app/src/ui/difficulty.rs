//! Difficulty screen: preview the chosen image and pick a piece count.

use eframe::egui::{Button, Image, TextureId, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    state::PIECE_COUNT_CHOICES,
};

const PREVIEW_WIDTH: f32 = 420.0;

#[derive(Debug, Clone)]
pub struct DifficultyViewModel {
    pub image_name: String,
    pub texture: TextureId,
    /// Width over height of the source image.
    pub aspect: f32,
    pub piece_count: u32,
}

pub fn show(ui: &mut Ui, vm: &DifficultyViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        if ui.button("< Gallery").clicked() {
            action_queue.request(Action::BackToGallery);
        }
    });

    ui.vertical_centered(|ui| {
        ui.heading(&vm.image_name);
        ui.add_space(8.0);

        let size = Vec2::new(PREVIEW_WIDTH, PREVIEW_WIDTH / vm.aspect.max(0.1));
        ui.add(Image::new((vm.texture, size)));
        ui.add_space(12.0);

        ui.label("Pieces");
        ui.horizontal(|ui| {
            for &count in &PIECE_COUNT_CHOICES {
                let button = Button::new(count.to_string()).selected(count == vm.piece_count);
                if ui.add(button).clicked() {
                    action_queue.request(Action::SetPieceCount(count));
                }
            }
        });
        ui.add_space(12.0);

        if ui.button("Start puzzle").clicked() {
            action_queue.request(Action::StartGame);
        }
    });
}
