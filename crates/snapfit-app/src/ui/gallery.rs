//! Gallery screen: pick a built-in or uploaded image.

use eframe::egui::{
    Color32, ImageButton, RichText, ScrollArea, TextureId, Ui, Vec2,
};

use crate::action::{Action, ActionRequestQueue};

const THUMBNAIL_WIDTH: f32 = 220.0;

#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub index: usize,
    pub name: String,
    pub texture: TextureId,
    /// Width over height of the source image.
    pub aspect: f32,
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct GalleryViewModel {
    pub entries: Vec<GalleryEntry>,
    pub upload_error: Option<String>,
}

pub fn show(ui: &mut Ui, vm: &GalleryViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        ui.heading("Snapfit");
        ui.label("Pick an image to puzzle.");
    });
    ui.add_space(8.0);

    if cfg!(not(target_arch = "wasm32")) {
        ui.horizontal(|ui| {
            if ui.button("Upload image\u{2026}").clicked() {
                action_queue.request(Action::RequestUpload);
            }
            if let Some(error) = &vm.upload_error {
                ui.colored_label(Color32::RED, error);
            }
        });
        ui.add_space(8.0);
    }

    ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for entry in &vm.entries {
                show_entry(ui, entry, action_queue);
            }
        });
    });
}

fn show_entry(ui: &mut Ui, entry: &GalleryEntry, action_queue: &mut ActionRequestQueue) {
    let size = Vec2::new(THUMBNAIL_WIDTH, THUMBNAIL_WIDTH / entry.aspect.max(0.1));
    ui.vertical(|ui| {
        if ui
            .add(ImageButton::new((entry.texture, size)))
            .clicked()
        {
            action_queue.request(Action::OpenImage(entry.index));
        }
        ui.horizontal(|ui| {
            ui.label(&entry.name);
            if entry.completed {
                ui.label(RichText::new("\u{2714} solved").color(Color32::DARK_GREEN));
            }
        });
        ui.add_space(6.0);
    });
}
