//! Application state, screen routing, and progress persistence.

use std::collections::BTreeSet;

use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};
use serde::{Deserialize, Serialize};
use snapfit_core::Size;
use snapfit_game::GameSession;

use crate::{gallery_images, sprites::PieceSprite, ui::confetti::Confetti};

/// `eframe::Storage` key for [`SavedProgress`].
pub const STORAGE_KEY: &str = "snapfit-progress";

/// Difficulty menu entries.
pub const PIECE_COUNT_CHOICES: [u32; 4] = [12, 30, 60, 120];
pub const DEFAULT_PIECE_COUNT: u32 = 30;

/// Which screen the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Difficulty,
    Playing,
    Victory,
}

/// Outcome of the most recent image upload attempt, surfaced in the
/// gallery. A failed load never starts play.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PuzzleLoad {
    #[default]
    Idle,
    Failed(String),
}

/// A selectable puzzle source: decoded pixels plus a lazily uploaded
/// thumbnail texture.
pub struct PuzzleImage {
    pub id: String,
    pub name: String,
    pub pixels: ColorImage,
    texture: Option<TextureHandle>,
}

impl PuzzleImage {
    #[must_use]
    pub fn new(id: String, name: String, pixels: ColorImage) -> Self {
        Self {
            id,
            name,
            pixels,
            texture: None,
        }
    }

    /// The GPU texture for this image, uploaded on first use.
    pub fn texture(&mut self, ctx: &Context) -> &TextureHandle {
        self.texture.get_or_insert_with(|| {
            ctx.load_texture(self.id.clone(), self.pixels.clone(), TextureOptions::LINEAR)
        })
    }

    /// Image dimensions as a canvas-space size.
    #[must_use]
    pub fn size(&self) -> Size {
        let [w, h] = self.pixels.size;
        #[expect(clippy::cast_precision_loss)]
        Size::new(w as f32, h as f32)
    }
}

/// Everything owned by one running puzzle. Dropping it is the session
/// teardown: pieces, sprites, and confetti all go together.
pub struct ActiveGame {
    pub image_id: String,
    pub image_name: String,
    pub session: GameSession,
    /// Full source image, drawn half-opaque as the hint overlay.
    pub image_texture: TextureHandle,
    /// Per-piece cut-outs, indexed like `session.pieces()`.
    pub sprites: Vec<PieceSprite>,
    /// Present only on the victory screen.
    pub confetti: Option<Confetti>,
}

/// Top-level mutable state behind the UI.
pub struct AppState {
    pub screen: Screen,
    pub library: Vec<PuzzleImage>,
    /// Index into `library`; set when entering difficulty selection.
    pub selected: Option<usize>,
    pub piece_count: u32,
    pub upload: PuzzleLoad,
    /// At most one live session.
    pub active: Option<ActiveGame>,
    completed: BTreeSet<String>,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub fn new(progress: SavedProgress) -> Self {
        let library = gallery_images::builtin_images()
            .into_iter()
            .map(|(id, name, pixels)| PuzzleImage::new(id, name, pixels))
            .collect();
        Self {
            screen: Screen::Gallery,
            library,
            selected: None,
            piece_count: progress.piece_count.max(1),
            upload: PuzzleLoad::default(),
            active: None,
            completed: progress.completed,
            dirty: false,
        }
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&PuzzleImage> {
        self.selected.and_then(|index| self.library.get(index))
    }

    #[must_use]
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn mark_completed(&mut self, id: &str) {
        if self.completed.insert(id.to_owned()) {
            self.dirty = true;
        }
    }

    pub fn set_piece_count(&mut self, count: u32) {
        if self.piece_count != count {
            self.piece_count = count;
            self.dirty = true;
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    #[must_use]
    pub fn saved_progress(&self) -> SavedProgress {
        SavedProgress {
            completed: self.completed.clone(),
            piece_count: self.piece_count,
        }
    }
}

/// The persisted slice of state: completed puzzles and the last chosen
/// difficulty. In-progress puzzles are not saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    pub completed: BTreeSet<String>,
    pub piece_count: u32,
}

impl Default for SavedProgress {
    fn default() -> Self {
        Self {
            completed: BTreeSet::new(),
            piece_count: DEFAULT_PIECE_COUNT,
        }
    }
}

/// Loads progress from eframe storage, falling back to defaults.
#[must_use]
pub fn load_progress(storage: Option<&dyn eframe::Storage>) -> SavedProgress {
    storage
        .and_then(|storage| eframe::get_value(storage, STORAGE_KEY))
        .unwrap_or_default()
}

pub fn save_progress(storage: &mut dyn eframe::Storage, state: &AppState) {
    eframe::set_value(storage, STORAGE_KEY, &state.saved_progress());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_in_the_gallery_with_builtins() {
        let state = AppState::new(SavedProgress::default());
        assert_eq!(state.screen, Screen::Gallery);
        assert_eq!(state.library.len(), 6);
        assert_eq!(state.piece_count, DEFAULT_PIECE_COUNT);
        assert!(state.active.is_none());
        assert!(!state.is_dirty());
    }

    #[test]
    fn marking_completion_dirties_state_once() {
        let mut state = AppState::new(SavedProgress::default());
        state.mark_completed("builtin:2");
        assert!(state.is_completed("builtin:2"));
        assert!(state.is_dirty());

        state.clear_dirty();
        state.mark_completed("builtin:2");
        assert!(!state.is_dirty());
    }

    #[test]
    fn saved_progress_round_trips_through_state() {
        let mut progress = SavedProgress::default();
        progress.completed.insert("builtin:0".to_owned());
        progress.piece_count = 120;

        let state = AppState::new(progress.clone());
        assert!(state.is_completed("builtin:0"));
        assert_eq!(state.saved_progress(), progress);
    }

    #[test]
    fn selected_image_follows_the_selection() {
        let mut state = AppState::new(SavedProgress::default());
        assert!(state.selected_image().is_none());

        state.selected = Some(3);
        let id = state.selected_image().map(|image| image.id.clone());
        assert_eq!(id.as_deref(), Some("builtin:3"));

        state.selected = Some(state.library.len());
        assert!(state.selected_image().is_none());
    }

    #[test]
    fn default_piece_count_is_a_menu_choice() {
        assert!(PIECE_COUNT_CHOICES.contains(&DEFAULT_PIECE_COUNT));
    }
}
