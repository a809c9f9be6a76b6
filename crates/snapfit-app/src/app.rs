//! Application shell: screen routing, action handling, persistence.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};
use snapfit_game::GameSession;

use crate::{
    action::{Action, ActionRequestQueue},
    sprites,
    state::{self, ActiveGame, AppState, Screen},
    ui::{
        self,
        confetti::Confetti,
        difficulty::DifficultyViewModel,
        gallery::{GalleryEntry, GalleryViewModel},
    },
};

pub struct SnapfitApp {
    state: AppState,
}

impl SnapfitApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let progress = state::load_progress(cc.storage);
        Self {
            state: AppState::new(progress),
        }
    }

    fn handle_all(&mut self, ctx: &Context, action_queue: &mut ActionRequestQueue) {
        for action in action_queue.take_all() {
            self.handle(ctx, action);
        }
    }

    fn handle(&mut self, ctx: &Context, action: Action) {
        match action {
            Action::OpenImage(index) => {
                if index < self.state.library.len() {
                    self.state.selected = Some(index);
                    self.state.screen = Screen::Difficulty;
                }
            }
            Action::RequestUpload => self.upload_image(),
            Action::SetPieceCount(count) => self.state.set_piece_count(count),
            Action::StartGame => self.start_game(ctx),
            Action::CanvasResized(size) => {
                if let Some(game) = &mut self.state.active {
                    game.session.resize(size);
                }
            }
            Action::PointerDown(pos) => {
                if let Some(game) = &mut self.state.active {
                    game.session.pointer_down(pos);
                }
            }
            Action::PointerMoved(pos) => {
                if let Some(game) = &mut self.state.active {
                    game.session.pointer_move(pos);
                }
            }
            Action::PointerReleased => self.finish_release(),
            Action::ToggleHint => {
                if let Some(game) = &mut self.state.active {
                    game.session.toggle_hint();
                }
            }
            Action::BackToGallery => {
                self.state.selected = None;
                self.state.screen = Screen::Gallery;
            }
            Action::QuitGame => {
                // Dropping the game is the session teardown.
                self.state.active = None;
                self.state.selected = None;
                self.state.screen = Screen::Gallery;
            }
            Action::PlayAgain => {
                self.state.active = None;
                self.state.screen = Screen::Difficulty;
            }
        }
    }

    fn finish_release(&mut self) {
        let Some(game) = &mut self.state.active else {
            return;
        };
        let outcome = game.session.pointer_up();
        if outcome.won {
            log::info!(
                "puzzle {} solved in {}s",
                game.image_id,
                game.session.elapsed_seconds()
            );
            game.confetti = Some(Confetti::new(
                game.session.canvas_size(),
                &mut rand::rng(),
            ));
            let id = game.image_id.clone();
            self.state.mark_completed(&id);
            self.state.screen = Screen::Victory;
        }
    }

    fn start_game(&mut self, ctx: &Context) {
        // Resolve the source texture first; the lazy upload needs the
        // library entry mutably.
        let Some(image_texture) = self
            .state
            .selected
            .and_then(|index| self.state.library.get_mut(index))
            .map(|image| image.texture(ctx).clone())
        else {
            return;
        };
        let Some(image) = self.state.selected_image() else {
            return;
        };

        // The canvas has not been laid out yet, so estimate its size from
        // the screen minus the header. The first canvas frame corrects the
        // layout through CanvasResized.
        let screen = ctx.screen_rect();
        let viewport = snapfit_core::Size::new(
            (screen.width() - 16.0).max(200.0),
            (screen.height() - 60.0).max(200.0),
        );

        let now = ctx.input(|i| i.time);
        let mut rng = rand::rng();
        let session = GameSession::new(image.size(), viewport, self.state.piece_count, now, &mut rng);
        log::info!(
            "starting {}: {} pieces as {}x{}",
            image.id,
            session.layout().piece_count(),
            session.layout().rows,
            session.layout().cols
        );

        let piece_sprites = sprites::cut_piece_sprites(ctx, &image.pixels, &session);
        let (image_id, image_name) = (image.id.clone(), image.name.clone());

        self.state.active = Some(ActiveGame {
            image_id,
            image_name,
            session,
            image_texture,
            sprites: piece_sprites,
            confetti: None,
        });
        self.state.screen = Screen::Playing;
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn upload_image(&mut self) {
        use crate::{image_load, state::PuzzleImage};

        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
            .pick_file()
        else {
            return;
        };

        let loaded = std::fs::read(&path)
            .map_err(|err| format!("could not read {}: {err}", path.display()))
            .and_then(|bytes| {
                image_load::decode_puzzle_image(&bytes).map_err(|err| err.to_string())
            });

        match loaded {
            Ok(pixels) => {
                let count = self
                    .state
                    .library
                    .iter()
                    .filter(|image| image.id.starts_with("upload:"))
                    .count();
                let name = path
                    .file_stem()
                    .map_or_else(|| "Upload".to_owned(), |s| s.to_string_lossy().into_owned());
                self.state
                    .library
                    .push(PuzzleImage::new(format!("upload:{count}"), name, pixels));
                self.state.selected = Some(self.state.library.len() - 1);
                self.state.upload = state::PuzzleLoad::Idle;
                self.state.screen = Screen::Difficulty;
            }
            Err(message) => {
                log::warn!("image upload failed: {message}");
                self.state.upload = state::PuzzleLoad::Failed(message);
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    #[expect(clippy::unused_self)]
    fn upload_image(&mut self) {
        // The upload button is not shown on the web build.
        log::warn!("image upload is not available on wasm");
    }

    fn gallery_view_model(&mut self, ctx: &Context) -> GalleryViewModel {
        let completed: Vec<bool> = self
            .state
            .library
            .iter()
            .map(|image| self.state.is_completed(&image.id))
            .collect();
        let entries = self
            .state
            .library
            .iter_mut()
            .zip(completed)
            .enumerate()
            .map(|(index, (image, completed))| GalleryEntry {
                index,
                name: image.name.clone(),
                aspect: image.size().aspect_ratio(),
                texture: image.texture(ctx).id(),
                completed,
            })
            .collect();
        let upload_error = match &self.state.upload {
            state::PuzzleLoad::Idle => None,
            state::PuzzleLoad::Failed(message) => Some(message.clone()),
        };
        GalleryViewModel {
            entries,
            upload_error,
        }
    }

    fn difficulty_view_model(&mut self, ctx: &Context) -> Option<DifficultyViewModel> {
        let index = self.state.selected?;
        let piece_count = self.state.piece_count;
        let image = self.state.library.get_mut(index)?;
        Some(DifficultyViewModel {
            image_name: image.name.clone(),
            aspect: image.size().aspect_ratio(),
            texture: image.texture(ctx).id(),
            piece_count,
        })
    }

    fn advance_animations(&mut self, ctx: &Context) {
        let Some(game) = &mut self.state.active else {
            return;
        };

        game.session.tick(ctx.input(|i| i.time));

        if let Some(confetti) = &mut game.confetti {
            let dt = ctx.input(|i| i.stable_dt).min(0.1);
            confetti.update(dt, &mut rand::rng());
            ctx.request_repaint();
        } else if !game.session.is_won() {
            // Keep the timer label moving without continuous repaints.
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.state.clear_dirty();
        }
    }
}

impl App for SnapfitApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        state::save_progress(storage, &self.state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.advance_animations(ctx);

        match self.state.screen {
            Screen::Gallery => {
                let vm = self.gallery_view_model(ctx);
                CentralPanel::default().show(ctx, |ui| {
                    ui::gallery::show(ui, &vm, &mut action_queue);
                });
            }
            Screen::Difficulty => {
                if let Some(vm) = self.difficulty_view_model(ctx) {
                    CentralPanel::default().show(ctx, |ui| {
                        ui::difficulty::show(ui, &vm, &mut action_queue);
                    });
                } else {
                    action_queue.request(Action::BackToGallery);
                }
            }
            Screen::Playing | Screen::Victory => {
                if let Some(game) = &self.state.active {
                    CentralPanel::default().show(ctx, |ui| {
                        ui::game_screen::show(ui, game, &mut action_queue);
                    });
                } else {
                    action_queue.request(Action::QuitGame);
                }
            }
        }

        self.handle_all(ctx, &mut action_queue);
        self.apply_persistence(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SavedProgress;

    fn app() -> SnapfitApp {
        SnapfitApp {
            state: AppState::new(SavedProgress::default()),
        }
    }

    #[test]
    fn opening_an_image_routes_to_difficulty() {
        let ctx = Context::default();
        let mut app = app();

        app.handle(&ctx, Action::OpenImage(2));
        assert_eq!(app.state.screen, Screen::Difficulty);
        assert_eq!(app.state.selected, Some(2));
    }

    #[test]
    fn opening_an_out_of_range_image_is_ignored() {
        let ctx = Context::default();
        let mut app = app();

        app.handle(&ctx, Action::OpenImage(99));
        assert_eq!(app.state.screen, Screen::Gallery);
        assert_eq!(app.state.selected, None);
    }

    #[test]
    fn start_game_builds_a_session_for_the_selected_image() {
        let ctx = Context::default();
        let mut app = app();

        app.handle(&ctx, Action::OpenImage(0));
        app.handle(&ctx, Action::SetPieceCount(12));
        app.handle(&ctx, Action::StartGame);

        assert_eq!(app.state.screen, Screen::Playing);
        let game = app.state.active.as_ref().unwrap();
        assert_eq!(game.session.layout().piece_count(), 12);
        assert_eq!(game.sprites.len(), 12);
        assert_eq!(game.image_id, "builtin:0");
    }

    #[test]
    fn start_game_without_a_selection_is_ignored() {
        let ctx = Context::default();
        let mut app = app();

        app.handle(&ctx, Action::StartGame);
        assert!(app.state.active.is_none());
        assert_eq!(app.state.screen, Screen::Gallery);
    }

    #[test]
    fn quitting_tears_the_session_down() {
        let ctx = Context::default();
        let mut app = app();

        app.handle(&ctx, Action::OpenImage(1));
        app.handle(&ctx, Action::StartGame);
        assert!(app.state.active.is_some());

        app.handle(&ctx, Action::QuitGame);
        assert!(app.state.active.is_none());
        assert_eq!(app.state.screen, Screen::Gallery);
        assert_eq!(app.state.selected, None);
    }

    #[test]
    fn play_again_keeps_the_image_selection() {
        let ctx = Context::default();
        let mut app = app();

        app.handle(&ctx, Action::OpenImage(3));
        app.handle(&ctx, Action::StartGame);
        app.handle(&ctx, Action::PlayAgain);

        assert!(app.state.active.is_none());
        assert_eq!(app.state.screen, Screen::Difficulty);
        assert_eq!(app.state.selected, Some(3));
    }

    #[test]
    fn piece_count_choice_is_persisted_as_dirty_state() {
        let ctx = Context::default();
        let mut app = app();

        app.handle(&ctx, Action::SetPieceCount(120));
        assert!(app.state.is_dirty());
        assert_eq!(app.state.saved_progress().piece_count, 120);
    }
}
