//! egui screens and overlays.

pub mod canvas;
pub mod confetti;
pub mod difficulty;
pub mod gallery;
pub mod game_screen;
pub mod hud;
pub mod victory;
