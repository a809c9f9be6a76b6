//! Shared library module for the Snapfit app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod gallery_images;
pub mod image_load;
pub mod sprites;
pub mod state;
pub mod ui;

pub use app::SnapfitApp;
