//! The playable jigsaw session.
//!
//! Builds on [`snapfit_core`]'s data model: generates an interlocking
//! piece grid, scatters it across the canvas, and runs the drag /
//! snap / win state machine that a UI layer feeds with pointer events.

pub mod clock;
pub mod generator;
pub mod session;
pub mod shuffle;

pub use self::{
    clock::format_mm_ss,
    generator::generate_pieces,
    session::{GameSession, ReleaseOutcome, SNAP_DISTANCE},
    shuffle::{scatter, BOARD_KEEP_OUT_MARGIN, MAX_PLACEMENT_ATTEMPTS},
};
