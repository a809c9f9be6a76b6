//! Core data model and geometry for the Snapfit jigsaw puzzle.
//!
//! This crate is UI-free: it knows nothing about windows, textures, or
//! pointers. It provides the board layout calculation, the interlocking
//! edge model, the piece data model, and the outline path geometry that
//! the game and app crates build on.

pub mod edge;
pub mod geom;
pub mod layout;
pub mod outline;
pub mod piece;

pub use self::{
    edge::{Edge, EdgeProfile, InvalidEdgeSign},
    geom::{Point, Rect, Size},
    layout::BoardLayout,
    outline::{OutlinePath, PathSegment},
    piece::{Piece, PieceId},
};
