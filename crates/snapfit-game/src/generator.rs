//! Piece grid generation.
//!
//! Pieces are generated in a single pass, row by row, left to right. Each
//! piece's top and left edges are the mates of edges already decided on
//! its neighbors; only its right and bottom edges are freshly randomized
//! (or flat on the grid border). Every shared edge is therefore decided
//! exactly once, which is what guarantees that facing edges always mate.

use rand::{Rng, RngExt as _};
use snapfit_core::{BoardLayout, Edge, EdgeProfile, Piece, PieceId};

fn random_edge(rng: &mut impl Rng) -> Edge {
    if rng.random_bool(0.5) { Edge::Tab } else { Edge::Blank }
}

/// Generates the full piece set for a layout, in row-major order.
///
/// The returned vector is indexed by `row * cols + col`; this ordering is
/// relied upon by [`crate::GameSession`]'s identity lookups.
#[must_use]
pub fn generate_pieces(layout: &BoardLayout, rng: &mut impl Rng) -> Vec<Piece> {
    let rows = layout.rows;
    let cols = layout.cols;
    let mut pieces: Vec<Piece> = Vec::with_capacity(layout.piece_count() as usize);

    for row in 0..rows {
        for col in 0..cols {
            let top = if row == 0 {
                Edge::Flat
            } else {
                pieces[((row - 1) * cols + col) as usize].profile.bottom.mate()
            };
            let left = if col == 0 {
                Edge::Flat
            } else {
                pieces[(row * cols + col - 1) as usize].profile.right.mate()
            };
            let right = if col == cols - 1 {
                Edge::Flat
            } else {
                random_edge(rng)
            };
            let bottom = if row == rows - 1 {
                Edge::Flat
            } else {
                random_edge(rng)
            };

            pieces.push(Piece::new(
                PieceId::new(row, col),
                layout.piece_size(),
                EdgeProfile::new(top, right, bottom, left),
            ));
        }
    }

    pieces
}
