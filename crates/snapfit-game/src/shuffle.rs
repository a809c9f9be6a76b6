//! Initial piece scattering.
//!
//! Pieces start spread over the canvas, preferably outside the board so
//! the target area stays visible. Placement is rejection sampling with a
//! bounded attempt count; when the canvas is too crowded to offer a clear
//! spot, the last sampled position is used even if it overlaps the board.

use rand::{Rng, RngExt as _};
use snapfit_core::{Piece, Point, Rect, Size};

/// Maximum random positions tried per piece before overlap is accepted.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50;

/// Extra clearance around the board rect that scattered pieces avoid.
pub const BOARD_KEEP_OUT_MARGIN: f32 = 20.0;

fn sample_coord(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 { rng.random_range(0.0..max) } else { 0.0 }
}

/// Assigns every piece an initial position within the canvas.
///
/// Each piece samples up to [`MAX_PLACEMENT_ATTEMPTS`] uniform positions
/// in `[0, canvas - piece]` and keeps the first whose bounding box clears
/// the board rect expanded by [`BOARD_KEEP_OUT_MARGIN`]. If none clears,
/// the last sample is kept regardless.
pub fn scatter(pieces: &mut [Piece], board: Rect, canvas: Size, rng: &mut impl Rng) {
    let keep_out = board.expanded(BOARD_KEEP_OUT_MARGIN);

    for piece in pieces {
        let max_x = canvas.width - piece.size.width;
        let max_y = canvas.height - piece.size.height;

        let mut position = Point::default();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            position = Point::new(sample_coord(rng, max_x), sample_coord(rng, max_y));
            let bbox = Rect::new(position.x, position.y, piece.size.width, piece.size.height);
            if !bbox.intersects(keep_out) {
                break;
            }
        }
        piece.position = position;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use snapfit_core::{BoardLayout, EdgeProfile, PieceId};

    use super::*;

    fn pieces_for(layout: &BoardLayout) -> Vec<Piece> {
        (0..layout.rows)
            .flat_map(|row| (0..layout.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                Piece::new(PieceId::new(row, col), layout.piece_size(), EdgeProfile::default())
            })
            .collect()
    }

    #[test]
    fn pieces_land_outside_the_padded_board_when_room_exists() {
        let canvas = Size::new(1600.0, 1000.0);
        let layout = BoardLayout::compute(Size::new(800.0, 600.0), canvas, 12);
        let mut pieces = pieces_for(&layout);
        let mut rng = Pcg64Mcg::seed_from_u64(42);

        scatter(&mut pieces, layout.board, canvas, &mut rng);

        let keep_out = layout.board.expanded(BOARD_KEEP_OUT_MARGIN);
        for piece in &pieces {
            assert!(
                !piece.bounding_box().intersects(keep_out),
                "piece {} landed on the board",
                piece.id,
            );
        }
    }

    #[test]
    fn cramped_canvas_falls_back_to_overlap_instead_of_failing() {
        // Board fills 60% of a tiny canvas; most samples overlap it.
        let canvas = Size::new(200.0, 150.0);
        let layout = BoardLayout::compute(Size::new(800.0, 600.0), canvas, 30);
        let mut pieces = pieces_for(&layout);
        let mut rng = Pcg64Mcg::seed_from_u64(3);

        scatter(&mut pieces, layout.board, canvas, &mut rng);

        for piece in &pieces {
            let bbox = piece.bounding_box();
            assert!(bbox.x >= 0.0 && bbox.y >= 0.0);
            assert!(bbox.x + bbox.width <= canvas.width + 1e-3);
            assert!(bbox.y + bbox.height <= canvas.height + 1e-3);
        }
    }

    proptest! {
        #[test]
        fn scattered_pieces_always_stay_on_canvas(
            seed in any::<u64>(),
            count in 0_u32..120,
        ) {
            let canvas = Size::new(1280.0, 800.0);
            let layout = BoardLayout::compute(Size::new(800.0, 600.0), canvas, count);
            let mut pieces = pieces_for(&layout);
            let mut rng = Pcg64Mcg::seed_from_u64(seed);

            scatter(&mut pieces, layout.board, canvas, &mut rng);

            for piece in &pieces {
                let bbox = piece.bounding_box();
                prop_assert!(bbox.x >= 0.0);
                prop_assert!(bbox.y >= 0.0);
                prop_assert!(bbox.x + bbox.width <= canvas.width + 1e-3);
                prop_assert!(bbox.y + bbox.height <= canvas.height + 1e-3);
            }
        }
    }
}
