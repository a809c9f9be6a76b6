//! Board layout calculation.
//!
//! Derives the grid dimensions from the image aspect ratio and the
//! requested piece count, then sizes and centers the board rectangle
//! within the viewport.

use crate::geom::{Rect, Size};

/// Largest fraction of the viewport (per axis) the board may occupy.
/// The remainder is the staging area for scattered pieces.
pub const BOARD_VIEWPORT_FRACTION: f32 = 0.6;

/// The computed playing-field geometry for one puzzle.
///
/// A layout is a pure function of the image size, the viewport size, and
/// the requested piece count. It is recomputed on viewport resize;
/// recomputation never regenerates pieces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Number of piece rows (>= 1).
    pub rows: u32,
    /// Number of piece columns (>= 1).
    pub cols: u32,
    /// The board rectangle, centered in the viewport.
    pub board: Rect,
    /// Width of every piece (`board.width / cols`).
    pub piece_width: f32,
    /// Height of every piece (`board.height / rows`).
    pub piece_height: f32,
}

impl BoardLayout {
    /// Computes the layout for an image of `image_size` shown in a
    /// viewport of `viewport`, cut into roughly `piece_count` pieces.
    ///
    /// The column count is `round(sqrt(piece_count * aspect))` and the row
    /// count `round(piece_count / cols)`, both clamped to at least 1, so
    /// degenerate requests (0 or 1 piece) still yield a usable grid. The
    /// board fills at most 60% of the viewport on each axis while keeping
    /// the image aspect ratio, and is centered.
    #[must_use]
    pub fn compute(image_size: Size, viewport: Size, piece_count: u32) -> Self {
        let aspect = image_size.aspect_ratio();

        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cols = ((piece_count as f32 * aspect).sqrt().round() as u32).max(1);
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rows = ((piece_count as f32 / cols as f32).round() as u32).max(1);

        Self::for_grid(image_size, viewport, rows, cols)
    }

    /// Computes the layout for an already-chosen grid. The grid rounding
    /// in [`Self::compute`] is not a fixed point of its own output, so a
    /// layout recomputed for a new viewport must reuse the dimensions the
    /// existing piece store was generated with.
    #[must_use]
    pub fn for_grid(image_size: Size, viewport: Size, rows: u32, cols: u32) -> Self {
        let aspect = image_size.aspect_ratio();

        let mut board_width = viewport.width * BOARD_VIEWPORT_FRACTION;
        let mut board_height = board_width / aspect;
        let max_board_height = viewport.height * BOARD_VIEWPORT_FRACTION;
        if board_height > max_board_height {
            board_height = max_board_height;
            board_width = board_height * aspect;
        }

        let board = Rect::new(
            (viewport.width - board_width) / 2.0,
            (viewport.height - board_height) / 2.0,
            board_width,
            board_height,
        );

        #[expect(clippy::cast_precision_loss)]
        Self {
            rows,
            cols,
            board,
            piece_width: board_width / cols as f32,
            piece_height: board_height / rows as f32,
        }
    }

    /// Total number of pieces in the grid.
    #[must_use]
    pub const fn piece_count(&self) -> u32 {
        self.rows * self.cols
    }

    /// Size of a single piece.
    #[must_use]
    pub const fn piece_size(&self) -> Size {
        Size::new(self.piece_width, self.piece_height)
    }
}
