//! The piece data model.

use crate::{
    edge::EdgeProfile,
    geom::{Point, Rect, Size},
};

/// Identity of a piece: its cell in the puzzle grid.
///
/// The identity never changes; only a piece's current position and lock
/// state mutate during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct PieceId {
    /// Grid row, 0-based from the top.
    pub row: u32,
    /// Grid column, 0-based from the left.
    pub col: u32,
}

impl PieceId {
    /// Creates the identity for the given grid cell.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// One jigsaw piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    /// Which grid cell this piece belongs to.
    pub id: PieceId,
    /// Offset of the piece's home slot within the board rectangle.
    /// Immutable after generation.
    pub home: Point,
    /// Current top-left position in canvas coordinates. Set by the
    /// shuffler, updated while dragging, frozen once locked.
    pub position: Point,
    /// Piece dimensions; uniform across the grid.
    pub size: Size,
    /// The four interlocking edge shapes.
    pub profile: EdgeProfile,
    /// Whether the piece has snapped into its home slot. Locking is
    /// one-way; locked pieces never move again.
    pub locked: bool,
}

impl Piece {
    /// Creates an unlocked piece at its grid cell with an unset current
    /// position.
    #[must_use]
    pub fn new(id: PieceId, size: Size, profile: EdgeProfile) -> Self {
        #[expect(clippy::cast_precision_loss)]
        let home = Point::new(id.col as f32 * size.width, id.row as f32 * size.height);
        Self {
            id,
            home,
            position: Point::default(),
            size,
            profile,
            locked: false,
        }
    }

    /// The piece's bounding rectangle at its current position. Tests
    /// against the piece rectangle only; tab overhang is intentionally not
    /// part of the hit box.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        )
    }

    /// Where the piece's top-left corner sits when placed correctly on the
    /// given board rectangle.
    #[must_use]
    pub fn home_position_on(&self, board: Rect) -> Point {
        board.origin() + self.home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_offset_follows_grid_cell() {
        let piece = Piece::new(PieceId::new(2, 3), Size::new(50.0, 40.0), EdgeProfile::default());
        assert_eq!(piece.home, Point::new(150.0, 80.0));
        assert!(!piece.locked);
    }

    #[test]
    fn home_position_is_relative_to_board() {
        let piece = Piece::new(PieceId::new(1, 1), Size::new(50.0, 40.0), EdgeProfile::default());
        let board = Rect::new(200.0, 100.0, 300.0, 160.0);
        assert_eq!(piece.home_position_on(board), Point::new(250.0, 140.0));
    }

    #[test]
    fn bounding_box_tracks_current_position() {
        let mut piece =
            Piece::new(PieceId::new(0, 0), Size::new(50.0, 40.0), EdgeProfile::default());
        piece.position = Point::new(10.0, 20.0);
        assert_eq!(piece.bounding_box(), Rect::new(10.0, 20.0, 50.0, 40.0));
    }
}
