//! The game session: lifecycle, input state machine, snap and win logic.
//!
//! A session is created once per puzzle, after the image has decoded. It
//! owns the layout, the piece store, and a separate draw-order list, and
//! is fed pointer events (already translated into canvas coordinates) by
//! the UI layer. All mutation happens inside these synchronous calls;
//! dropping the session is its teardown.

use rand::Rng;
use snapfit_core::{BoardLayout, Piece, PieceId, Point, Size};

use crate::{generator, shuffle};

/// Maximum axis distance, in canvas units, at which a released piece
/// snaps into its home slot.
pub const SNAP_DISTANCE: f32 = 30.0;

/// What happened when the pointer was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReleaseOutcome {
    /// The released piece snapped into its home slot and locked.
    pub snapped: bool,
    /// This release completed the puzzle. Reported `true` at most once
    /// per session; the session is terminal afterwards.
    pub won: bool,
}

#[derive(Debug, Clone, Copy)]
struct Selection {
    /// Index into the piece store.
    index: usize,
    /// Pointer offset from the piece's top-left corner, captured at
    /// selection time so the piece does not jump under the cursor.
    grab: Point,
}

/// A running jigsaw puzzle.
///
/// Pieces live in a row-major store indexed by grid cell; a separate
/// draw-order list tracks z-ordering. Reordering for top-layer rendering
/// never disturbs identity lookups.
#[derive(Debug)]
pub struct GameSession {
    image_size: Size,
    canvas: Size,
    layout: BoardLayout,
    pieces: Vec<Piece>,
    /// Store indices, bottom-most first. The hit test walks this in
    /// reverse so the most recently raised piece wins.
    draw_order: Vec<usize>,
    selected: Option<Selection>,
    show_hint: bool,
    started_at: f64,
    elapsed: f64,
    won: bool,
}

impl GameSession {
    /// Sets up a new session: computes the layout, generates the
    /// interlocking grid, and scatters the pieces.
    ///
    /// `now` is the caller's monotonic clock in seconds; subsequent
    /// [`Self::tick`] calls must use the same clock.
    #[must_use]
    pub fn new(
        image_size: Size,
        viewport: Size,
        piece_count: u32,
        now: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let layout = BoardLayout::compute(image_size, viewport, piece_count);
        let mut pieces = generator::generate_pieces(&layout, rng);
        shuffle::scatter(&mut pieces, layout.board, viewport, rng);
        let draw_order = (0..pieces.len()).collect();
        Self {
            image_size,
            canvas: viewport,
            layout,
            pieces,
            draw_order,
            selected: None,
            show_hint: false,
            started_at: now,
            elapsed: 0.0,
            won: false,
        }
    }

    /// The current layout.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// The canvas size the session lays out against.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// All pieces, in row-major store order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Looks up a piece by its grid cell.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        (id.row < self.layout.rows && id.col < self.layout.cols)
            .then(|| &self.pieces[(id.row * self.layout.cols + id.col) as usize])
    }

    /// Pieces in draw order, bottom-most first. The currently selected
    /// piece is always last.
    pub fn pieces_in_draw_order(&self) -> impl Iterator<Item = &Piece> {
        self.draw_order.iter().map(|&index| &self.pieces[index])
    }

    /// The piece currently being dragged, if any.
    #[must_use]
    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.map(|sel| &self.pieces[sel.index])
    }

    /// Whether the hint overlay is enabled.
    #[must_use]
    pub fn show_hint(&self) -> bool {
        self.show_hint
    }

    /// Flips the hint overlay.
    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    /// Whether the puzzle is complete. Won is terminal: input is ignored
    /// and the timer no longer advances.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Elapsed play time in whole seconds, frozen once won.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.elapsed.max(0.0) as u64
        }
    }

    /// Advances the session clock. `now` is the same monotonic clock that
    /// was passed to [`Self::new`]. A no-op once the puzzle is won.
    pub fn tick(&mut self, now: f64) {
        if !self.won {
            self.elapsed = now - self.started_at;
        }
    }

    /// Maps a pointer position in display coordinates (relative to the
    /// canvas's top-left corner) into canvas coordinates, scaling by the
    /// ratio of canvas size to display size. The identity mapping when
    /// both sizes agree.
    #[must_use]
    pub fn to_canvas(&self, display_pos: Point, display_size: Size) -> Point {
        Point::new(
            display_pos.x * (self.canvas.width / display_size.width),
            display_pos.y * (self.canvas.height / display_size.height),
        )
    }

    /// Pointer press: hit-tests unlocked pieces top-down and starts a
    /// drag on the first match, raising it to the top of the draw order.
    /// Returns whether a piece was picked up.
    pub fn pointer_down(&mut self, pos: Point) -> bool {
        if self.won || self.selected.is_some() {
            return false;
        }
        // Walk top-most first; locked pieces never compete.
        let Some(order_slot) = self
            .draw_order
            .iter()
            .rposition(|&index| {
                let piece = &self.pieces[index];
                !piece.locked && piece.bounding_box().contains(pos)
            })
        else {
            return false;
        };

        let index = self.draw_order.remove(order_slot);
        self.draw_order.push(index);
        let piece = &self.pieces[index];
        self.selected = Some(Selection {
            index,
            grab: pos - piece.position,
        });
        true
    }

    /// Pointer move: drags the selected piece, keeping the grab offset.
    /// A no-op when nothing is selected.
    pub fn pointer_move(&mut self, pos: Point) {
        if let Some(sel) = self.selected {
            self.pieces[sel.index].position = pos - sel.grab;
        }
    }

    /// Pointer release: runs the snap test on the held piece, clears the
    /// selection, and re-checks the win condition. A no-op (default
    /// outcome) when nothing is selected.
    pub fn pointer_up(&mut self) -> ReleaseOutcome {
        let Some(sel) = self.selected.take() else {
            return ReleaseOutcome::default();
        };

        let snapped = self.try_snap(sel.index);
        let won = if !self.won && self.pieces.iter().all(|piece| piece.locked) {
            self.won = true;
            true
        } else {
            false
        };
        ReleaseOutcome { snapped, won }
    }

    fn try_snap(&mut self, index: usize) -> bool {
        let piece = &mut self.pieces[index];
        let home = piece.home_position_on(self.layout.board);
        if (piece.position.x - home.x).abs() < SNAP_DISTANCE
            && (piece.position.y - home.y).abs() < SNAP_DISTANCE
        {
            piece.position = home;
            piece.locked = true;
            true
        } else {
            false
        }
    }

    /// Recomputes the layout for a new viewport size.
    ///
    /// The grid dimensions are fixed for the session's lifetime; the
    /// row-major piece store was generated against them. Only the board
    /// rect and piece dimensions change; pieces already placed (locked or
    /// loose) keep their screen positions and home offsets, so pieces
    /// locked before a resize can sit detached from the new board rect.
    pub fn resize(&mut self, viewport: Size) {
        self.canvas = viewport;
        self.layout =
            BoardLayout::for_grid(self.image_size, viewport, self.layout.rows, self.layout.cols);
    }
}
