//! The puzzle canvas: piece rendering and pointer translation.
//!
//! Draw order, bottom to top: background, board scrim, optional hint
//! image, grid separator lines, locked pieces, loose pieces in draw
//! order, and the selected piece last.

use eframe::egui::{
    Color32, Painter, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, TextureId, Ui, Vec2,
};
use snapfit_core::{OutlinePath, Piece, Point};
use snapfit_game::GameSession;

use crate::{
    action::{Action, ActionRequestQueue},
    sprites::PieceSprite,
    state::ActiveGame,
};

const SCRIM_COLOR: Color32 = Color32::from_black_alpha(40);
// Half-transparent white, premultiplied by hand: `from_white_alpha` is
// not usable in a const.
const HINT_TINT: Color32 = Color32::from_rgba_premultiplied(128, 128, 128, 128);
const GRID_LINE_COLOR: Color32 = Color32::from_black_alpha(70);
const LOCKED_OUTLINE: Color32 = Color32::from_black_alpha(60);
const LOOSE_OUTLINE: Color32 = Color32::from_black_alpha(160);

/// Shows the canvas, translating pointer interaction into session
/// actions. Returns the screen rect the canvas occupied so overlays can
/// align with it.
pub fn show(ui: &mut Ui, game: &ActiveGame, action_queue: &mut ActionRequestQueue) -> Rect {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::drag());
    let session = &game.session;

    let display = snapfit_core::Size::new(rect.width(), rect.height());
    let canvas = session.canvas_size();
    if (display.width - canvas.width).abs() > 0.5 || (display.height - canvas.height).abs() > 0.5 {
        action_queue.request(Action::CanvasResized(display));
    }

    if let Some(pos) = response.interact_pointer_pos() {
        let local = Point::new(pos.x - rect.min.x, pos.y - rect.min.y);
        let canvas_pos = session.to_canvas(local, display);
        if response.drag_started() {
            action_queue.request(Action::PointerDown(canvas_pos));
        } else if response.dragged() {
            action_queue.request(Action::PointerMoved(canvas_pos));
        }
    }
    if response.drag_stopped() {
        action_queue.request(Action::PointerReleased);
    }

    let map = CanvasMap::new(rect, canvas);
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
    draw_board(&painter, session, &map, game.image_texture.id());
    draw_pieces(ui, &painter, game, &map);

    rect
}

/// Canvas-to-screen coordinate mapping for one frame.
struct CanvasMap {
    origin: Pos2,
    scale: Vec2,
}

impl CanvasMap {
    fn new(rect: Rect, canvas: snapfit_core::Size) -> Self {
        Self {
            origin: rect.min,
            scale: Vec2::new(
                rect.width() / canvas.width.max(1.0),
                rect.height() / canvas.height.max(1.0),
            ),
        }
    }

    fn pos(&self, p: Point) -> Pos2 {
        self.origin + Vec2::new(p.x * self.scale.x, p.y * self.scale.y)
    }

    fn rect(&self, r: snapfit_core::Rect) -> Rect {
        Rect::from_min_size(
            self.pos(r.origin()),
            Vec2::new(r.width * self.scale.x, r.height * self.scale.y),
        )
    }
}

fn draw_board(painter: &Painter, session: &GameSession, map: &CanvasMap, hint: TextureId) {
    let layout = session.layout();
    let board = map.rect(layout.board);

    painter.rect_filled(board, 0.0, SCRIM_COLOR);

    if session.show_hint() {
        let uv = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
        painter.image(hint, board, uv, HINT_TINT);
    }

    let stroke = Stroke::new(1.0, GRID_LINE_COLOR);
    for col in 1..layout.cols {
        #[expect(clippy::cast_precision_loss)]
        let x = board.min.x + col as f32 * layout.piece_width * map.scale.x;
        painter.line_segment([Pos2::new(x, board.min.y), Pos2::new(x, board.max.y)], stroke);
    }
    for row in 1..layout.rows {
        #[expect(clippy::cast_precision_loss)]
        let y = board.min.y + row as f32 * layout.piece_height * map.scale.y;
        painter.line_segment([Pos2::new(board.min.x, y), Pos2::new(board.max.x, y)], stroke);
    }

    painter.rect_stroke(board, 0.0, Stroke::new(1.0, GRID_LINE_COLOR), StrokeKind::Outside);
}

fn draw_pieces(ui: &Ui, painter: &Painter, game: &ActiveGame, map: &CanvasMap) {
    let session = &game.session;
    let cols = session.layout().cols as usize;
    let selected_id = session.selected_piece().map(|piece| piece.id);
    let sprite_of =
        |piece: &Piece| &game.sprites[piece.id.row as usize * cols + piece.id.col as usize];

    for piece in session.pieces_in_draw_order().filter(|piece| piece.locked) {
        draw_piece(painter, piece, sprite_of(piece), map, Stroke::new(1.0, LOCKED_OUTLINE));
    }
    for piece in session
        .pieces_in_draw_order()
        .filter(|piece| !piece.locked && selected_id != Some(piece.id))
    {
        draw_piece(painter, piece, sprite_of(piece), map, Stroke::new(1.0, LOOSE_OUTLINE));
    }
    if let Some(piece) = session.selected_piece() {
        let highlight = Stroke::new(2.0, ui.visuals().selection.stroke.color);
        draw_piece(painter, piece, sprite_of(piece), map, highlight);
    }
}

fn draw_piece(
    painter: &Painter,
    piece: &Piece,
    sprite: &PieceSprite,
    map: &CanvasMap,
    stroke: Stroke,
) {
    let sprite_rect = Rect::from_min_size(
        map.pos(piece.position + sprite.offset),
        Vec2::new(sprite.size.width * map.scale.x, sprite.size.height * map.scale.y),
    );
    let uv = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
    painter.image(sprite.texture.id(), sprite_rect, uv, Color32::WHITE);

    let outline = OutlinePath::for_piece(piece.profile, piece.size);
    let points = outline
        .flatten()
        .into_iter()
        .map(|p| map.pos(piece.position + p))
        .collect();
    painter.add(Shape::closed_line(points, stroke));
}
