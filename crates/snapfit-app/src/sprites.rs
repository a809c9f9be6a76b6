//! Per-piece sprite cutting.
//!
//! egui has no per-shape clip paths, so the image-to-outline clip happens
//! once at session setup: every piece gets its own alpha-masked sprite cut
//! from the source bitmap. The mask is the piece outline flattened to a
//! polygon and rasterized with an even-odd point-in-polygon test over the
//! source pixels, in parallel across pieces. Per-frame drawing is then a
//! plain textured quad plus an outline stroke.

use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};
use rayon::prelude::*;
use snapfit_core::{OutlinePath, Point, Size};
use snapfit_game::GameSession;

/// One piece's cut-out bitmap, positioned relative to the piece origin.
#[derive(Clone)]
pub struct PieceSprite {
    /// Canvas-space offset from the piece's top-left corner to the
    /// sprite's top-left corner. Negative components when a tab overhangs
    /// the top or left edge.
    pub offset: Point,
    /// Canvas-space draw size of the sprite.
    pub size: Size,
    pub texture: TextureHandle,
}

/// Cuts one sprite per piece from `source`, indexed like
/// `session.pieces()`.
#[must_use]
pub fn cut_piece_sprites(
    ctx: &Context,
    source: &ColorImage,
    session: &GameSession,
) -> Vec<PieceSprite> {
    let layout = session.layout();
    let [source_w, source_h] = source.size;
    #[expect(clippy::cast_precision_loss)]
    let pixel_piece = Size::new(
        source_w as f32 / layout.cols as f32,
        source_h as f32 / layout.rows as f32,
    );
    let canvas_piece = layout.piece_size();
    let scale_x = canvas_piece.width / pixel_piece.width;
    let scale_y = canvas_piece.height / pixel_piece.height;

    let cuts: Vec<(ColorImage, Point, Size)> = session
        .pieces()
        .par_iter()
        .map(|piece| cut_one(source, piece_pixel_origin(piece, pixel_piece), pixel_piece, piece))
        .collect();

    cuts.into_iter()
        .zip(session.pieces())
        .map(|((image, pixel_offset, pixel_size), piece)| PieceSprite {
            offset: Point::new(pixel_offset.x * scale_x, pixel_offset.y * scale_y),
            size: Size::new(pixel_size.width * scale_x, pixel_size.height * scale_y),
            texture: ctx.load_texture(
                format!("piece-{}-{}", piece.id.row, piece.id.col),
                image,
                TextureOptions::LINEAR,
            ),
        })
        .collect()
}

fn piece_pixel_origin(piece: &snapfit_core::Piece, pixel_piece: Size) -> Point {
    #[expect(clippy::cast_precision_loss)]
    Point::new(
        piece.id.col as f32 * pixel_piece.width,
        piece.id.row as f32 * pixel_piece.height,
    )
}

/// Rasterizes one piece mask in source-pixel space. Returns the sprite
/// bitmap plus its offset and size relative to the piece origin, still in
/// source pixels.
fn cut_one(
    source: &ColorImage,
    origin: Point,
    pixel_piece: Size,
    piece: &snapfit_core::Piece,
) -> (ColorImage, Point, Size) {
    let outline = OutlinePath::for_piece(piece.profile, pixel_piece);
    let polygon = outline.flatten();
    let bounds = outline.bounds();

    #[expect(clippy::cast_possible_truncation)]
    let (x0, y0) = (bounds.x.floor() as i32, bounds.y.floor() as i32);
    #[expect(clippy::cast_possible_truncation)]
    let (x1, y1) = (
        (bounds.x + bounds.width).ceil() as i32,
        (bounds.y + bounds.height).ceil() as i32,
    );
    #[expect(clippy::cast_sign_loss)]
    let (sprite_w, sprite_h) = ((x1 - x0).max(1) as usize, (y1 - y0).max(1) as usize);

    let [source_w, source_h] = source.size;
    let mut rgba = vec![0_u8; sprite_w * sprite_h * 4];
    for ly in y0..y1 {
        for lx in x0..x1 {
            #[expect(clippy::cast_precision_loss)]
            let sample = Point::new(lx as f32 + 0.5, ly as f32 + 0.5);
            if !point_in_polygon(sample, &polygon) {
                continue;
            }
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let (sx, sy) = (
                ((origin.x + sample.x).floor().max(0.0) as usize).min(source_w - 1),
                ((origin.y + sample.y).floor().max(0.0) as usize).min(source_h - 1),
            );
            let color = source.pixels[sy * source_w + sx];
            #[expect(clippy::cast_sign_loss)]
            let out = (((ly - y0) as usize) * sprite_w + ((lx - x0) as usize)) * 4;
            rgba[out..out + 4].copy_from_slice(&color.to_srgba_unmultiplied());
        }
    }

    (
        ColorImage::from_rgba_unmultiplied([sprite_w, sprite_h], &rgba),
        Point::new(bounds.x, bounds.y),
        Size::new(bounds.width, bounds.height),
    )
}

/// Even-odd ray-casting test against a closed polygon.
fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
