//! Built-in gallery images.
//!
//! The gallery ships a fixed set of procedurally generated bitmaps so the
//! app works offline and deterministically. Each generator fills an
//! 800x600 RGBA buffer with a distinct pattern.

use eframe::egui::ColorImage;

pub const IMAGE_WIDTH: usize = 800;
pub const IMAGE_HEIGHT: usize = 600;

/// Stable identifier prefix for built-in images, used as the persistence
/// key for puzzle completion.
pub const BUILTIN_ID_PREFIX: &str = "builtin:";

/// Generates the built-in image set as `(id, name, image)` triples.
#[must_use]
pub fn builtin_images() -> Vec<(String, String, ColorImage)> {
    let generators: [(&str, fn(f32, f32) -> [u8; 3]); 6] = [
        ("Sunset", sunset),
        ("Tiles", tiles),
        ("Ripples", ripples),
        ("Slopes", slopes),
        ("Plasma", plasma),
        ("Color Wheel", color_wheel),
    ];

    generators
        .iter()
        .enumerate()
        .map(|(index, &(name, pixel))| {
            (
                format!("{BUILTIN_ID_PREFIX}{index}"),
                name.to_owned(),
                generate(pixel),
            )
        })
        .collect()
}

/// Renders one image by evaluating `pixel` at every coordinate.
fn generate(pixel: fn(f32, f32) -> [u8; 3]) -> ColorImage {
    let mut rgba = Vec::with_capacity(IMAGE_WIDTH * IMAGE_HEIGHT * 4);
    for y in 0..IMAGE_HEIGHT {
        for x in 0..IMAGE_WIDTH {
            #[expect(clippy::cast_precision_loss)]
            let [r, g, b] = pixel(x as f32, y as f32);
            rgba.extend_from_slice(&[r, g, b, 0xff]);
        }
    }
    ColorImage::from_rgba_unmultiplied([IMAGE_WIDTH, IMAGE_HEIGHT], &rgba)
}

#[expect(clippy::cast_precision_loss)]
const HEIGHT_F: f32 = IMAGE_HEIGHT as f32;
#[expect(clippy::cast_precision_loss)]
const WIDTH_F: f32 = IMAGE_WIDTH as f32;

fn sunset(x: f32, y: f32) -> [u8; 3] {
    let t = y / HEIGHT_F;
    let sky = lerp_rgb([0xff, 0xb3, 0x47], [0x5a, 0x2a, 0x83], t);
    let dx = x - WIDTH_F * 0.5;
    let dy = y - HEIGHT_F * 0.62;
    if (dx * dx + dy * dy).sqrt() < 70.0 {
        [0xff, 0xf2, 0xcc]
    } else {
        sky
    }
}

fn tiles(x: f32, y: f32) -> [u8; 3] {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (col, row) = ((x / 100.0) as u32, (y / 100.0) as u32);
    #[expect(clippy::cast_precision_loss)]
    let hue = ((col * 47 + row * 101) % 360) as f32;
    let value = if (col + row) % 2 == 0 { 0.9 } else { 0.55 };
    hsv_to_rgb(hue, 0.65, value)
}

fn ripples(x: f32, y: f32) -> [u8; 3] {
    let dx = x - WIDTH_F * 0.5;
    let dy = y - HEIGHT_F * 0.5;
    let dist = (dx * dx + dy * dy).sqrt();
    let wave = ((dist / 24.0).sin() + 1.0) * 0.5;
    lerp_rgb([0x0b, 0x3d, 0x66], [0x7f, 0xd4, 0xe8], wave)
}

fn slopes(x: f32, y: f32) -> [u8; 3] {
    let band = ((x + y * 0.5) / 60.0).floor();
    let hue = (band * 33.0).rem_euclid(360.0);
    hsv_to_rgb(hue, 0.7, 0.85)
}

fn plasma(x: f32, y: f32) -> [u8; 3] {
    let v = (x / 47.0).sin() + (y / 31.0).sin() + ((x + y) / 59.0).sin();
    let t = (v / 3.0 + 1.0) * 0.5;
    hsv_to_rgb(t * 300.0, 0.8, 0.9)
}

fn color_wheel(x: f32, y: f32) -> [u8; 3] {
    let dx = x - WIDTH_F * 0.5;
    let dy = y - HEIGHT_F * 0.5;
    let hue = dy.atan2(dx).to_degrees().rem_euclid(360.0);
    let sat = ((dx * dx + dy * dy).sqrt() / (HEIGHT_F * 0.5)).min(1.0);
    hsv_to_rgb(hue, sat, 0.95)
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    std::array::from_fn(|i| {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (f32::from(a[i]) + (f32::from(b[i]) - f32::from(a[i])) * t).round() as u8
        }
    })
}

/// `h` in degrees, `s` and `v` in `[0, 1]`.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let c = v * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp {
        hp if hp < 1.0 => (c, x, 0.0),
        hp if hp < 2.0 => (x, c, 0.0),
        hp if hp < 3.0 => (0.0, c, x),
        hp if hp < 4.0 => (0.0, x, c),
        hp if hp < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        [
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_images_have_the_expected_dimensions() {
        let images = builtin_images();
        assert_eq!(images.len(), 6);
        for (id, _, image) in &images {
            assert!(id.starts_with(BUILTIN_ID_PREFIX));
            assert_eq!(image.size, [IMAGE_WIDTH, IMAGE_HEIGHT]);
        }
    }

    #[test]
    fn ids_are_unique() {
        let images = builtin_images();
        for (i, (id_a, ..)) in images.iter().enumerate() {
            for (id_b, ..) in &images[i + 1..] {
                assert_ne!(id_a, id_b);
            }
        }
    }

    #[test]
    fn images_are_visually_distinct() {
        let images = builtin_images();
        let probe = |image: &ColorImage| {
            [
                image.pixels[0],
                image.pixels[IMAGE_WIDTH * 300 + 400],
                image.pixels[IMAGE_WIDTH * 599 + 799],
            ]
        };
        for (i, (_, _, a)) in images.iter().enumerate() {
            for (_, _, b) in &images[i + 1..] {
                assert_ne!(probe(a), probe(b));
            }
        }
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), [0, 0, 255]);
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), [255, 255, 255]);
    }
}
