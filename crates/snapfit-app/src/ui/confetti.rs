//! Victory confetti overlay.
//!
//! Purely decorative particle shower: colored rectangles fall, sway, and
//! spin over the finished board, respawning at the top as they leave the
//! bottom edge.

use eframe::egui::{Color32, Painter, Pos2, Rect, Shape, Vec2};
use rand::{Rng, RngExt as _};
use snapfit_core::Size;

pub const PARTICLE_COUNT: usize = 300;

const COLORS: [Color32; 6] = [
    Color32::from_rgb(0xf9, 0x41, 0x44),
    Color32::from_rgb(0xf3, 0x72, 0x2c),
    Color32::from_rgb(0xf8, 0x96, 0x1e),
    Color32::from_rgb(0x43, 0xaa, 0x8b),
    Color32::from_rgb(0x57, 0x75, 0x90),
    Color32::from_rgb(0xb5, 0x6f, 0xd1),
];

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    size: f32,
    /// Fall speed in canvas units per second.
    fall: f32,
    sway_phase: f32,
    sway_amplitude: f32,
    angle: f32,
    spin: f32,
    color: Color32,
}

/// A running confetti shower sized to one canvas.
#[derive(Debug, Clone)]
pub struct Confetti {
    bounds: Size,
    particles: Vec<Particle>,
}

impl Confetti {
    /// Spawns the shower with particles staggered above and across the
    /// canvas so the first frames already look mid-fall.
    #[must_use]
    pub fn new(bounds: Size, rng: &mut impl Rng) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.random_range(0.0..bounds.width.max(1.0)),
                y: rng.random_range(-bounds.height.max(1.0)..0.0),
                size: rng.random_range(6.0..12.0),
                fall: rng.random_range(60.0..180.0),
                sway_phase: rng.random_range(0.0..std::f32::consts::TAU),
                sway_amplitude: rng.random_range(10.0..40.0),
                angle: rng.random_range(0.0..std::f32::consts::TAU),
                spin: rng.random_range(-4.0..4.0),
                color: COLORS[rng.random_range(0..COLORS.len())],
            })
            .collect();
        Self { bounds, particles }
    }

    /// Advances the shower by `dt` seconds.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        for p in &mut self.particles {
            p.y += p.fall * dt;
            p.sway_phase += 2.0 * dt;
            p.x += p.sway_phase.sin() * p.sway_amplitude * dt;
            p.angle += p.spin * dt;
            if p.y > self.bounds.height + p.size {
                p.y = -p.size;
                p.x = rng.random_range(0.0..self.bounds.width.max(1.0));
            }
        }
    }

    /// Paints the shower into `area`, stretching the canvas-space
    /// positions to fit.
    pub fn paint(&self, painter: &Painter, area: Rect) {
        let scale = Vec2::new(
            area.width() / self.bounds.width.max(1.0),
            area.height() / self.bounds.height.max(1.0),
        );
        for p in &self.particles {
            let center = area.min + Vec2::new(p.x * scale.x, p.y * scale.y);
            painter.add(Shape::convex_polygon(
                rotated_corners(center, p.size, p.size * 0.6, p.angle),
                p.color,
                eframe::egui::Stroke::NONE,
            ));
        }
    }
}

fn rotated_corners(center: Pos2, width: f32, height: f32, angle: f32) -> Vec<Pos2> {
    let (sin, cos) = angle.sin_cos();
    let rotate = |dx: f32, dy: f32| center + Vec2::new(dx * cos - dy * sin, dx * sin + dy * cos);
    let (hw, hh) = (width * 0.5, height * 0.5);
    vec![
        rotate(-hw, -hh),
        rotate(hw, -hh),
        rotate(hw, hh),
        rotate(-hw, hh),
    ]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn shower_starts_above_the_canvas() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let confetti = Confetti::new(Size::new(800.0, 600.0), &mut rng);
        assert_eq!(confetti.particles.len(), PARTICLE_COUNT);
        assert!(confetti.particles.iter().all(|p| p.y < 0.0));
    }

    #[test]
    fn fallen_particles_respawn_at_the_top() {
        let bounds = Size::new(800.0, 600.0);
        let mut rng = Pcg64Mcg::seed_from_u64(4);
        let mut confetti = Confetti::new(bounds, &mut rng);

        // Long enough for every particle to cross the canvas at least
        // once at the slowest fall speed.
        for _ in 0..1200 {
            confetti.update(1.0 / 60.0, &mut rng);
        }

        for p in &confetti.particles {
            assert!(p.y <= bounds.height + p.size + 4.0, "particle below canvas: {}", p.y);
            assert!(p.x.is_finite());
        }
    }
}
