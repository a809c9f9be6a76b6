//! Piece outline path construction.
//!
//! An outline traces the four edges of a piece clockwise from its top-left
//! corner, in piece-local coordinates (the piece rectangle spans `(0, 0)`
//! to `(w, h)`). A flat edge contributes a straight line; a tab or blank
//! contributes two shoulder lines and a cubic bend bulging outward or
//! inward by a fixed fraction of the piece's minor dimension. Tabs
//! therefore extend beyond the piece rectangle by [`tab_depth`].

use crate::{
    edge::EdgeProfile,
    geom::{Point, Rect, Size},
};

/// Fraction of the edge at which the bend's shoulders start and end.
pub const SHOULDER_FRACTION: f32 = 0.35;

/// Depth of a tab or blank bend, as a fraction of `min(width, height)`.
pub const TAB_DEPTH_RATIO: f32 = 0.25;

/// Number of line segments a cubic bend is flattened into.
const FLATTEN_STEPS: u32 = 16;

/// How far a tab protrudes beyond the piece rectangle, for a piece of the
/// given size.
#[must_use]
pub fn tab_depth(piece_size: Size) -> f32 {
    piece_size.min_dimension() * TAB_DEPTH_RATIO
}

/// One step of an outline path, following the current pen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Straight line to the given point.
    Line(Point),
    /// Cubic Bézier curve to `to` with two control points.
    Cubic {
        /// First control point.
        ctrl1: Point,
        /// Second control point.
        ctrl2: Point,
        /// End point of the curve.
        to: Point,
    },
}

/// A closed outline path in piece-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlinePath {
    start: Point,
    segments: Vec<PathSegment>,
}

impl OutlinePath {
    /// Builds the closed outline for a piece with the given edge profile
    /// and size, clockwise from the top-left corner.
    #[must_use]
    pub fn for_piece(profile: EdgeProfile, piece_size: Size) -> Self {
        let Size { width: w, height: h } = piece_size;
        let s = tab_depth(piece_size);
        let lo = SHOULDER_FRACTION;
        let hi = 1.0 - SHOULDER_FRACTION;

        let mut segments = Vec::with_capacity(12);

        // Top: left to right. A tab (+1) bulges upward, toward -y.
        if profile.top.is_flat() {
            segments.push(PathSegment::Line(Point::new(w, 0.0)));
        } else {
            let d = -f32::from(profile.top.sign());
            segments.push(PathSegment::Line(Point::new(w * lo, 0.0)));
            segments.push(PathSegment::Cubic {
                ctrl1: Point::new(w * lo, s * d),
                ctrl2: Point::new(w * hi, s * d),
                to: Point::new(w * hi, 0.0),
            });
            segments.push(PathSegment::Line(Point::new(w, 0.0)));
        }

        // Right: top to bottom. A tab bulges toward +x.
        if profile.right.is_flat() {
            segments.push(PathSegment::Line(Point::new(w, h)));
        } else {
            let d = f32::from(profile.right.sign());
            segments.push(PathSegment::Line(Point::new(w, h * lo)));
            segments.push(PathSegment::Cubic {
                ctrl1: Point::new(w + s * d, h * lo),
                ctrl2: Point::new(w + s * d, h * hi),
                to: Point::new(w, h * hi),
            });
            segments.push(PathSegment::Line(Point::new(w, h)));
        }

        // Bottom: right to left. A tab bulges toward +y.
        if profile.bottom.is_flat() {
            segments.push(PathSegment::Line(Point::new(0.0, h)));
        } else {
            let d = f32::from(profile.bottom.sign());
            segments.push(PathSegment::Line(Point::new(w * hi, h)));
            segments.push(PathSegment::Cubic {
                ctrl1: Point::new(w * hi, h + s * d),
                ctrl2: Point::new(w * lo, h + s * d),
                to: Point::new(w * lo, h),
            });
            segments.push(PathSegment::Line(Point::new(0.0, h)));
        }

        // Left: bottom to top. A tab bulges toward -x.
        if profile.left.is_flat() {
            segments.push(PathSegment::Line(Point::new(0.0, 0.0)));
        } else {
            let d = -f32::from(profile.left.sign());
            segments.push(PathSegment::Line(Point::new(0.0, h * hi)));
            segments.push(PathSegment::Cubic {
                ctrl1: Point::new(s * d, h * hi),
                ctrl2: Point::new(s * d, h * lo),
                to: Point::new(0.0, h * lo),
            });
            segments.push(PathSegment::Line(Point::new(0.0, 0.0)));
        }

        Self {
            start: Point::new(0.0, 0.0),
            segments,
        }
    }

    /// The starting point of the path (also its end point; the path is
    /// closed).
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// The path steps following [`Self::start`].
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Flattens the path into a closed polygon. Cubic bends are sampled at
    /// fixed parameter steps; straight lines contribute their end point.
    ///
    /// The returned polygon does not repeat the starting point at the end.
    #[must_use]
    pub fn flatten(&self) -> Vec<Point> {
        let mut points = vec![self.start];
        for segment in &self.segments {
            match *segment {
                PathSegment::Line(to) => points.push(to),
                PathSegment::Cubic { ctrl1, ctrl2, to } => {
                    let from = *points.last().unwrap_or(&self.start);
                    for step in 1..=FLATTEN_STEPS {
                        #[expect(clippy::cast_precision_loss)]
                        let t = step as f32 / FLATTEN_STEPS as f32;
                        points.push(cubic_point(from, ctrl1, ctrl2, to, t));
                    }
                }
            }
        }
        // The last segment returns to the start; drop the duplicate.
        if let Some(last) = points.last()
            && *last == self.start
        {
            points.pop();
        }
        points
    }

    /// The bounding box of the flattened path, in piece-local coordinates.
    /// For a piece with tabs this extends beyond the piece rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let points = self.flatten();
        let mut min = self.start;
        let mut max = self.start;
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

fn cubic_point(from: Point, ctrl1: Point, ctrl2: Point, to: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    Point::new(
        a * from.x + b * ctrl1.x + c * ctrl2.x + d * to.x,
        a * from.y + b * ctrl1.y + c * ctrl2.y + d * to.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;

    const SIZE: Size = Size::new(100.0, 80.0);

    #[test]
    fn all_flat_profile_is_a_rectangle() {
        let path = OutlinePath::for_piece(EdgeProfile::default(), SIZE);
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Line(Point::new(100.0, 0.0)),
                PathSegment::Line(Point::new(100.0, 80.0)),
                PathSegment::Line(Point::new(0.0, 80.0)),
                PathSegment::Line(Point::new(0.0, 0.0)),
            ]
        );
        assert_eq!(path.flatten().len(), 4);
        assert_eq!(path.bounds(), Rect::new(0.0, 0.0, 100.0, 80.0));
    }

    #[test]
    fn tab_bulges_outward_blank_cuts_inward() {
        let tab_profile = EdgeProfile::new(Edge::Tab, Edge::Flat, Edge::Flat, Edge::Flat);
        let tab_bounds = OutlinePath::for_piece(tab_profile, SIZE).bounds();
        // A top tab extends above y = 0.
        assert!(tab_bounds.y < 0.0);

        let blank_profile = EdgeProfile::new(Edge::Blank, Edge::Flat, Edge::Flat, Edge::Flat);
        let blank_bounds = OutlinePath::for_piece(blank_profile, SIZE).bounds();
        // A blank stays inside the piece rectangle.
        assert!(blank_bounds.y >= 0.0);
    }

    #[test]
    fn bend_depth_scales_with_minor_dimension() {
        // Cubic with symmetric control points at depth s peaks at 0.75 * s.
        let s = tab_depth(SIZE);
        assert!((s - 20.0).abs() < f32::EPSILON);

        let profile = EdgeProfile::new(Edge::Tab, Edge::Flat, Edge::Flat, Edge::Flat);
        let bounds = OutlinePath::for_piece(profile, SIZE).bounds();
        assert!((bounds.y - (-0.75 * s)).abs() < 0.5);
    }

    #[test]
    fn flattened_polygon_stays_within_tab_depth_margin() {
        let profile = EdgeProfile::new(Edge::Tab, Edge::Blank, Edge::Tab, Edge::Blank);
        let path = OutlinePath::for_piece(profile, SIZE);
        let s = tab_depth(SIZE);
        for p in path.flatten() {
            assert!(p.x >= -s - 1e-3 && p.x <= SIZE.width + s + 1e-3);
            assert!(p.y >= -s - 1e-3 && p.y <= SIZE.height + s + 1e-3);
        }
    }
}
