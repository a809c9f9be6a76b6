//! Minimal 2D geometry primitives shared by layout, shuffling, and hit
//! testing.
//!
//! These deliberately mirror the shapes of `egui`'s `Pos2`/`Vec2`/`Rect` so
//! the app layer can convert with one-liners, without this crate depending
//! on any UI toolkit.

/// A point (or offset) in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, in canvas units.
    pub x: f32,
    /// Vertical coordinate, in canvas units.
    pub y: f32,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width, in canvas units.
    pub width: f32,
    /// Height, in canvas units.
    pub height: f32,
}

impl Size {
    /// Creates a size from width and height.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the smaller of the two dimensions.
    #[must_use]
    pub fn min_dimension(self) -> f32 {
        self.width.min(self.height)
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }
}

/// An axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Horizontal coordinate of the left edge.
    pub x: f32,
    /// Vertical coordinate of the top edge.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The top-left corner.
    #[must_use]
    pub const fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The width/height pair.
    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The center point.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether the given point lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Whether this rectangle and `other` overlap.
    #[must_use]
    pub fn intersects(self, other: Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Returns this rectangle grown by `margin` on every side.
    #[must_use]
    pub fn expanded(self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(40.0, 60.0)));
        assert!(r.contains(Point::new(25.0, 30.0)));
        assert!(!r.contains(Point::new(9.9, 30.0)));
        assert!(!r.contains(Point::new(25.0, 60.1)));
    }

    #[test]
    fn intersects_detects_overlap_and_separation() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn expanded_grows_symmetrically() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0).expanded(5.0);
        assert_eq!(r, Rect::new(5.0, 5.0, 30.0, 30.0));
    }

    #[test]
    fn center_is_midpoint() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(r.center(), Point::new(50.0, 25.0));
    }
}
