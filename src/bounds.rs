use nalgebra::{Point2, Vector2};

/// Axis-aligned bounding rectangle, a cheap proxy for a sprite's extent.
///
/// `min` and `max` are not required to be ordered; [`Rect::normalized`]
/// reorders them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Rect {
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self { min, max }
    }

    /// Rectangle from corner coordinates, `(x0, y0)` to `(x1, y1)`
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    /// Square of side `2 * half_extent` centered on `center`
    pub fn centered(center: Point2<f64>, half_extent: f64) -> Self {
        let half = Vector2::new(half_extent, half_extent);
        Self::new(center - half, center + half)
    }

    /// Same rectangle with `min <= max` on both axes
    pub fn normalized(&self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            max: Point2::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn translate(&mut self, delta: &Vector2<f64>) {
        self.min += delta;
        self.max += delta;
    }

    pub fn translated(&self, delta: &Vector2<f64>) -> Self {
        let mut moved = *self;
        moved.translate(delta);
        moved
    }

    /// True if both rectangles, once normalized, share a region of nonzero area.
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
    }
}
