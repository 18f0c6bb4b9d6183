//! Immutable 2D coordinate shared by meshes and sequences.
use glam::DVec2;
use mint::Point2;

/// A point on the plane.
///
/// Equality is exact coordinate equality; no tolerance is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if the point lies in `[0, side_length] x [0, side_length]`.
    pub fn is_within(&self, side_length: f64) -> bool {
        (0.0..=side_length).contains(&self.x) && (0.0..=side_length).contains(&self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2 { x: p.x, y: p.y }
    }
}
