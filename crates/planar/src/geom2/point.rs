//! Integer and floating-point 2D coordinates.

use std::fmt;
use std::ops::{Add, Sub};

use nalgebra::Vector2;

use super::vector::{Vector2D, Vector2F};

/// Integer coordinate pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point2D {
    type Output = Vector2D;
    /// Wraps on overflow, like unchecked integer coordinates.
    #[inline]
    fn sub(self, rhs: Point2D) -> Vector2D {
        Vector2D::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Floating-point coordinate pair. Equality is exact (no tolerance).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2F {
    pub x: f32,
    pub y: f32,
}

impl Point2F {
    pub const ORIGIN: Point2F = Point2F { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Euclidean distance, evaluated in f64.
    #[inline]
    pub fn distance(&self, other: Point2F) -> f64 {
        (*self - other).magnitude()
    }
}

impl From<Point2D> for Point2F {
    #[inline]
    fn from(p: Point2D) -> Self {
        Point2F::new(p.x as f32, p.y as f32)
    }
}

impl From<Point2F> for Vector2<f32> {
    #[inline]
    fn from(p: Point2F) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<Vector2<f32>> for Point2F {
    #[inline]
    fn from(v: Vector2<f32>) -> Self {
        Point2F::new(v.x, v.y)
    }
}

impl Sub for Point2F {
    type Output = Vector2F;
    #[inline]
    fn sub(self, rhs: Point2F) -> Vector2F {
        Vector2F::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector2F> for Point2F {
    type Output = Point2F;
    #[inline]
    fn add(self, rhs: Vector2F) -> Point2F {
        Point2F::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector2F> for Point2F {
    type Output = Point2F;
    #[inline]
    fn sub(self, rhs: Vector2F) -> Point2F {
        Point2F::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point2F {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
