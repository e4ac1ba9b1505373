//! Direction-and-magnitude values.
//!
//! - `Vector2F`: f32 components, polar accessors in f64, exact equality.
//! - `Vector2D`: integer components; mixes into `Vector2F` arithmetic.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};

use nalgebra::Vector2;

/// Integer vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2D {
    pub x: i32,
    pub y: i32,
}

impl Vector2D {
    pub const EMPTY: Vector2D = Vector2D { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl From<Vector2D> for Vector2F {
    #[inline]
    fn from(v: Vector2D) -> Self {
        Vector2F::new(v.x as f32, v.y as f32)
    }
}

/// Floating-point vector `(x, y)`.
///
/// Invariants:
/// - Pure value: every operation returns a new vector.
/// - `==` is exact componentwise equality; `Hash` agrees with it.
/// - `from_polar(r, θ)` recovers `magnitude ≈ r`, `angle ≈ θ` with θ in (−π, π].
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector2F {
    pub x: f32,
    pub y: f32,
}

impl Vector2F {
    /// The zero vector.
    pub const EMPTY: Vector2F = Vector2F { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `(r·cos θ, r·sin θ)`, narrowed to f32.
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new((r * theta.cos()) as f32, (r * theta.sin()) as f32)
    }

    /// Exact comparison against the zero vector, not a magnitude threshold.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Length, evaluated in f64.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        Vector2::new(self.x as f64, self.y as f64).norm()
    }

    /// Direction `atan2(y, x)` in (−π, π].
    #[inline]
    pub fn angle(&self) -> f64 {
        (self.y as f64).atan2(self.x as f64)
    }

    #[inline]
    pub fn add(self, other: Vector2F) -> Vector2F {
        self + other
    }

    #[inline]
    pub fn subtract(self, other: Vector2F) -> Vector2F {
        self - other
    }

    #[inline]
    pub fn invert(self) -> Vector2F {
        -self
    }

    #[inline]
    pub fn dot(&self, other: Vector2F) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Signed area of the parallelogram spanned by `self` and `other`.
    /// Positive for self→other counterclockwise.
    #[inline]
    pub fn cross(&self, other: Vector2F) -> f32 {
        self.x * other.y - self.y * other.x
    }
}

impl PartialEq for Vector2F {
    #[inline]
    fn eq(&self, other: &Vector2F) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl PartialEq<Vector2D> for Vector2F {
    #[inline]
    fn eq(&self, other: &Vector2D) -> bool {
        self.x == other.x as f32 && self.y == other.y as f32
    }
}

// 0.0 == -0.0, so both must hash alike.
#[inline]
fn canonical_bits(v: f32) -> u32 {
    if v == 0.0 {
        0.0f32.to_bits()
    } else {
        v.to_bits()
    }
}

impl Hash for Vector2F {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl Add for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn add(self, rhs: Vector2F) -> Self::Output {
        Vector2F::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<Vector2D> for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn add(self, rhs: Vector2D) -> Self::Output {
        Vector2F::new(self.x + rhs.x as f32, self.y + rhs.y as f32)
    }
}

impl Sub for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn sub(self, rhs: Vector2F) -> Self::Output {
        Vector2F::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<Vector2D> for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn sub(self, rhs: Vector2D) -> Self::Output {
        Vector2F::new(self.x - rhs.x as f32, self.y - rhs.y as f32)
    }
}

impl Neg for Vector2F {
    type Output = Vector2F;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2F::new(0.0 - self.x, 0.0 - self.y)
    }
}

impl From<Vector2F> for Vector2<f32> {
    #[inline]
    fn from(v: Vector2F) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2<f32>> for Vector2F {
    #[inline]
    fn from(v: Vector2<f32>) -> Self {
        Vector2F::new(v.x, v.y)
    }
}

impl fmt::Display for Vector2F {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
