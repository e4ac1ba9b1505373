//! Planar geometry primitives and segment intersection.
//!
//! Value types only: points, vectors, rectangles, and line segments over a
//! plain Cartesian (x, y) plane. Nothing here allocates shared state, so every
//! operation is safe to call from any thread.
//!
//! API Policy
//! - Coordinates are `f32` (single precision), matching the strict
//!   `2·f32::EPSILON` slope tolerance used for parallel detection.
//! - Magnitudes and angles are reported in `f64`.

pub mod geom2;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{
    intersect, intersect_as_infinite_lines, relation, LineSegment, Point2D, Point2F, RectangleF,
    SegmentRelation, Vector2D, Vector2F,
};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::cfg::{COLLINEAR_EPS, EQUAL_THRESHOLD};
    pub use crate::geom2::{
        intersect, intersect_as_infinite_lines, relation, LineSegment, Point2D, Point2F,
        RectangleF, SegmentRelation, Vector2D, Vector2F,
    };
    pub use crate::rand::{draw_segment, draw_segments, ReplayToken, SegmentCfg};
    pub use nalgebra::Vector2 as Vec2;
}
