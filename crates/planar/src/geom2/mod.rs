//! 2D value geometry (points, vectors, bounds, segments).
//!
//! Purpose
//! - Immutable, freely copyable value types with exact structural equality.
//! - Segment/segment and line/line intersection in slope/intercept form with a
//!   strict parallel tolerance (`cfg::EQUAL_THRESHOLD`).
//!
//! Data flows one way: `LineSegment` is built from two `Point2F`, derives a
//! `Vector2F` direction and `RectangleF` bounds, and its intersection routines
//! return an optional `Point2F`.
//!
//! References
//! - Code cross-refs: `segment::{intersect, intersect_as_infinite_lines, relation}`,
//!   `cfg::{EQUAL_THRESHOLD, COLLINEAR_EPS}`

pub mod cfg;
mod point;
mod rect;
mod segment;
mod vector;

pub use point::{Point2D, Point2F};
pub use rect::RectangleF;
pub use segment::{intersect, intersect_as_infinite_lines, relation, LineSegment, SegmentRelation};
pub use vector::{Vector2D, Vector2F};

#[cfg(test)]
mod tests;
