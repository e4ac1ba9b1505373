//! Tolerance defaults for 2D segment geometry.
//!
//! Policy
//! - Defaults are fixed constants. The parallel threshold is deliberately tiny:
//!   it only catches (near-)exact slope equality. Callers that need a looser
//!   notion of "parallel" should round their inputs first.

/// Slope difference at or below which two non-vertical lines are parallel.
/// Two units of `f32::EPSILON`.
pub const EQUAL_THRESHOLD: f32 = f32::EPSILON * 2.0;

/// Relative tolerance for the collinearity test in `LineSegment::contains_point`.
/// Scaled by `|direction| · |p − start|`.
pub const COLLINEAR_EPS: f32 = f32::EPSILON * 4.0;
