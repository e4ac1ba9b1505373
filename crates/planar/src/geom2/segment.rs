//! Finite line segments and their intersections.
//!
//! Algorithm (slope/intercept form)
//! - Vertical lines (`start.x == end.x`) are solved by substituting their x into
//!   the other line's `y = m·x + b`; two verticals are parallel.
//! - Otherwise slopes within `EQUAL_THRESHOLD` are parallel (coincident lines
//!   included); else `x = (b2 − b1)/(m1 − m2)`, `y = m1·x + b1`.
//! - A segment hit additionally requires the point inside both x-spans (and the
//!   y-span for vertical segments, whose x-span is a single value).
//!
//! Degenerate input
//! - A zero-length segment defines no line: `intersect_as_infinite_lines` is
//!   `None`; `intersect` treats it as a point and tests membership instead.
//! - NaN coordinates never produce an intersection point.

use std::cmp::Ordering;
use std::fmt;

use super::cfg::{COLLINEAR_EPS, EQUAL_THRESHOLD};
use super::point::Point2F;
use super::rect::RectangleF;
use super::vector::Vector2F;

/// Immutable segment between two points.
///
/// Invariants:
/// - `direction == end − start`, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    start: Point2F,
    end: Point2F,
    direction: Vector2F,
}

impl LineSegment {
    #[inline]
    pub fn new(start: Point2F, end: Point2F) -> Self {
        Self {
            start,
            end,
            direction: end - start,
        }
    }

    /// Convenience constructor from raw coordinates.
    #[inline]
    pub fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point2F::new(x0, y0), Point2F::new(x1, y1))
    }

    #[inline]
    pub fn start(&self) -> Point2F {
        self.start
    }
    #[inline]
    pub fn end(&self) -> Point2F {
        self.end
    }
    #[inline]
    pub fn direction(&self) -> Vector2F {
        self.direction
    }

    /// Axis-aligned box exactly spanning both endpoints.
    #[inline]
    pub fn bounds(&self) -> RectangleF {
        RectangleF::from_corners(self.start, self.end)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction.magnitude()
    }

    /// `start.x == end.x`; zero-length segments count as vertical too.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn has_nan(&self) -> bool {
        self.start.has_nan() || self.end.has_nan()
    }

    /// `m` in `y = m·x + b`; `None` for vertical segments.
    #[inline]
    pub fn slope(&self) -> Option<f32> {
        if self.is_vertical() {
            None
        } else {
            Some(self.slope_unchecked())
        }
    }

    /// `b` in `y = m·x + b`; `None` for vertical segments.
    #[inline]
    pub fn intercept(&self) -> Option<f32> {
        self.slope().map(|m| self.intercept_for(m))
    }

    #[inline]
    fn slope_unchecked(&self) -> f32 {
        (self.end.y - self.start.y) / (self.end.x - self.start.x)
    }

    #[inline]
    fn intercept_for(&self, m: f32) -> f32 {
        self.start.y - m * self.start.x
    }

    /// `min(start.x, end.x) <= p.x <= max(start.x, end.x)`.
    #[inline]
    pub fn within_x(&self, p: Point2F) -> bool {
        (p.x >= self.start.x && p.x <= self.end.x) || (p.x <= self.start.x && p.x >= self.end.x)
    }

    /// `min(start.y, end.y) <= p.y <= max(start.y, end.y)`.
    #[inline]
    pub fn within_y(&self, p: Point2F) -> bool {
        (p.y >= self.start.y && p.y <= self.end.y) || (p.y <= self.start.y && p.y >= self.end.y)
    }

    /// Bounding-box membership; looser than `contains_point`.
    #[inline]
    pub fn rect_contains_point(&self, p: Point2F) -> bool {
        self.within_x(p) && self.within_y(p)
    }

    /// Segment membership: inside the bounds and collinear up to `COLLINEAR_EPS`
    /// (relative to `|direction|·|p − start|`).
    pub fn contains_point(&self, p: Point2F) -> bool {
        if self.is_degenerate() {
            return p == self.start;
        }
        if !self.rect_contains_point(p) {
            return false;
        }
        let rel = p - self.start;
        let scale = self.direction.magnitude() as f32 * rel.magnitude() as f32;
        self.direction.cross(rel).abs() <= COLLINEAR_EPS * scale
    }

    /// Span check for a point already known to lie on this segment's line.
    #[inline]
    fn covers(&self, p: Point2F) -> bool {
        self.within_x(p) && (!self.is_vertical() || self.within_y(p))
    }

    /// Intersection with `other` as finite segments.
    #[inline]
    pub fn intersect(&self, other: &LineSegment) -> Option<Point2F> {
        intersect(self, other)
    }

    /// Intersection with `other` with both extended infinitely.
    #[inline]
    pub fn intersect_as_infinite_lines(&self, other: &LineSegment) -> Option<Point2F> {
        intersect_as_infinite_lines(self, other)
    }

    /// Full classification against `other`.
    #[inline]
    pub fn relation(&self, other: &LineSegment) -> SegmentRelation {
        relation(self, other)
    }

    #[inline]
    fn key(&self) -> [f32; 4] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }
}

impl From<(Point2F, Point2F)> for LineSegment {
    #[inline]
    fn from((start, end): (Point2F, Point2F)) -> Self {
        LineSegment::new(start, end)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.start, self.end)
    }
}

/// Outcome of testing two segments against each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentRelation {
    /// The segments meet at this point.
    Crossing(Point2F),
    /// Both vertical, or slopes equal within `EQUAL_THRESHOLD` (coincident included).
    Parallel,
    /// The infinite lines cross at this point, outside at least one segment.
    Disjoint(Point2F),
    /// A zero-length segment whose point is not on the other segment.
    Degenerate,
    /// NaN in either segment's coordinates.
    Invalid,
}

impl SegmentRelation {
    #[inline]
    pub fn crossing_point(&self) -> Option<Point2F> {
        match *self {
            SegmentRelation::Crossing(p) => Some(p),
            _ => None,
        }
    }
    #[inline]
    pub fn is_crossing(&self) -> bool {
        matches!(self, SegmentRelation::Crossing(_))
    }
    #[inline]
    pub fn is_parallel(&self) -> bool {
        matches!(self, SegmentRelation::Parallel)
    }
    /// Short stable label, e.g. for tabular output.
    pub fn label(&self) -> &'static str {
        match self {
            SegmentRelation::Crossing(_) => "crossing",
            SegmentRelation::Parallel => "parallel",
            SegmentRelation::Disjoint(_) => "disjoint",
            SegmentRelation::Degenerate => "degenerate",
            SegmentRelation::Invalid => "invalid",
        }
    }
}

// Total order on coordinates so (a, b) and (b, a) run the same arithmetic.
fn canonical_pair<'a>(
    l1: &'a LineSegment,
    l2: &'a LineSegment,
) -> (&'a LineSegment, &'a LineSegment) {
    let ord = l1
        .key()
        .iter()
        .zip(l2.key().iter())
        .map(|(a, b)| a.total_cmp(b))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or(Ordering::Equal);
    if ord == Ordering::Greater {
        (l2, l1)
    } else {
        (l1, l2)
    }
}

/// Intersection of the infinite lines through `l1` and `l2`.
///
/// Returns `None` for parallel (including coincident) lines, for zero-length
/// input, and whenever the result would contain NaN.
pub fn intersect_as_infinite_lines(l1: &LineSegment, l2: &LineSegment) -> Option<Point2F> {
    if l1.is_degenerate() || l2.is_degenerate() {
        return None;
    }
    let (l1, l2) = canonical_pair(l1, l2);
    let p = if l1.is_vertical() {
        if l2.is_vertical() {
            return None;
        }
        // Plug l1's x into l2's formula.
        let m = l2.slope_unchecked();
        let b = l2.intercept_for(m);
        Point2F::new(l1.start.x, m * l1.start.x + b)
    } else if l2.is_vertical() {
        let m = l1.slope_unchecked();
        let b = l1.intercept_for(m);
        Point2F::new(l2.start.x, m * l2.start.x + b)
    } else {
        let m1 = l1.slope_unchecked();
        let m2 = l2.slope_unchecked();
        let dm = m1 - m2;
        if dm.is_nan() || dm.abs() <= EQUAL_THRESHOLD {
            return None;
        }
        let b1 = l1.intercept_for(m1);
        let b2 = l2.intercept_for(m2);
        // m1·x + b1 = m2·x + b2  =>  x = (b2 − b1)/(m1 − m2)
        let x = (b2 - b1) / dm;
        Point2F::new(x, m1 * x + b1)
    };
    if p.has_nan() {
        None
    } else {
        Some(p)
    }
}

/// Classify how two segments relate.
pub fn relation(l1: &LineSegment, l2: &LineSegment) -> SegmentRelation {
    if l1.has_nan() || l2.has_nan() {
        return SegmentRelation::Invalid;
    }
    match (l1.is_degenerate(), l2.is_degenerate()) {
        (true, true) => {
            if l1.start == l2.start {
                SegmentRelation::Crossing(l1.start)
            } else {
                SegmentRelation::Degenerate
            }
        }
        (true, false) => point_on(l1.start, l2),
        (false, true) => point_on(l2.start, l1),
        (false, false) => match intersect_as_infinite_lines(l1, l2) {
            None => SegmentRelation::Parallel,
            Some(p) if l1.covers(p) && l2.covers(p) => SegmentRelation::Crossing(p),
            Some(p) => SegmentRelation::Disjoint(p),
        },
    }
}

#[inline]
fn point_on(p: Point2F, l: &LineSegment) -> SegmentRelation {
    if l.contains_point(p) {
        SegmentRelation::Crossing(p)
    } else {
        SegmentRelation::Degenerate
    }
}

/// Intersection of `l1` and `l2` as finite segments, or `None` if they are
/// parallel or their lines meet outside either segment.
#[inline]
pub fn intersect(l1: &LineSegment, l2: &LineSegment) -> Option<Point2F> {
    relation(l1, l2).crossing_point()
}
