//! All-pairs segment sweep and its JSON report.

use planar::{relation, LineSegment, Point2F, SegmentRelation};
use serde::Serialize;
use std::collections::BTreeMap;

/// One segment pair that meets, by row index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crossing {
    pub a: usize,
    pub b: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Serialize)]
pub struct SweepReport {
    pub segments: usize,
    pub pairs: usize,
    /// Relation label -> number of pairs.
    pub summary: BTreeMap<&'static str, usize>,
    pub crossings: Vec<Crossing>,
}

/// Test every pair `i < j`.
pub fn sweep(segs: &[LineSegment]) -> SweepReport {
    let mut summary = BTreeMap::new();
    let mut crossings = Vec::new();
    let mut pairs = 0;
    for (i, a) in segs.iter().enumerate() {
        for (j, b) in segs.iter().enumerate().skip(i + 1) {
            pairs += 1;
            let rel = relation(a, b);
            *summary.entry(rel.label()).or_insert(0) += 1;
            if let SegmentRelation::Crossing(p) = rel {
                crossings.push(Crossing { a: i, b: j, x: p.x, y: p.y });
            }
        }
    }
    SweepReport {
        segments: segs.len(),
        pairs,
        summary,
        crossings,
    }
}

/// JSON-friendly view of a point.
#[derive(Debug, Serialize)]
pub struct PointOut {
    pub x: f32,
    pub y: f32,
}

impl From<Point2F> for PointOut {
    fn from(p: Point2F) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Result of the `pair` command.
#[derive(Debug, Serialize)]
pub struct PairOut {
    pub relation: &'static str,
    pub point: Option<PointOut>,
}

impl PairOut {
    pub fn segments(a: &LineSegment, b: &LineSegment) -> Self {
        let rel = relation(a, b);
        let point = match rel {
            SegmentRelation::Crossing(p) | SegmentRelation::Disjoint(p) => Some(p.into()),
            _ => None,
        };
        Self {
            relation: rel.label(),
            point,
        }
    }

    pub fn lines(a: &LineSegment, b: &LineSegment) -> Self {
        match a.intersect_as_infinite_lines(b) {
            Some(p) => Self {
                relation: "lines_meet",
                point: Some(p.into()),
            },
            None => Self {
                relation: "no_line_intersection",
                point: None,
            },
        }
    }
}
