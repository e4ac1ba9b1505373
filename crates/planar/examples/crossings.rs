//! Print how a handful of segments relate to each other.
//!
//! Usage:
//!   cargo run -p planar --example crossings
//!   cargo run -p planar --example crossings -- random 12

use planar::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "fixed".to_string());
    let segs = match mode.as_str() {
        "fixed" => vec![
            LineSegment::from_coords(0.0, 0.0, 4.0, 4.0),
            LineSegment::from_coords(0.0, 4.0, 4.0, 0.0),
            LineSegment::from_coords(2.0, 0.0, 2.0, 5.0),
            LineSegment::from_coords(0.0, 1.0, 1.0, 2.0),
        ],
        "random" => {
            let n = std::env::args()
                .nth(2)
                .and_then(|s| s.parse().ok())
                .unwrap_or(8);
            draw_segments(SegmentCfg::default(), 2025, n)
        }
        _ => {
            eprintln!("usage: crossings [fixed|random [N]]");
            return;
        }
    };
    for (i, a) in segs.iter().enumerate() {
        for (j, b) in segs.iter().enumerate().skip(i + 1) {
            match relation(a, b) {
                SegmentRelation::Crossing(p) => println!("{i} x {j}: crossing at {p}"),
                SegmentRelation::Disjoint(p) => println!("{i} x {j}: lines meet at {p}, off-segment"),
                other => println!("{i} x {j}: {}", other.label()),
            }
        }
    }
}
