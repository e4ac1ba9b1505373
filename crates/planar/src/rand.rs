//! Random segments in a square window (replay tokens for reproducibility).
//!
//! Purpose
//! - Deterministic segment workloads for benchmarks, property checks, and the
//!   CLI `generate` command.
//!
//! Model
//! - Pick a start uniformly in `[-half_extent, half_extent]²`, a direction
//!   uniformly in [0, 2π), and a length in `[min_length, max_length]`; the end
//!   is clamped back into the window.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{LineSegment, Point2F, Vector2F};

/// Largest usable `half_extent` and segment length. Sampling ranges up to twice
/// this wide keep their scale finite in f32.
pub const MAX_EXTENT: f32 = f32::MAX / 4.0;

/// Sampler configuration. Values are clamped into `[0, MAX_EXTENT]` when drawing.
#[derive(Clone, Copy, Debug)]
pub struct SegmentCfg {
    /// Half side length of the sampling window centered at the origin.
    pub half_extent: f32,
    pub min_length: f32,
    pub max_length: f32,
}

impl Default for SegmentCfg {
    fn default() -> Self {
        Self {
            half_extent: 100.0,
            min_length: 1.0,
            max_length: 50.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one segment. The same token always yields the same segment.
pub fn draw_segment(cfg: SegmentCfg, tok: ReplayToken) -> LineSegment {
    let mut rng = tok.to_std_rng();
    // NaN.max/min pick the other operand, so every bound below is finite.
    let h = cfg.half_extent.abs().min(MAX_EXTENT).max(f32::MIN_POSITIVE);
    let lo = cfg.min_length.max(0.0).min(MAX_EXTENT);
    let hi = cfg.max_length.max(lo).min(MAX_EXTENT);
    let start = Point2F::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h));
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let len = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
    let end = start + Vector2F::from_polar(len as f64, theta);
    let end = Point2F::new(end.x.clamp(-h, h), end.y.clamp(-h, h));
    LineSegment::new(start, end)
}

/// Draw `count` segments with indices `0..count` under `seed`.
pub fn draw_segments(cfg: SegmentCfg, seed: u64, count: usize) -> Vec<LineSegment> {
    (0..count as u64)
        .map(|index| draw_segment(cfg, ReplayToken::new(seed, index)))
        .collect()
}
