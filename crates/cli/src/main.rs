use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use planar::rand::{draw_segments, SegmentCfg, MAX_EXTENT};
use planar::LineSegment;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;
mod sweep;

use provenance::{write_sidecar, Payload};
use sweep::{sweep, PairOut};

#[derive(Parser)]
#[command(name = "segx")]
#[command(about = "Segment intersection queries and batch sweeps")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Relate two segments given as X0 Y0 X1 Y1 X2 Y2 X3 Y3
    Pair {
        #[arg(num_args = 8, required = true, allow_negative_numbers = true)]
        coords: Vec<f32>,
        /// Intersect the infinite lines through the segments instead
        #[arg(long)]
        lines: bool,
    },
    /// Test all segment pairs of a CSV (columns x0,y0,x1,y1) and write crossings as JSON
    Sweep {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write reproducible random segments as CSV
    Generate {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 100.0)]
        half_extent: f32,
        #[arg(long, default_value_t = 1.0)]
        min_length: f32,
        #[arg(long, default_value_t = 50.0)]
        max_length: f32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Pair { coords, lines } => pair(&coords, lines),
        Action::Sweep { input, out } => run_sweep(input, out, cmd.tag),
        Action::Generate {
            count,
            seed,
            half_extent,
            min_length,
            max_length,
            out,
        } => {
            let cfg = SegmentCfg {
                half_extent,
                min_length,
                max_length,
            };
            generate(cfg, count, seed, out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn pair(coords: &[f32], lines: bool) -> Result<()> {
    ensure!(coords.len() == 8, "expected 8 coordinates, got {}", coords.len());
    let a = LineSegment::from_coords(coords[0], coords[1], coords[2], coords[3]);
    let b = LineSegment::from_coords(coords[4], coords[5], coords[6], coords[7]);
    let out = if lines {
        PairOut::lines(&a, &b)
    } else {
        PairOut::segments(&a, &b)
    };
    tracing::info!(%a, %b, relation = out.relation, "pair");
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run_sweep(input: PathBuf, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "sweep");
    let segs = io::read_segments(&input)?;
    let report = sweep(&segs);
    tracing::info!(
        segments = report.segments,
        pairs = report.pairs,
        crossings = report.crossings.len(),
        "sweep_done"
    );

    io::ensure_parent(&out)?;
    std::fs::write(&out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(
        "sweep",
        json!({
            "input": input.to_string_lossy(),
            "segments": report.segments,
        }),
        tag,
    );
    write_sidecar(&out, payload)?;
    Ok(())
}

fn generate(
    cfg: SegmentCfg,
    count: usize,
    seed: u64,
    out: PathBuf,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(count, seed, out = %out.display(), tag = ?tag, "generate");
    ensure!(
        cfg.half_extent > 0.0 && cfg.half_extent <= MAX_EXTENT,
        "--half-extent must be in (0, {MAX_EXTENT:e}]"
    );
    ensure!(
        cfg.min_length.is_finite() && cfg.max_length.is_finite(),
        "--min-length and --max-length must be finite"
    );
    ensure!(
        cfg.min_length >= 0.0 && cfg.max_length >= cfg.min_length,
        "need 0 <= --min-length <= --max-length"
    );
    let segs = draw_segments(cfg, seed, count);
    io::write_segments(&out, &segs)?;

    let payload = Payload::new(
        "generate",
        json!({
            "count": count,
            "seed": seed,
            "half_extent": cfg.half_extent,
            "min_length": cfg.min_length,
            "max_length": cfg.max_length,
        }),
        tag,
    );
    write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::document(&Payload::new("report", json!({}), tag), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn pair_accepts_negative_coordinates() {
        let cmd = Cmd::try_parse_from([
            "segx", "pair", "0", "0", "1", "1", "2", "0", "3", "-1", "--lines",
        ])
        .unwrap();
        match cmd.action {
            Action::Pair { coords, lines } => {
                assert_eq!(coords.len(), 8);
                assert_eq!(coords[7], -1.0);
                assert!(lines);
            }
            _ => panic!("expected pair"),
        }
    }

    #[test]
    fn generate_then_sweep_round_trip() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("segs.csv");
        let hits = dir.path().join("out/hits.json");
        generate(SegmentCfg::default(), 40, 9, csv.clone(), Some("t".into())).unwrap();
        assert!(dir.path().join("segs.provenance.json").exists());
        run_sweep(csv, hits.clone(), None).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&hits).unwrap()).unwrap();
        assert_eq!(parsed["segments"], 40);
        assert_eq!(parsed["pairs"], 40 * 39 / 2);
        assert!(dir.path().join("out/hits.provenance.json").exists());
    }

    #[test]
    fn generate_rejects_inverted_lengths() {
        let dir = tempdir().unwrap();
        let cfg = SegmentCfg {
            half_extent: 10.0,
            min_length: 5.0,
            max_length: 1.0,
        };
        assert!(generate(cfg, 3, 0, dir.path().join("x.csv"), None).is_err());
    }

    #[test]
    fn generate_rejects_unsamplable_ranges() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("x.csv");
        let huge = SegmentCfg {
            half_extent: 3.0e38,
            ..SegmentCfg::default()
        };
        let err = generate(huge, 3, 0, out.clone(), None).unwrap_err();
        assert!(err.to_string().contains("--half-extent"));
        let unbounded = SegmentCfg {
            max_length: f32::INFINITY,
            ..SegmentCfg::default()
        };
        let err = generate(unbounded, 3, 0, out.clone(), None).unwrap_err();
        assert!(err.to_string().contains("finite"));
        let nan = SegmentCfg {
            half_extent: f32::NAN,
            ..SegmentCfg::default()
        };
        assert!(generate(nan, 3, 0, out.clone(), None).is_err());
        assert!(!out.exists());
    }
}
