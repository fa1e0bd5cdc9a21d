use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use quickhull2d::hull::PointSet;
use quickhull2d::{convex_hull, Point};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;

use points::{read_points, LabeledPoint};

#[derive(Parser)]
#[command(name = "hull")]
#[command(about = "Convex hull of a 2D point file (quickhull)")]
struct Cmd {
    /// Point file; prompts for a path on stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Emit a JSON report instead of labeled console output
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    points: &'a [LabeledPoint],
    hull: Vec<&'a LabeledPoint>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let path = match cmd.input {
        Some(p) => p,
        None => PathBuf::from(prompt_for_path()?),
    };
    let labeled = read_points(&path)?;
    tracing::info!(file = %path.display(), count = labeled.len(), "loaded points");

    let input: Vec<Point> = labeled.iter().map(LabeledPoint::point).collect();
    let hull = convex_hull(&input).context("computing convex hull")?;
    tracing::info!(vertices = hull.len(), "hull computed");

    // Duplicate coordinates collapse in the core; the first label wins here.
    let mut seen = PointSet::new();
    let mut hull_points: Vec<&LabeledPoint> = Vec::new();
    for lp in &labeled {
        let p = lp.point();
        if hull.contains(p) && seen.insert(p) {
            hull_points.push(lp);
        }
    }

    if cmd.json {
        let report = JsonReport {
            points: &labeled,
            hull: hull_points,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("All points:");
    for lp in &labeled {
        println!("{}: {}, {}", lp.label, lp.x, lp.y);
    }
    println!();
    println!("Found points:");
    for lp in &hull_points {
        println!("{}: {}, {}", lp.label, lp.x, lp.y);
    }
    Ok(())
}

fn prompt_for_path() -> Result<String> {
    println!("specify file path:");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading file path from stdin")?;
    let line = line.trim();
    ensure!(!line.is_empty(), "no file path given");
    Ok(line.to_string())
}
