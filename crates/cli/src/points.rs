//! Point-file parsing and display labels.
//!
//! Format: one point per line, two whitespace-separated decimal numbers.
//! Blank lines are skipped. Labels follow read order: `A..Z`, then `1A..1Z`,
//! `2A..` and so on.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use quickhull2d::Point;
use serde::Serialize;

/// A parsed input point with its display label.
///
/// The label is owned by this layer; the core only ever sees coordinates.
#[derive(Clone, Debug, Serialize)]
pub struct LabeledPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl LabeledPoint {
    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Label for the `index`-th point in read order.
pub fn label_for(index: usize) -> String {
    let letter = (b'A' + (index % 26) as u8) as char;
    if index < 26 {
        letter.to_string()
    } else {
        format!("{}{}", index / 26, letter)
    }
}

/// Read labeled points from a text file.
pub fn read_points(path: &Path) -> Result<Vec<LabeledPoint>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading point file {}", path.display()))?;
    parse_points(&text)
}

fn parse_points(text: &str) -> Result<Vec<LabeledPoint>> {
    let mut out = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(xs), Some(ys)) = (fields.next(), fields.next()) else {
            bail!("line {}: expected two coordinates, got {line:?}", lineno + 1);
        };
        if fields.next().is_some() {
            bail!("line {}: expected two coordinates, got {line:?}", lineno + 1);
        }
        let x: f64 = xs
            .parse()
            .with_context(|| format!("line {}: bad x coordinate {xs:?}", lineno + 1))?;
        let y: f64 = ys
            .parse()
            .with_context(|| format!("line {}: bad y coordinate {ys:?}", lineno + 1))?;
        out.push(LabeledPoint {
            label: label_for(out.len()),
            x,
            y,
        });
    }
    Ok(out)
}
