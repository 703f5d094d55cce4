//! Point-file I/O: CSV or OBJ in, CSV out.
//!
//! Input
//! - CSV: `x,y` or `x,y,z` per line. Fields are parsed left to right and
//!   parsing stops at the first field that is not a finite number.
//! - OBJ: only `v x y z` lines; everything else is ignored.
//! - Lines yielding fewer than 2 numbers are skipped, not fatal.
//! - The set is 3D iff some line supplied a nonzero z.
//!
//! Output
//! - CSV with two decimals, `x,y` for 2D sets and `x,y,z` for 3D sets.

use anyhow::{bail, Context, Result};
use hullscan::{Point, PointSet};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Input flavor, chosen from the file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Obj,
}

impl Format {
    /// `.obj` (any case) selects OBJ; everything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("obj") => Format::Obj,
            _ => Format::Csv,
        }
    }
}

/// Parsed points plus the number of lines that were skipped.
#[derive(Debug)]
pub struct Loaded {
    pub set: PointSet,
    pub skipped: usize,
}

/// Leading finite numeric fields, at most three. `nan`/`inf` end the run
/// like any other non-number.
fn leading_numbers<'a>(fields: impl Iterator<Item = &'a str>) -> Vec<f64> {
    fields
        .map(|f| f.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .take_while(Option::is_some)
        .flatten()
        .take(3)
        .collect()
}

fn parse_line(line: &str, format: Format) -> Option<Point> {
    let nums = match format {
        Format::Csv => leading_numbers(line.split(',')),
        Format::Obj => leading_numbers(line.strip_prefix("v ")?.split_whitespace()),
    };
    match nums[..] {
        [x, y] => Some(Point::planar(x, y)),
        [x, y, z, ..] => Some(Point::new(x, y, z)),
        _ => None,
    }
}

/// Reads points from any buffered reader.
pub fn read_points<R: BufRead>(reader: R, format: Format) -> Result<Loaded> {
    let mut points = Vec::new();
    let mut skipped = 0usize;
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", lineno + 1))?;
        match parse_line(&line, format) {
            Some(p) => points.push(p),
            None => {
                // OBJ files are mostly non-vertex lines; only count CSV misses.
                if format == Format::Csv {
                    tracing::debug!(line = lineno + 1, "skipping malformed record");
                    skipped += 1;
                }
            }
        }
    }
    points.shrink_to_fit();
    Ok(Loaded {
        set: PointSet::new(points),
        skipped,
    })
}

pub fn load_points(path: &Path) -> Result<Loaded> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_points(BufReader::new(file), Format::from_path(path))
        .with_context(|| format!("loading {}", path.display()))
}

/// Writes one `x,y[,z]` line per point, two decimals.
pub fn write_points<W: Write>(set: &PointSet, mut out: W) -> std::io::Result<()> {
    for p in set.points() {
        if set.is_3d() {
            writeln!(out, "{:.2},{:.2},{:.2}", p.x, p.y, p.z)?;
        } else {
            writeln!(out, "{:.2},{:.2}", p.x, p.y)?;
        }
    }
    out.flush()
}

pub fn save_points(set: &PointSet, path: &Path) -> Result<()> {
    if set.is_empty() {
        bail!("refusing to write an empty point set to {}", path.display());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_points(set, BufWriter::new(file)).with_context(|| format!("writing {}", path.display()))
}
