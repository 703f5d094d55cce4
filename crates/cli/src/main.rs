use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hullscan::prelude::*;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod io;
mod provenance;

#[derive(Parser, Debug)]
#[command(name = "hullscan", version)]
#[command(about = "2D convex hull (parallel-sort Graham scan) with area and perimeter")]
struct Cmd {
    /// Input points: CSV (x,y[,z]) or OBJ (v x y z)
    #[arg(required_unless_present = "benchmark")]
    input: Option<PathBuf>,

    /// Output CSV for the hull vertices
    #[arg(required_unless_present = "benchmark")]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Mode::Hull)]
    mode: Mode,

    /// Force 2D or 3D output (default: auto-detect)
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
    dim: Option<u8>,

    /// Worker threads for the parallel sort phase
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    threads: u32,

    /// Time the hull on synthetic sets of 100/1000/10000 points; no file I/O
    #[arg(long)]
    benchmark: bool,

    /// Also write a `<output>.provenance.json` run report
    #[arg(long, conflicts_with = "benchmark")]
    provenance: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Compute the convex hull
    Hull,
}

impl Mode {
    fn as_str(self) -> &'static str {
        match self {
            Mode::Hull => "hull",
        }
    }
}

impl Cmd {
    fn forced_dim(&self) -> Option<Dim> {
        self.dim.map(|d| if d == 3 { Dim::Three } else { Dim::Two })
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    // Usage errors exit with 1, help/version with 0.
    let cmd = match Cmd::try_parse() {
        Ok(cmd) => cmd,
        Err(err) => {
            let code = i32::from(err.use_stderr());
            err.print()?;
            std::process::exit(code);
        }
    };
    if cmd.benchmark {
        benchmark(&cmd)
    } else {
        run(&cmd)
    }
}

fn fmt_metric(name: &str, value: &hullscan::Result<f64>) -> String {
    match value {
        Ok(v) => format!("{v:.2}"),
        Err(err) => {
            tracing::warn!(metric = name, %err, "metric_unavailable");
            "n/a".to_string()
        }
    }
}

fn run(cmd: &Cmd) -> Result<()> {
    let input = cmd.input.as_deref().context("missing input path")?;
    let output = cmd.output.as_deref().context("missing output path")?;
    let threads = cmd.threads as usize;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        mode = cmd.mode.as_str(),
        threads,
        "run"
    );
    let start = Instant::now();

    let io::Loaded { mut set, skipped } = io::load_points(input)?;
    if let Some(dim) = cmd.forced_dim() {
        set.set_dim(dim);
    }
    tracing::info!(points = set.len(), skipped, dim = ?set.dim(), "loaded");
    println!(
        "Loaded {} points (3D: {}) from {}",
        set.len(),
        u8::from(set.is_3d()),
        input.display()
    );

    let hull = match cmd.mode {
        Mode::Hull => compute_hull(&set, threads)
            .with_context(|| format!("computing hull of {}", input.display()))?,
    };
    let hull_area = area(hull.points());
    let hull_perimeter = perimeter(hull.points());

    println!("Mode: {} (Threads: {})", cmd.mode.as_str(), threads);
    println!("Simplified from {} to {} points", set.len(), hull.len());
    println!("Area: {}", fmt_metric("area", &hull_area));
    println!("Perimeter: {}", fmt_metric("perimeter", &hull_perimeter));

    io::save_points(&hull, output)?;
    tracing::info!(output = %output.display(), points = hull.len(), "saved");

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    println!("Computation time: {elapsed_ms:.2} ms");

    if cmd.provenance {
        let summary = provenance::RunSummary {
            input: input.display().to_string(),
            mode: cmd.mode.as_str().to_string(),
            threads,
            dim: if hull.is_3d() { 3 } else { 2 },
            input_points: set.len(),
            hull_points: hull.len(),
            area: hull_area.ok(),
            perimeter: hull_perimeter.ok(),
            elapsed_ms,
        };
        provenance::write_sidecar(output, &summary)?;
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn benchmark(cmd: &Cmd) -> Result<()> {
    let threads = cmd.threads as usize;
    let dim = cmd.forced_dim().unwrap_or(Dim::Two);
    println!(
        "Running benchmarks (Threads: {}, Dim: {})...",
        threads,
        if dim == Dim::Three { "3D" } else { "2D" }
    );
    let seed = clock_seed();
    tracing::info!(threads, seed, "benchmark");
    for (k, &n) in BENCH_SIZES.iter().enumerate() {
        let set = generate_synthetic(SynthCfg::sized(n, dim), seed.wrapping_add(k as u64));
        let start = Instant::now();
        let hull = compute_hull(&set, threads)
            .with_context(|| format!("benchmark hull of {n} points"))?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        let reduction = if set.is_empty() {
            0.0
        } else {
            (1.0 - hull.len() as f64 / set.len() as f64) * 100.0
        };
        println!(
            "Size {}: Time {:.2} ms, Simplified to {} points (Reduction: {:.1}%)",
            set.len(),
            ms,
            hull.len(),
            reduction
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> std::result::Result<Cmd, clap::Error> {
        Cmd::try_parse_from(std::iter::once("hullscan").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_and_flags() {
        let cmd = parse(&["in.csv", "out.csv"]).unwrap();
        assert_eq!(cmd.mode, Mode::Hull);
        assert_eq!(cmd.threads, 1);
        assert_eq!(cmd.forced_dim(), None);
        let cmd = parse(&["in.csv", "out.csv", "--dim", "3", "--threads", "8"]).unwrap();
        assert_eq!(cmd.forced_dim(), Some(Dim::Three));
        assert_eq!(cmd.threads, 8);
    }

    #[test]
    fn bad_arguments_rejected() {
        assert!(parse(&["in.csv"]).is_err());
        assert!(parse(&["in.csv", "out.csv", "--dim", "4"]).is_err());
        assert!(parse(&["in.csv", "out.csv", "--threads", "0"]).is_err());
        assert!(parse(&["in.csv", "out.csv", "--mode", "simplify"]).is_err());
    }

    #[test]
    fn benchmark_needs_no_paths() {
        let cmd = parse(&["--benchmark", "--threads", "2"]).unwrap();
        assert!(cmd.benchmark && cmd.input.is_none());
        benchmark(&cmd).unwrap();
    }

    #[test]
    fn run_writes_only_the_hull_by_default() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.csv");
        let output = dir.path().join("hull.csv");
        fs::write(&input, "0,0\n4,0\n0,3\n1,1\n").unwrap();
        let cmd = parse(&[
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--threads",
            "2",
        ])
        .unwrap();
        run(&cmd).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "0.00,0.00\n4.00,0.00\n0.00,3.00\n"
        );
        assert!(!dir.path().join("hull.provenance.json").exists());
    }

    #[test]
    fn provenance_flag_adds_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.csv");
        let output = dir.path().join("hull.csv");
        fs::write(&input, "0,0\n4,0\n0,3\n").unwrap();
        let cmd = parse(&[
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--provenance",
        ])
        .unwrap();
        run(&cmd).unwrap();
        assert!(output.exists());
        assert!(dir.path().join("hull.provenance.json").exists());
        assert!(parse(&["--benchmark", "--provenance"]).is_err());
    }

    #[test]
    fn run_fails_on_too_few_points() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.csv");
        fs::write(&input, "0,0\n1,1\n").unwrap();
        let out = dir.path().join("hull.csv");
        let cmd = parse(&[input.to_str().unwrap(), out.to_str().unwrap()]).unwrap();
        assert!(run(&cmd).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn forced_dim_controls_output_columns() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("mesh.obj");
        fs::write(&input, "v 0 0 1\nv 2 0 1\nv 0 2 1\n").unwrap();
        let out = dir.path().join("hull.csv");
        let cmd = parse(&[
            input.to_str().unwrap(),
            out.to_str().unwrap(),
            "--dim",
            "2",
        ])
        .unwrap();
        run(&cmd).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "0.00,0.00\n2.00,0.00\n0.00,2.00\n"
        );
        assert!(!dir.path().join("hull.provenance.json").exists());
    }
}
