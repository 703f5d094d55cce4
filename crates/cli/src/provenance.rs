use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What one hull run consumed and produced.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub input: String,
    pub mode: String,
    pub threads: usize,
    pub dim: u8,
    pub input_points: usize,
    pub hull_points: usize,
    /// `None` when the hull is too small for the metric (e.g. a segment).
    pub area: Option<f64>,
    pub perimeter: Option<f64>,
    pub elapsed_ms: f64,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// On-disk layout of the sidecar.
#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    run: &'a RunSummary,
    outputs: Vec<String>,
}

/// Writes the run report next to `artifact` and returns its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, summary: &RunSummary) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: code_rev(),
        version: hullscan::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        run: summary,
        outputs: vec![artifact.display().to_string()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance_written");
    Ok(path)
}

/// `dir/hull.csv` -> `dir/hull.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `$GIT_COMMIT` when set, else the checkout's HEAD, else `"unknown"`.
fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn summary() -> RunSummary {
        RunSummary {
            input: "pts.csv".into(),
            mode: "hull".into(),
            threads: 2,
            dim: 2,
            input_points: 4,
            hull_points: 3,
            area: Some(6.0),
            perimeter: Some(12.0),
            elapsed_ms: 0.5,
        }
    }

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/hull.csv")),
            Path::new("/tmp/output/hull.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("runs/hull")),
            Path::new("runs/hull.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_run() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.csv");
        fs::write(&artifact, "0.00,0.00\n").unwrap();
        let prov_path = write_sidecar(&artifact, &summary()).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["run"]["hull_points"], 3);
        assert_eq!(parsed["run"]["area"], 6.0);
        assert_eq!(parsed["version"], hullscan::VERSION);
        assert!(parsed["code_rev"].as_str().is_some_and(|r| !r.is_empty()));
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }
}
