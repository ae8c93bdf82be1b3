//! Provenance sidecars for plan artifacts.
//!
//! Each `<artifact>.json` gets a `<artifact>.provenance.json` recording what produced it:
//! code revision, crate version, the seed the planner actually ran with, the resolved
//! config, and a SHA-256 of every scenario file read.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A scenario file read by the run, with its content digest.
#[derive(Debug, Serialize)]
pub struct InputRecord {
    pub path: String,
    pub sha256: String,
}

impl InputRecord {
    /// Hash the file at `path` as it is on disk now.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("hashing {}", path.display()))?;
        Ok(Self {
            path: path.to_string_lossy().into_owned(),
            sha256: sha256_hex(&bytes),
        })
    }
}

/// What went into one planning run.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub seed: u64,
    pub config: Value,
    pub inputs: Vec<InputRecord>,
}

impl RunRecord {
    pub fn new(seed: u64, config: Value) -> Self {
        Self {
            seed,
            config,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, path: &Path) -> Result<Self> {
        self.inputs.push(InputRecord::from_file(path)?);
        Ok(self)
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: String,
    #[serde(flatten)]
    run: &'a RunRecord,
    output: String,
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, run: &RunRecord) -> Result<PathBuf> {
    let callsite = Location::caller();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        version: gaussprm::VERSION,
        callsite: format!("{}:{}", callsite.file(), callsite.line()),
        run,
        output: artifact.to_string_lossy().into_owned(),
    };
    let path = provenance_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "plan".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Commit of the running binary: build-time `GIT_COMMIT`, then runtime, then `git`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
