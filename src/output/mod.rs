// Output formatting: Gephi table files, terminal display, and report
// generation.

pub mod gephi;
pub mod markdown;
pub mod terminal;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Machine-readable summary of one build run, written alongside the tables
/// so downstream tooling can pick up counts without parsing the CSVs.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub generated_at: String,
    pub records: usize,
    pub min_frequency: u32,
    pub min_weight: u32,
    pub max_terms_per_document: usize,
    pub nodes: usize,
    pub edges: usize,
    pub density: f64,
}

pub fn write_run_summary(summary: &RunSummary, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join("run_summary.json");
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
