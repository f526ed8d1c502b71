// Markdown report generation.
//
// A shareable snapshot of one build: the same statistics as the terminal
// report, in a file that can be committed next to the Gephi tables or
// pasted into a lab notebook.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::graph::tables::NetworkTables;

/// How many high-frequency terms the report table lists.
const TOP_TERMS: usize = 20;

/// Generate the markdown report next to the network tables.
/// Returns the path of the written file.
pub fn generate_report(tables: &NetworkTables, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join("aura-report.md");

    let mut md = String::new();
    writeln!(md, "# Migraine Term Co-occurrence Network")?;
    writeln!(md)?;
    writeln!(
        md,
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(md)?;

    writeln!(md, "## Network scale")?;
    writeln!(md)?;
    writeln!(md, "- Nodes: {}", tables.nodes.len())?;
    writeln!(md, "- Edges: {}", tables.edges.len())?;
    if tables.nodes.len() > 1 {
        writeln!(md, "- Density: {:.6}", tables.density())?;
    }
    writeln!(md)?;

    if !tables.nodes.is_empty() {
        writeln!(md, "## Category distribution")?;
        writeln!(md)?;
        writeln!(md, "| Category | Nodes | Share |")?;
        writeln!(md, "|----------|------:|------:|")?;
        for (category, count) in tables.category_distribution() {
            let percentage = (count as f64 / tables.nodes.len() as f64) * 100.0;
            writeln!(
                md,
                "| {} | {} | {:.1}% |",
                category.description(),
                count,
                percentage
            )?;
        }
        writeln!(md)?;

        writeln!(md, "## Top terms")?;
        writeln!(md)?;
        writeln!(md, "| # | Term | Frequency | Category |")?;
        writeln!(md, "|--:|------|----------:|----------|")?;
        for (i, node) in tables.nodes.iter().take(TOP_TERMS).enumerate() {
            writeln!(
                md,
                "| {} | {} | {} | {} |",
                i + 1,
                node.label,
                node.frequency,
                node.category.description()
            )?;
        }
        writeln!(md)?;
    }

    fs::write(&path, md).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
