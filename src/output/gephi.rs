// Gephi table files.
//
// Two audiences per network: the `gephi_*` pair carries exactly the columns
// Gephi's importer expects, while the `detailed_*` pair adds the
// human-oriented columns (category descriptions, endpoint labels) for
// review in a spreadsheet. Files are UTF-8 with a BOM so Excel detects the
// encoding when a collaborator double-clicks one.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::discovery::DiscoveryOutcome;
use crate::graph::tables::{Edge, NetworkTables, Node, EDGE_TYPE};
use crate::vocab::Category;

/// Discovered-term review file keeps at most this many entries.
const MAX_DISCOVERED: usize = 100;

fn table_writer(path: &Path) -> Result<csv::Writer<File>> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    // BOM so Excel detects UTF-8
    file.write_all("\u{feff}".as_bytes())?;
    Ok(csv::Writer::from_writer(file))
}

/// Write the Gephi pair and the detailed pair for one network.
pub fn write_network(tables: &NetworkTables, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    write_nodes(&tables.nodes, &dir.join("gephi_nodes.csv"), false)?;
    write_edges(&tables.edges, &dir.join("gephi_edges.csv"), false)?;
    write_nodes(&tables.nodes, &dir.join("detailed_nodes.csv"), true)?;
    write_edges(&tables.edges, &dir.join("detailed_edges.csv"), true)?;

    info!(
        nodes = tables.nodes.len(),
        edges = tables.edges.len(),
        dir = %dir.display(),
        "Network tables written"
    );
    Ok(())
}

/// Write the discovery network plus the discovered-term review file.
pub fn write_discovery(outcome: &DiscoveryOutcome, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    write_nodes(&outcome.tables.nodes, &dir.join("nlp_nodes.csv"), false)?;
    write_edges(&outcome.tables.edges, &dir.join("nlp_edges.csv"), false)?;

    let path = dir.join("discovered_terms.csv");
    let mut writer = table_writer(&path)?;
    writer.write_record(["Term", "Frequency"])?;
    for (term, count) in outcome.discovered.iter().take(MAX_DISCOVERED) {
        let count = count.to_string();
        writer.write_record([term.as_str(), count.as_str()])?;
    }
    writer.flush()?;

    info!(
        nodes = outcome.tables.nodes.len(),
        edges = outcome.tables.edges.len(),
        discovered = outcome.discovered.len(),
        "Discovery files written"
    );
    Ok(())
}

fn write_nodes(nodes: &[Node], path: &Path, detailed: bool) -> Result<()> {
    let mut writer = table_writer(path)?;

    if detailed {
        writer.write_record(["Id", "Label", "Category", "Frequency", "Category_Description"])?;
    } else {
        writer.write_record(["Id", "Label", "Category", "Frequency"])?;
    }

    for node in nodes {
        let frequency = node.frequency.to_string();
        if detailed {
            writer.write_record([
                node.id.as_str(),
                node.label.as_str(),
                node.category.as_str(),
                frequency.as_str(),
                node.category.description(),
            ])?;
        } else {
            writer.write_record([
                node.id.as_str(),
                node.label.as_str(),
                node.category.as_str(),
                frequency.as_str(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn write_edges(edges: &[Edge], path: &Path, detailed: bool) -> Result<()> {
    let mut writer = table_writer(path)?;

    if detailed {
        writer.write_record([
            "Source",
            "Target",
            "Weight",
            "Type",
            "Source_Label",
            "Target_Label",
        ])?;
    } else {
        writer.write_record(["Source", "Target", "Weight", "Type"])?;
    }

    for edge in edges {
        let weight = edge.weight.to_string();
        if detailed {
            writer.write_record([
                edge.source.as_str(),
                edge.target.as_str(),
                weight.as_str(),
                EDGE_TYPE,
                edge.source_label.as_str(),
                edge.target_label.as_str(),
            ])?;
        } else {
            writer.write_record([
                edge.source.as_str(),
                edge.target.as_str(),
                weight.as_str(),
                EDGE_TYPE,
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Read a previously written detailed table pair back into memory.
pub fn read_network(dir: &Path) -> Result<NetworkTables> {
    let nodes_path = dir.join("detailed_nodes.csv");
    let edges_path = dir.join("detailed_edges.csv");

    let mut nodes = Vec::new();
    for row in read_rows(&nodes_path)? {
        nodes.push(Node {
            id: row.get(0).unwrap_or_default().to_string(),
            label: row.get(1).unwrap_or_default().to_string(),
            category: Category::from_tag(row.get(2).unwrap_or_default()),
            frequency: row.get(3).unwrap_or_default().parse().unwrap_or(0),
        });
    }

    let mut edges = Vec::new();
    for row in read_rows(&edges_path)? {
        edges.push(Edge {
            source: row.get(0).unwrap_or_default().to_string(),
            target: row.get(1).unwrap_or_default().to_string(),
            weight: row.get(2).unwrap_or_default().parse().unwrap_or(0),
            source_label: row.get(4).unwrap_or_default().to_string(),
            target_label: row.get(5).unwrap_or_default().to_string(),
        });
    }

    Ok(NetworkTables { nodes, edges })
}

fn read_rows(path: &Path) -> Result<Vec<csv::StringRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for row in reader.records() {
        rows.push(row.with_context(|| format!("Malformed row in {}", path.display()))?);
    }
    Ok(rows)
}
