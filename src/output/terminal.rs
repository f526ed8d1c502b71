// Colored terminal output for network reports.
//
// This module handles all terminal-specific formatting: colors, tables,
// summary sections. The main.rs display calls delegate here.

use colored::Colorize;

use crate::discovery::DiscoveryOutcome;
use crate::graph::tables::NetworkTables;

/// How many high-frequency terms the report lists.
const TOP_TERMS: usize = 20;

/// How many discovered terms to show before pointing at the review file.
const TOP_DISCOVERED: usize = 15;

/// Display the network analysis report: scale, category distribution, and
/// the top high-frequency terms.
pub fn display_network_report(tables: &NetworkTables) {
    println!("\n{}", "=== Network Analysis Report ===".bold());
    println!();

    println!("Network scale:");
    println!("  - Nodes: {}", tables.nodes.len());
    println!("  - Edges: {}", tables.edges.len());
    if tables.nodes.len() > 1 {
        println!("  - Density: {:.6}", tables.density());
    }

    if tables.nodes.is_empty() {
        return;
    }

    println!("\nNode category distribution:");
    for (category, count) in tables.category_distribution() {
        let percentage = (count as f64 / tables.nodes.len() as f64) * 100.0;
        println!(
            "  - {}: {} nodes ({:.1}%)",
            category.description(),
            count,
            percentage
        );
    }

    println!("\nTop {TOP_TERMS} high-frequency terms:");
    // Nodes arrive sorted by descending frequency.
    for (i, node) in tables.nodes.iter().take(TOP_TERMS).enumerate() {
        println!(
            "  {:>2}. {:<28} (frequency: {:>3}, category: {})",
            i + 1,
            node.label,
            node.frequency,
            node.category.description().dimmed(),
        );
    }
}

/// Display the discovery run: the mined network plus the terms the curated
/// vocabularies could not place.
pub fn display_discovery_report(outcome: &DiscoveryOutcome) {
    display_network_report(&outcome.tables);

    if outcome.discovered.is_empty() {
        println!("\nNo unclassified terms discovered.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Discovered Terms ({} candidates for review) ===",
            outcome.discovered.len()
        )
        .bold()
    );
    println!(
        "{}",
        "These appeared in abstracts but match no curated vocabulary. Review\n\
         them for keywords worth adding."
            .dimmed()
    );
    println!();

    for (term, count) in outcome.discovered.iter().take(TOP_DISCOVERED) {
        println!("  {:<32} {}", term, format!("x{count}").dimmed());
    }
    if outcome.discovered.len() > TOP_DISCOVERED {
        println!(
            "  {}",
            format!(
                "... and {} more in discovered_terms.csv",
                outcome.discovered.len() - TOP_DISCOVERED
            )
            .dimmed()
        );
    }
}
