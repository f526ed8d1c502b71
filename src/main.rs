use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

mod config;

/// Aura: co-occurrence networks from migraine research literature.
///
/// Extracts curated medical terms from bibliographic records and builds
/// Gephi-ready node/edge tables from their document co-occurrence.
#[derive(Parser)]
#[command(name = "aura", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the co-occurrence network from a bibliography export
    Build {
        /// Path to the CSV export (overrides AURA_INPUT)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Minimum document count for a term to become a node
        #[arg(long, default_value = "3")]
        min_frequency: u32,

        /// Minimum co-occurrence count for a pair to become an edge
        #[arg(long, default_value = "2")]
        min_weight: u32,

        /// Cap on terms contributed by a single article
        #[arg(long, default_value = "20")]
        max_terms: usize,

        /// Skip the abstract keyword scan (tag and author-keyword fields only)
        #[arg(long)]
        tags_only: bool,
    },

    /// Mine abstracts for candidate terms with RAKE
    Discover {
        /// Path to the CSV export (overrides AURA_INPUT)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Ranked phrases to keep per abstract
        #[arg(long, default_value = "5")]
        top_n: usize,

        /// Minimum document count for a mined term to become a node
        #[arg(long, default_value = "5")]
        min_frequency: u32,

        /// Minimum co-occurrence count for a pair to become an edge
        #[arg(long, default_value = "2")]
        min_weight: u32,
    },

    /// Re-print the analysis report from previously written tables
    Inspect {
        /// Directory holding detailed_nodes.csv / detailed_edges.csv
        /// (overrides AURA_OUTPUT_DIR)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aura=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            min_frequency,
            min_weight,
            max_terms,
            tags_only,
        } => {
            let config = config::Config::load()?;
            let input = config.require_input(input.as_deref())?;

            println!("Loading bibliography data...");
            let records = aura::ingest::load_records(&input)?;
            println!("  {} records loaded from {}", records.len(), input.display());

            let vocab = Arc::new(aura::vocab::Vocabulary::curated());
            let net_config = aura::graph::builder::NetworkConfig {
                min_frequency,
                min_weight,
                max_terms_per_document: max_terms,
                scan_abstracts: !tags_only,
            };
            let builder = aura::graph::builder::NetworkBuilder::new(vocab, net_config);

            println!("Building co-occurrence network...");
            let tables = builder.build(&records);

            aura::output::terminal::display_network_report(&tables);

            if tables.nodes.is_empty() {
                println!(
                    "\n{}",
                    "No terms cleared the frequency threshold; nothing to write.".yellow()
                );
                return Ok(());
            }

            aura::output::gephi::write_network(&tables, &config.output_dir)?;

            let summary = aura::output::RunSummary {
                generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                records: records.len(),
                min_frequency,
                min_weight,
                max_terms_per_document: max_terms,
                nodes: tables.nodes.len(),
                edges: tables.edges.len(),
                density: tables.density(),
            };
            aura::output::write_run_summary(&summary, &config.output_dir)?;

            let report_path = aura::output::markdown::generate_report(&tables, &config.output_dir)?;
            info!(path = %report_path.display(), "Markdown report written");

            println!(
                "\n{}",
                format!("Gephi files written to {}", config.output_dir.display()).bold()
            );
            println!("  gephi_nodes.csv / gephi_edges.csv    (import these into Gephi)");
            println!("  detailed_nodes.csv / detailed_edges.csv");
            println!("  aura-report.md / run_summary.json");
        }

        Commands::Discover {
            input,
            top_n,
            min_frequency,
            min_weight,
        } => {
            let config = config::Config::load()?;
            let input = config.require_input(input.as_deref())?;

            println!("Loading bibliography data...");
            let records = aura::ingest::load_records(&input)?;
            println!("  {} records loaded from {}", records.len(), input.display());

            let vocab = Arc::new(aura::vocab::Vocabulary::curated());
            let normalizer = aura::terms::normalize::TermNormalizer::new(Arc::clone(&vocab));
            let classifier = aura::terms::classify::TermClassifier::new(Arc::clone(&vocab));
            let extractor = aura::discovery::rake::RakeExtractor { top_n };
            let discovery_config = aura::discovery::DiscoveryConfig {
                min_frequency,
                min_weight,
            };

            println!("Mining abstracts for candidate terms...");
            let outcome = aura::discovery::run(
                &extractor,
                &normalizer,
                &classifier,
                &records,
                &discovery_config,
            );

            aura::output::terminal::display_discovery_report(&outcome);

            aura::output::gephi::write_discovery(&outcome, &config.discovery_dir)?;

            println!(
                "\n{}",
                format!(
                    "Discovery files written to {}",
                    config.discovery_dir.display()
                )
                .bold()
            );
            println!("  nlp_nodes.csv / nlp_edges.csv");
            println!("  discovered_terms.csv    (candidate keywords for review)");
        }

        Commands::Inspect { dir } => {
            let config = config::Config::load()?;
            let dir = dir.unwrap_or(config.output_dir);

            let tables = aura::output::gephi::read_network(&dir)?;
            aura::output::terminal::display_network_report(&tables);
        }
    }

    Ok(())
}
