use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Paths only; thresholds live on the CLI where they can vary per run.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Bibliography CSV export to ingest.
    pub input_path: PathBuf,
    /// Directory for the Gephi and detailed tables.
    pub output_dir: PathBuf,
    /// Directory for discovery-run files.
    pub discovery_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, with defaults that
    /// match the conventional data layout.
    pub fn load() -> Result<Self> {
        Ok(Self {
            input_path: env::var("AURA_INPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/raw/PubMed.csv")),
            output_dir: env::var("AURA_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/processed")),
            discovery_dir: env::var("AURA_DISCOVERY_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/discovery")),
        })
    }

    /// Resolve the input file, preferring a CLI override, and check that it
    /// exists. Call this before any operation that reads the bibliography.
    pub fn require_input(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        let path = cli_override.unwrap_or(&self.input_path);
        if !path.exists() {
            anyhow::bail!(
                "Input file not found: {}\n\
                 Place your bibliography CSV export there, pass --input, or set\n\
                 AURA_INPUT in your .env file. See .env.example for the\n\
                 recognized variables.",
                path.display()
            );
        }
        Ok(path.to_path_buf())
    }
}
