// Bibliography ingestion: sniffing CSV loader.
//
// Reference-manager exports are inconsistent: Zotero and PubMed disagree on
// delimiters, Windows exports arrive in Latin-1, and column names vary by
// tool. The loader sniffs its way through rather than demanding a fixed
// format: decode UTF-8 with a Latin-1 fallback, try delimiter candidates
// until the header looks like a real record table, and resolve columns from
// candidate name lists. A file this loader cannot make sense of yields rows
// with empty fields, not a crash; downstream treats absent fields as "no
// terms from this field".

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

/// One bibliographic record. Every field is optional; which ones are
/// populated depends on the exporting tool.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub title: Option<String>,
    /// Manual tag field, `;`/`,` delimited.
    pub tags: Option<String>,
    pub abstract_text: Option<String>,
    /// Author-supplied keyword field, `;`/`,` delimited.
    pub author_keywords: Option<String>,
}

const TITLE_COLUMNS: &[&str] = &["Title"];
const TAG_COLUMNS: &[&str] = &["Manual Tags", "Tags"];
const ABSTRACT_COLUMNS: &[&str] = &["Abstract", "Abstract Note", "Description", "Summary"];
const KEYWORD_COLUMNS: &[&str] = &["Keywords", "Author Keywords"];

/// Delimiters tried in order during sniffing.
const DELIMITERS: &[u8] = b",\t;";

/// A header must yield more than this many columns for a delimiter to be
/// accepted; one or two columns means we split on the wrong character.
const MIN_COLUMNS: usize = 3;

/// Load records from a CSV export, sniffing encoding and delimiter.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let text = decode(bytes);
    let delimiter = sniff_delimiter(&text);

    let records = parse(&text, delimiter)?;
    info!(
        count = records.len(),
        delimiter = (delimiter as char).to_string(),
        "Loaded bibliography records"
    );
    Ok(records)
}

/// Decode file bytes: UTF-8 when valid, Latin-1 otherwise. Latin-1 maps
/// every byte to the code point of the same value, so the fallback cannot
/// fail; worst case is mojibake in fields the pipeline will filter anyway.
/// A leading BOM is dropped either way.
fn decode(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!("Input is not valid UTF-8, decoding as Latin-1");
            err.into_bytes().iter().map(|&b| b as char).collect()
        }
    };
    text.trim_start_matches('\u{feff}').to_string()
}

/// Pick the first delimiter candidate whose header row splits into more
/// than `MIN_COLUMNS` fields, defaulting to comma.
fn sniff_delimiter(text: &str) -> u8 {
    for &delimiter in DELIMITERS {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());
        match reader.headers() {
            Ok(headers) if headers.len() > MIN_COLUMNS => return delimiter,
            _ => continue,
        }
    }
    b','
}

fn parse(text: &str, delimiter: u8) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .context("Failed to read the CSV header row")?
        .clone();

    let column = |candidates: &[&str]| -> Option<usize> {
        headers.iter().position(|header| {
            candidates
                .iter()
                .any(|candidate| header.trim().eq_ignore_ascii_case(candidate))
        })
    };

    let title_idx = column(TITLE_COLUMNS);
    let tags_idx = column(TAG_COLUMNS);
    let abstract_idx = column(ABSTRACT_COLUMNS);
    let keywords_idx = column(KEYWORD_COLUMNS);

    if tags_idx.is_none() && abstract_idx.is_none() && keywords_idx.is_none() {
        warn!("No tag, abstract, or keyword column recognized; records will be empty");
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                skipped += 1;
                warn!(error = %err, "Skipping malformed row");
                continue;
            }
        };

        let field = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        records.push(Record {
            title: field(title_idx),
            tags: field(tags_idx),
            abstract_text: field(abstract_idx),
            author_keywords: field(keywords_idx),
        });
    }

    if skipped > 0 {
        warn!(skipped, "Some rows could not be parsed");
    }

    Ok(records)
}
