use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::Candidate;

/// Serialization format of a candidates file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// `.json` files are JSON, everything else is treated as YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Yaml,
        }
    }
}

/// Parse a list of candidates from file content.
pub fn parse_candidates(content: &str, format: InputFormat) -> Result<Vec<Candidate>> {
    let candidates: Vec<Candidate> = match format {
        InputFormat::Json => serde_json::from_str(content).context("invalid JSON candidate list")?,
        InputFormat::Yaml => {
            serde_saphyr::from_str(content).context("invalid YAML candidate list")?
        }
    };
    Ok(candidates)
}

/// Load candidates from a JSON or YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a list of
/// `{ id, businessImpact }` records.
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read candidates from {}", path.display()))?;

    let candidates = parse_candidates(&content, InputFormat::from_path(path))
        .with_context(|| format!("Failed to parse candidates in {}", path.display()))?;

    tracing::debug!(count = candidates.len(), path = %path.display(), "loaded candidates");
    Ok(candidates)
}
