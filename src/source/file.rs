//! File-based domain source

use crate::error::SourceError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a newline-delimited domain list, skipping blank lines.
///
/// No normalization is applied beyond trimming surrounding whitespace.
pub fn read_domain_file(path: &Path) -> Result<Vec<String>, SourceError> {
    let file = File::open(path).map_err(|_| SourceError::DomainFileNotFound {
        path: path.display().to_string(),
    })?;
    let reader = BufReader::new(file);

    let mut domains = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| SourceError::DomainFileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            domains.push(trimmed.to_string());
        }
    }
    Ok(domains)
}
