use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ConfigError;

/// Load candidate paths from `path`, one per line.
///
/// Lines are trimmed of surrounding whitespace; lines that are empty after
/// trimming are not candidates and are dropped. Order follows the file. An
/// empty file is valid and yields an empty list; any I/O failure (open or
/// mid-read) is fatal and reported with the path attached.
pub fn load(path: &Path) -> Result<Vec<String>, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Wordlist {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| ConfigError::Wordlist {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            candidates.push(trimmed.to_string());
        }
    }
    Ok(candidates)
}
