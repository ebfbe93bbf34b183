//!
//! Discovery and parallel loading of benchmark data files.
//!

use std::path::PathBuf;

use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

use crate::error::ParseError;
use crate::model::document::Document;

/// Glob patterns of data files searched in a directory.
pub const DATA_FILE_PATTERNS: [&str; 2] = ["**/*.js", "**/*.json"];

///
/// Resolves the data file arguments.
///
/// A single directory argument is expanded to the data files it contains.
///
pub fn resolve_paths(paths: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
    if paths.is_empty() {
        anyhow::bail!("No data files provided.");
    }
    if paths.len() > 1 || !paths[0].is_dir() {
        return Ok(paths);
    }

    let directory = paths[0].to_string_lossy();
    let mut resolved = Vec::new();
    for pattern in DATA_FILE_PATTERNS.iter() {
        let resolution_pattern = format!("{directory}/{pattern}");
        resolved.extend(glob::glob(resolution_pattern.as_str())?.filter_map(Result::ok));
    }
    resolved.sort();
    if resolved.is_empty() {
        anyhow::bail!("No data files found in the directory {directory:?}");
    }
    Ok(resolved)
}

///
/// Loads the data files in parallel.
///
/// The results are returned in the order of `paths`, one per file.
///
pub fn load_all(paths: &[PathBuf]) -> Vec<(PathBuf, Result<Document, ParseError>)> {
    paths
        .par_iter()
        .map(|path| (path.to_owned(), Document::try_from(path.as_path())))
        .collect()
}
