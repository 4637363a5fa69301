// src/batch.rs

//! Batch resolution of reference lists.
//!
//! Input is a plain text file with one URI reference per line; every
//! reference is resolved against the same base.

use std::path::Path;

use crate::error::Result;
use crate::models::{BatchConfig, Resolution};
use crate::resolver;

/// Resolve every reference in `content` against `base`.
///
/// Line handling follows `options`: blank lines are skipped when
/// `skip_blank_lines` is set, and lines starting with `comment_prefix`
/// (when configured) are skipped as comments.
pub fn resolve_lines(
    content: &str,
    base: Option<&str>,
    options: &BatchConfig,
) -> Vec<Resolution> {
    let mut resolutions = Vec::new();

    for line in content.lines() {
        if options.skip_blank_lines && line.trim().is_empty() {
            continue;
        }
        if let Some(prefix) = &options.comment_prefix {
            if line.starts_with(prefix.as_str()) {
                log::debug!("Skipping comment line: {line}");
                continue;
            }
        }

        resolutions.push(Resolution {
            reference: line.to_string(),
            resolved: resolver::resolve(base, line),
        });
    }

    resolutions
}

/// Resolve every reference listed in the file at `path` against `base`.
pub fn resolve_file(
    path: impl AsRef<Path>,
    base: Option<&str>,
    options: &BatchConfig,
) -> Result<Vec<Resolution>> {
    let content = std::fs::read_to_string(path)?;
    Ok(resolve_lines(&content, base, options))
}
