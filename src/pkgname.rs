//! Go package name auto-detection.
//! When no explicit package name is configured, the generated file has to
//! declare the same package as the directory it lands in. This module
//! inspects the Go sources already present to discover that name.

use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Discovers the Go package name of a directory by scanning its `.go` files
/// for a package clause.
///
/// # Arguments
/// * `dir` - Directory to inspect, typically the current working directory
///
/// # Returns
/// * `Result<String>` - The package name declared by the directory's sources
///
/// # Errors
/// * `Error::PackageResolution` if no `.go` file with a package clause exists
///
/// # Notes
/// Files are visited in name order so detection is deterministic;
/// `_test.go` files are skipped since they may declare an external test
/// package.
pub fn resolve_pkg_name(dir: &Path) -> Result<String> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension().is_some_and(|ext| ext == "go")
                && !p.to_string_lossy().ends_with("_test.go")
        })
        .collect();
    entries.sort();

    for path in entries {
        let source = std::fs::read_to_string(&path)?;
        if let Some(name) = package_clause(&source) {
            debug!("detected package {} from {}", name, path.display());
            return Ok(name);
        }
    }

    Err(Error::PackageResolution(format!(
        "no Go package found in {} (use --pkg to set one explicitly)",
        dir.display()
    )))
}

/// Extracts the package name from a Go source file's package clause, if any.
fn package_clause(source: &str) -> Option<String> {
    for line in source.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("package ") {
            let name = rest.split_whitespace().next()?;
            // strip a trailing line comment glued to the name
            let name = name.split("//").next().unwrap_or(name);
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_clause() {
        assert_eq!(package_clause("package main\n"), Some("main".to_string()));
        assert_eq!(
            package_clause("// comment\n\npackage assets // generated\n"),
            Some("assets".to_string())
        );
        assert_eq!(package_clause("// no clause here\n"), None);
    }
}
