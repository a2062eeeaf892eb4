//! Manifest loading: the ordered list of paths to process.
//!
//! One path per line. The producer is expected to sort the list so that
//! descendants come before their ancestors; the order is kept exactly as read.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default manifest file name, resolved against the working directory.
pub const DEFAULT_MANIFEST: &str = "files_to_rename.txt";

#[derive(Debug, Clone)]
pub struct Manifest {
    /// Where the manifest was read from.
    pub source: PathBuf,
    /// Paths in file order. Duplicates are kept.
    pub entries: Vec<String>,
    /// Lines dropped because they were empty after stripping.
    pub blank_lines: usize,
}

impl Manifest {
    /// Read and parse a manifest file. Failure to read is fatal for the run.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::manifest_unreadable(path.display().to_string(), e.to_string()))?;

        let manifest = Self::parse(path, &text);

        log_status!(
            "manifest",
            "Loaded {} entries from {}",
            manifest.entries.len(),
            path.display()
        );

        Ok(manifest)
    }

    /// Split manifest text into entries, stripping trailing whitespace per line.
    pub fn parse(source: &Path, text: &str) -> Self {
        let mut entries = Vec::new();
        let mut blank_lines = 0;

        for line in text.lines() {
            let entry = line.trim_end();
            if entry.is_empty() {
                blank_lines += 1;
                continue;
            }
            entries.push(entry.to_string());
        }

        Manifest {
            source: source.to_path_buf(),
            entries,
            blank_lines,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
