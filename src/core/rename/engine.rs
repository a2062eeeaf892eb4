//! Rename engine: walk the manifest and fix each existing path's base name.
//!
//! For every entry, in manifest order:
//! 1. Skip (with a notice) if nothing exists at the path
//! 2. Split off the base name and apply the substitutions to it
//! 3. Skip silently if the name did not change
//! 4. Announce, then rename in place; failures are reported and the run continues

use super::substitution::SubstitutionSet;
use crate::manifest::Manifest;
use crate::utils::io::is_occupied;
use crate::utils::path::split_base_name;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

// ============================================================================
// Types
// ============================================================================

/// What happened to a single manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOutcome {
    /// Nothing exists at the path (possibly moved by an earlier ancestor rename).
    NotFound,
    /// The base name contains none of the patterns.
    Unchanged,
    /// Renamed on disk.
    Renamed,
    /// Would be renamed; dry run only.
    Planned,
    /// The rename was attempted (or would collide) and failed.
    Failed,
}

/// Result for one manifest entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryResult {
    /// Path as written in the manifest.
    pub path: String,
    pub outcome: EntryOutcome,
    /// Target path, when the base name changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
    /// Number of substitutions applied to the base name.
    pub replacements: usize,
    /// Error text for failed renames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EntryResult {
    fn new(path: &str, outcome: EntryOutcome) -> Self {
        EntryResult {
            path: path.to_string(),
            outcome,
            new_path: None,
            replacements: 0,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub renamed: usize,
    pub planned: usize,
    pub unchanged: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: EntryOutcome) {
        self.total += 1;
        match outcome {
            EntryOutcome::NotFound => self.not_found += 1,
            EntryOutcome::Unchanged => self.unchanged += 1,
            EntryOutcome::Renamed => self.renamed += 1,
            EntryOutcome::Planned => self.planned += 1,
            EntryOutcome::Failed => self.failed += 1,
        }
    }
}

/// The full result of a manifest run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Manifest the entries were read from.
    pub manifest: String,
    /// Whether the file system was left untouched.
    pub dry_run: bool,
    /// Empty manifest lines that were skipped at load time.
    pub blank_lines: usize,
    pub entries: Vec<EntryResult>,
    pub summary: RunSummary,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report what would be renamed without touching the file system.
    pub dry_run: bool,
}

// ============================================================================
// Entry processing
// ============================================================================

// Console failures never stop the run.
fn notice<W: Write>(out: &mut W, args: std::fmt::Arguments<'_>) {
    let _ = out.write_fmt(args);
    let _ = out.write_all(b"\n");
    let _ = out.flush();
}

/// Renames a dry run has planned so far, in order.
///
/// Paths are looked up through these moves so that later entries see the
/// file system as the real run would have left it.
#[derive(Debug, Default)]
struct PlannedMoves {
    moves: Vec<(PathBuf, PathBuf)>,
}

impl PlannedMoves {
    fn record(&mut self, from: &Path, to: &Path) {
        self.moves.push((from.to_path_buf(), to.to_path_buf()));
    }

    /// The on-disk path backing `path`, or `None` if a planned move vacated it.
    fn resolve(&self, path: &Path) -> Option<PathBuf> {
        let mut current = path.to_path_buf();

        for (from, to) in self.moves.iter().rev() {
            if let Ok(rest) = current.strip_prefix(to) {
                current = if rest.as_os_str().is_empty() {
                    from.clone()
                } else {
                    from.join(rest)
                };
            } else if current.starts_with(from) {
                return None;
            }
        }

        Some(current)
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_some_and(|p| p.exists())
    }

    fn is_occupied(&self, path: &Path) -> bool {
        self.resolve(path).is_some_and(|p| is_occupied(&p))
    }
}

/// Process one manifest entry, writing its notice (if any) to `out`.
pub fn rename_entry<W: Write>(
    path: &str,
    subs: &SubstitutionSet,
    options: RunOptions,
    out: &mut W,
) -> EntryResult {
    process_entry(path, subs, options, &mut PlannedMoves::default(), out)
}

fn process_entry<W: Write>(
    path: &str,
    subs: &SubstitutionSet,
    options: RunOptions,
    planned: &mut PlannedMoves,
    out: &mut W,
) -> EntryResult {
    let source = Path::new(path);

    if !planned.exists(source) {
        notice(out, format_args!("Skipping {}, not found", path));
        return EntryResult::new(path, EntryOutcome::NotFound);
    }

    let Some((parent, name)) = split_base_name(source) else {
        return EntryResult::new(path, EntryOutcome::Unchanged);
    };

    let (new_name, replacements) = subs.apply(name);
    if new_name == name {
        return EntryResult::new(path, EntryOutcome::Unchanged);
    }

    let target = parent.join(&new_name);
    let target_display = target.display().to_string();

    let mut result = EntryResult::new(path, EntryOutcome::Renamed);
    result.new_path = Some(target_display.clone());
    result.replacements = replacements;

    if options.dry_run {
        notice(out, format_args!("Would rename: {} -> {}", path, target_display));
    } else {
        notice(out, format_args!("Renaming: {} -> {}", path, target_display));
    }

    // std::fs::rename replaces an existing file on POSIX; refuse instead.
    if planned.is_occupied(&target) {
        let error = "destination already exists".to_string();
        notice(out, format_args!("Error renaming {}: {}", path, error));
        result.outcome = EntryOutcome::Failed;
        result.error = Some(error);
        return result;
    }

    if options.dry_run {
        planned.record(source, &target);
        result.outcome = EntryOutcome::Planned;
        return result;
    }

    if let Err(e) = std::fs::rename(source, &target) {
        notice(out, format_args!("Error renaming {}: {}", path, e));
        result.outcome = EntryOutcome::Failed;
        result.error = Some(e.to_string());
    }

    result
}

/// Process every manifest entry strictly in order.
///
/// Later entries may depend on renames made by earlier ones, so this is a
/// single sequential pass. Per-entry failures are recorded, never propagated.
pub fn run<W: Write>(
    manifest: &Manifest,
    subs: &SubstitutionSet,
    options: RunOptions,
    out: &mut W,
) -> RunReport {
    let mut entries = Vec::with_capacity(manifest.len());
    let mut summary = RunSummary::default();
    let mut planned = PlannedMoves::default();

    for path in &manifest.entries {
        let result = process_entry(path, subs, options, &mut planned, out);
        summary.record(result.outcome);
        entries.push(result);
    }

    log_status!(
        "rename",
        "{} entries: {} renamed, {} planned, {} unchanged, {} not found, {} failed",
        summary.total,
        summary.renamed,
        summary.planned,
        summary.unchanged,
        summary.not_found,
        summary.failed
    );

    RunReport {
        manifest: manifest.source.display().to_string(),
        dry_run: options.dry_run,
        blank_lines: manifest.blank_lines,
        entries,
        summary,
    }
}

// ============================================================================
// Tests
// ============================================================================
