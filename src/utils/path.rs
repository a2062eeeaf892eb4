//! Path expansion and base-name splitting.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Split a path into its parent directory and final segment.
///
/// Returns `None` when the path has no final segment (`/`, `..`, empty) or
/// ends in a separator, where the final segment is the empty string.
/// The parent is empty for a bare relative name.
pub fn split_base_name(path: &Path) -> Option<(&Path, &str)> {
    let raw = path.to_str()?;
    if raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR) {
        return None;
    }

    let name = path.file_name()?.to_str()?;
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    Some((parent, name))
}
