use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::manifest::DEFAULT_MANIFEST;
use crate::rename::SubstitutionSet;
use crate::utils::io;

/// Root configuration structure for a rename config file.
///
/// Every field is optional; an empty object reproduces the built-in
/// `setor` → `sector` correction against `files_to_rename.txt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameConfig {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub substitutions: SubstitutionSet,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            substitutions: SubstitutionSet::default(),
        }
    }
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST.to_string()
}

impl RenameConfig {
    /// Reject configurations that could never rename anything sensibly.
    pub fn validate(&self) -> Result<()> {
        if self.manifest.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "manifest",
                Some(self.manifest.clone()),
                "manifest path must not be empty",
            ));
        }

        if self.substitutions.is_empty() {
            return Err(Error::config_invalid_value(
                "substitutions",
                None,
                "at least one substitution is required",
            ));
        }

        for (idx, sub) in self.substitutions.iter().enumerate() {
            if sub.from.is_empty() {
                return Err(Error::config_invalid_value(
                    format!("substitutions[{}].from", idx),
                    Some(sub.from.clone()),
                    "pattern must not be empty",
                ));
            }
            if sub.to.contains('/') || sub.to.contains(std::path::MAIN_SEPARATOR) {
                return Err(Error::config_invalid_value(
                    format!("substitutions[{}].to", idx),
                    Some(sub.to.clone()),
                    "replacement must not contain a path separator",
                ));
            }
        }

        Ok(())
    }
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<RenameConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    let config: RenameConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    config.validate()?;

    log_status!(
        "config",
        "Loaded {} substitution(s) from {}",
        config.substitutions.len(),
        path.display()
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::Substitution;
    use crate::ErrorCode;

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rename.json");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn empty_object_uses_defaults() {
        let (_dir, path) = write_config("{}");
        let config = load_config(&path).unwrap();

        assert_eq!(config.manifest, "files_to_rename.txt");
        assert_eq!(config.substitutions, SubstitutionSet::default());
    }

    #[test]
    fn explicit_substitutions_keep_order() {
        let (_dir, path) = write_config(
            r#"{
                "manifest": "list.txt",
                "substitutions": [
                    {"from": "colour", "to": "color"},
                    {"from": "Colour", "to": "Color", "label": "Capitalized"}
                ]
            }"#,
        );
        let config = load_config(&path).unwrap();

        assert_eq!(config.manifest, "list.txt");
        assert_eq!(
            config.substitutions.substitutions,
            vec![
                Substitution::new("colour", "color", ""),
                Substitution::new("Colour", "Color", "Capitalized"),
            ]
        );
    }

    #[test]
    fn malformed_json_is_config_error() {
        let (_dir, path) = write_config("{ not json");
        let err = load_config(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidJson);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/rename.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalIoError);
    }

    #[test]
    fn empty_substitution_list_is_rejected() {
        let (_dir, path) = write_config(r#"{"substitutions": []}"#);
        let err = load_config(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
        assert_eq!(err.details["key"], "substitutions");
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let (_dir, path) = write_config(r#"{"substitutions": [{"from": "", "to": "x"}]}"#);
        let err = load_config(&path).unwrap_err();
        assert_eq!(err.details["key"], "substitutions[0].from");
    }

    #[test]
    fn separator_in_replacement_is_rejected() {
        let config = RenameConfig {
            manifest: "m.txt".to_string(),
            substitutions: SubstitutionSet::new(vec![Substitution::new("a", "b/c", "")]),
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.details["key"], "substitutions[0].to");
    }
}
