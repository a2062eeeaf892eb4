use clap::Args;
use serde::Serialize;
use std::io::Write;

use manifest_rename::config::{self, RenameConfig};
use manifest_rename::manifest::Manifest;
use manifest_rename::path::expand_tilde;
use manifest_rename::rename::{self, RunOptions, RunReport, Substitution, SubstitutionSet};
use manifest_rename::Error;

use crate::commands::{CmdResult, GlobalArgs};

/// Where the substitution list comes from.
#[derive(Args, Debug, Default)]
pub struct SubstitutionArgs {
    /// JSON config file (manifest path and ordered substitution list)
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Term to correct; expands to its lowercase, Capitalized and UPPER variants
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Corrected form of --from
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Manifest file, one path per line (default: files_to_rename.txt)
    pub manifest: Option<String>,

    #[command(flatten)]
    pub substitutions: SubstitutionArgs,

    /// Report what would be renamed without touching the file system
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Default)]
pub struct VariantsArgs {
    #[command(flatten)]
    pub substitutions: SubstitutionArgs,
}

#[derive(Serialize)]
pub struct VariantsOutput {
    pub substitutions: Vec<Substitution>,
}

fn resolve_config(args: &SubstitutionArgs) -> manifest_rename::Result<RenameConfig> {
    let mut config = match &args.config {
        Some(path) => config::load_config(&expand_tilde(path))?,
        None => RenameConfig::default(),
    };

    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        if from.is_empty() {
            return Err(Error::validation_invalid_argument(
                "from",
                "Term to correct must not be empty",
            ));
        }
        config.substitutions = SubstitutionSet::case_variants(from, to);
    }

    config.validate()?;
    Ok(config)
}

pub(crate) fn run(args: RunArgs, global: &GlobalArgs) -> CmdResult<RunReport> {
    let config = resolve_config(&args.substitutions)?;

    let manifest_path = expand_tilde(args.manifest.as_deref().unwrap_or(&config.manifest));
    let manifest = Manifest::load(&manifest_path)?;

    let mut out: Box<dyn Write> = if global.json {
        Box::new(std::io::stderr().lock())
    } else {
        Box::new(std::io::stdout().lock())
    };

    let options = RunOptions {
        dry_run: args.dry_run,
    };
    let report = rename::run(&manifest, &config.substitutions, options, &mut out);

    Ok((report, 0))
}

pub(crate) fn variants(args: VariantsArgs) -> CmdResult<VariantsOutput> {
    let config = resolve_config(&args.substitutions)?;

    Ok((
        VariantsOutput {
            substitutions: config.substitutions.substitutions,
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifest_rename::ErrorCode;

    #[test]
    fn no_flags_resolve_to_builtin_correction() {
        let config = resolve_config(&SubstitutionArgs::default()).unwrap();
        assert_eq!(config.substitutions, SubstitutionSet::default());
        assert_eq!(config.manifest, "files_to_rename.txt");
    }

    #[test]
    fn term_flags_replace_configured_list() {
        let args = SubstitutionArgs {
            config: None,
            from: Some("colour".to_string()),
            to: Some("color".to_string()),
        };
        let config = resolve_config(&args).unwrap();
        let froms: Vec<&str> = config.substitutions.iter().map(|s| s.from.as_str()).collect();
        assert_eq!(froms, vec!["colour", "Colour", "COLOUR"]);
    }

    #[test]
    fn empty_term_is_rejected() {
        let args = SubstitutionArgs {
            config: None,
            from: Some(String::new()),
            to: Some("x".to_string()),
        };
        let err = resolve_config(&args).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn run_with_missing_manifest_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = RunArgs {
            manifest: Some(dir.path().join("nope.txt").to_string_lossy().to_string()),
            ..RunArgs::default()
        };
        let err = run(args, &GlobalArgs { json: true }).unwrap_err();
        assert_eq!(err.code, ErrorCode::ManifestUnreadable);
    }
}
