//! Base-name correction for manifest paths.
//!
//! Applies an ordered list of literal substitutions to the final segment of
//! each listed path and renames it in place.

mod engine;
mod substitution;

pub use engine::{
    rename_entry, run, EntryOutcome, EntryResult, RunOptions, RunReport, RunSummary,
};
pub use substitution::{Substitution, SubstitutionSet};
