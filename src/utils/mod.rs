//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `path` - Path expansion and base-name splitting

pub mod io;
pub mod path;
