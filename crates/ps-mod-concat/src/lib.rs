//! Concatenated file dump for the second section of the summary.
mod collect;

pub use collect::{CollectStats, collect_files};
