use std::fs;
use std::io::{self, Write};
use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, warn};

use ps_base::config::constants::{ERROR_HEADER_PREFIX, ERROR_REASON_PREFIX, FILE_HEADER_PREFIX, separator};
use ps_base::{IgnoreSet, SummaryError};

/// Outcome of a collection pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectStats {
    /// Files whose content was written
    pub files_written: usize,
    /// Files replaced by an error block
    pub read_errors: usize,
}

/// Append every file under `root` whose name ends with `suffix` to `out`.
///
/// The walk is top-down: within a directory, files come before
/// subdirectories, each sorted by name. Ignored names are rejected before the
/// walker descends into them, so nothing below an ignored directory is ever
/// opened. A file that can't be read as UTF-8 text is replaced by an error
/// block; only failures writing to `out` abort the pass.
pub fn collect_files<W: Write>(
    root: &Path,
    ignore: &IgnoreSet,
    suffix: &str,
    out: &mut W,
) -> Result<CollectStats, SummaryError> {
    let skip = ignore.clone();
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_path(|a, b| a.is_dir().cmp(&b.is_dir()).then_with(|| a.file_name().cmp(&b.file_name())))
        .filter_entry(move |entry| !skip.contains(entry.file_name()));

    let sep = separator();
    let mut stats = CollectStats::default();

    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        // The root itself is never a candidate, even when it is a file
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        if path.is_dir() || !entry.file_name().to_string_lossy().ends_with(suffix) {
            continue;
        }

        let rel = display_path(root, path);
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(file = %rel, bytes = content.len(), "appending");
                write_file_block(out, &sep, &rel, &content).map_err(SummaryError::Write)?;
                stats.files_written += 1;
            }
            Err(e) => {
                warn!(file = %rel, error = %e, "could not read file");
                write_error_block(out, &sep, &rel, &e).map_err(SummaryError::Write)?;
                stats.read_errors += 1;
            }
        }
    }

    Ok(stats)
}

/// Path relative to the walk root, `/`-separated on every platform.
fn display_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components().map(|c| c.as_os_str().to_string_lossy()).collect::<Vec<_>>().join("/")
}

fn write_file_block<W: Write>(out: &mut W, sep: &str, rel: &str, content: &str) -> io::Result<()> {
    write!(out, "\n{}\n{}{}\n{}\n\n", sep, FILE_HEADER_PREFIX, rel, sep)?;
    out.write_all(content.as_bytes())
}

fn write_error_block<W: Write>(out: &mut W, sep: &str, rel: &str, reason: &io::Error) -> io::Result<()> {
    write!(out, "\n{}\n{}{}\n{}{}\n{}\n\n", sep, ERROR_HEADER_PREFIX, rel, ERROR_REASON_PREFIX, reason, sep)
}
