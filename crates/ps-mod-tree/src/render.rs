use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use ps_base::config::constants::{TREE_BRANCH, TREE_CORNER, TREE_PIPE_INDENT, TREE_SPACE_INDENT};
use ps_base::{IgnoreSet, SummaryError};

/// Render the children of `root` as an ASCII tree, one line per entry.
///
/// Entries are sorted by name at every level and names in `ignore` are left
/// out together with everything below them. Each line starts with `indent`.
/// A directory that no longer exists contributes nothing; any other listing
/// failure is returned.
pub fn render_tree(root: &Path, indent: &str, ignore: &IgnoreSet) -> Result<String, SummaryError> {
    let mut output = String::new();
    build_tree(root, indent, ignore, &mut output)?;
    Ok(output)
}

fn build_tree(dir: &Path, prefix: &str, ignore: &IgnoreSet, output: &mut String) -> Result<(), SummaryError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %dir.display(), "directory vanished, skipping");
            return Ok(());
        }
        Err(e) => return Err(SummaryError::io(dir, e)),
    };

    let mut items: Vec<_> = entries.filter_map(|e| e.ok()).filter(|e| !ignore.contains(&e.file_name())).collect();
    items.sort_by_key(|e| e.file_name());

    let total = items.len();
    for (i, entry) in items.iter().enumerate() {
        let is_last = i == total - 1;
        let connector = if is_last { TREE_CORNER } else { TREE_BRANCH };

        let name = entry.file_name();
        output.push_str(&format!("{}{}{}\n", prefix, connector, name.to_string_lossy()));

        let path = entry.path();
        if path.is_dir() {
            let child_prefix = if is_last { TREE_SPACE_INDENT } else { TREE_PIPE_INDENT };
            build_tree(&path, &format!("{}{}", prefix, child_prefix), ignore, output)?;
        }
    }

    Ok(())
}
