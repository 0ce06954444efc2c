use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use ps_base::config::constants::{STRUCTURE_TITLE, TITLE_RULE, TREE_ROOT_INDENT};
use ps_base::{IgnoreSet, SummaryConfig, SummaryError};
use ps_mod_concat::{CollectStats, collect_files};
use ps_mod_tree::render_tree;

/// Result of a successful run
#[derive(Debug)]
pub struct SummaryReport {
    pub output: PathBuf,
    pub stats: CollectStats,
}

/// Write the summary of `root` to `config.output`, replacing any previous file.
///
/// The output is opened before the tree is rendered, so an output path inside
/// `root` shows up in the tree. Nothing is cleaned up on failure.
pub fn write_summary(root: &Path, config: &SummaryConfig) -> Result<SummaryReport, SummaryError> {
    let ignore = config.ignore_set();
    debug!(ignore = ?ignore.sorted(), suffix = %config.suffix, "resolved settings");

    let file = File::create(&config.output).map_err(|e| SummaryError::io(&config.output, e))?;
    let mut out = BufWriter::new(file);

    let stats = write_document(root, config, &ignore, &mut out)?;
    out.flush()?;

    Ok(SummaryReport { output: config.output.clone(), stats })
}

fn write_document<W: Write>(
    root: &Path,
    config: &SummaryConfig,
    ignore: &IgnoreSet,
    out: &mut W,
) -> Result<CollectStats, SummaryError> {
    writeln!(out, "{}", STRUCTURE_TITLE)?;
    writeln!(out, "{}", TITLE_RULE)?;
    writeln!(out, "{}/", root_name(root)?)?;
    out.write_all(render_tree(root, TREE_ROOT_INDENT, ignore)?.as_bytes())?;
    out.write_all(b"\n\n")?;

    writeln!(out, "{}", config.content_title())?;
    writeln!(out, "{}", TITLE_RULE)?;
    collect_files(root, ignore, &config.suffix, out)
}

/// Last component of the absolute root path; empty for `/`.
///
/// `..` is folded lexically, so `proj/inner/..` is named `proj`.
fn root_name(root: &Path) -> Result<String, SummaryError> {
    let abs = std::path::absolute(root).map_err(|e| SummaryError::io(root, e))?;

    let mut normalized = PathBuf::new();
    for component in abs.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }

    Ok(normalized.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Project root at `<tmp>/proj`, output outside it.
    fn setup() -> (TempDir, PathBuf, SummaryConfig) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("proj");
        fs::create_dir(&root).unwrap();
        let config = SummaryConfig { output: tmp.path().join("project_summary.txt"), ..SummaryConfig::default() };
        (tmp, root, config)
    }

    #[test]
    fn test_full_document_layout() {
        let (_tmp, root, config) = setup();
        write(&root, "src/App.tsx", "hello");

        let report = write_summary(&root, &config).unwrap();
        let output = fs::read_to_string(&report.output).unwrap();

        let sep = "=".repeat(80);
        let expected = format!(
            "Project Folder Structure\n\
             ========================\n\
             proj/\n \
             └── src\n     \
             └── App.tsx\n\
             \n\n\
             Concatenated TSX Files\n\
             ========================\n\
             \n{sep}\n// FILE: src/App.tsx\n{sep}\n\nhello"
        );
        assert_eq!(output, expected);
        assert_eq!(report.stats, CollectStats { files_written: 1, read_errors: 0 });
    }

    #[test]
    fn test_second_run_overwrites() {
        let (_tmp, root, config) = setup();
        write(&root, "App.tsx", "v1");
        fs::write(&config.output, "STALE CONTENT FROM AN OLDER RUN ".repeat(100)).unwrap();

        write_summary(&root, &config).unwrap();
        let first = fs::read_to_string(&config.output).unwrap();
        write_summary(&root, &config).unwrap();
        let second = fs::read_to_string(&config.output).unwrap();

        assert!(!first.contains("STALE"));
        assert_eq!(first, second);
        assert_eq!(second.matches("Project Folder Structure").count(), 1);
    }

    #[test]
    fn test_ignored_names_absent_from_both_sections() {
        let (_tmp, root, config) = setup();
        write(&root, "node_modules/pkg/Thing.tsx", "x");
        write(&root, "src/node_modules/Deep.tsx", "y");
        write(&root, "src/.next/Cache.tsx", "z");
        write(&root, "src/Keep.tsx", "keep");

        write_summary(&root, &config).unwrap();
        let output = fs::read_to_string(&config.output).unwrap();

        assert!(!output.contains("node_modules"));
        assert!(!output.contains(".next"));
        assert!(!output.contains("Thing.tsx"));
        assert!(output.contains("// FILE: src/Keep.tsx"));
        assert!(output.contains("     └── Keep.tsx\n"));
    }

    #[test]
    fn test_output_inside_root_appears_in_tree() {
        let (_tmp, root, mut config) = setup();
        config.output = root.join("project_summary.txt");
        write(&root, "App.tsx", "");

        write_summary(&root, &config).unwrap();
        let output = fs::read_to_string(&config.output).unwrap();
        assert!(output.contains(" ├── App.tsx\n └── project_summary.txt\n"));
    }

    #[test]
    fn test_missing_root_gives_empty_sections() {
        let (tmp, _root, config) = setup();
        let missing = tmp.path().join("missing");

        let report = write_summary(&missing, &config).unwrap();
        let output = fs::read_to_string(&report.output).unwrap();
        let expected = concat!(
            "Project Folder Structure\n========================\nmissing/\n",
            "\n\n",
            "Concatenated TSX Files\n========================\n",
        );
        assert_eq!(output, expected);
        assert_eq!(report.stats, CollectStats::default());
    }

    #[test]
    fn test_unopenable_output_is_error() {
        let (tmp, root, mut config) = setup();
        config.output = tmp.path().join("no-such-dir").join("out.txt");

        let err = write_summary(&root, &config).unwrap_err();
        assert!(matches!(err, SummaryError::Io { .. }));
        assert!(err.to_string().contains("out.txt"));
    }

    #[test]
    fn test_custom_suffix_changes_title_and_selection() {
        let (_tmp, root, mut config) = setup();
        config.set_suffix("rs");
        write(&root, "lib.rs", "pub fn f() {}");
        write(&root, "App.tsx", "");

        write_summary(&root, &config).unwrap();
        let output = fs::read_to_string(&config.output).unwrap();
        assert!(output.contains("Concatenated RS Files\n"));
        assert!(output.contains("// FILE: lib.rs\n"));
        assert!(!output.contains("// FILE: App.tsx"));
    }

    #[test]
    fn test_root_name() {
        assert_eq!(root_name(Path::new("/")).unwrap(), "");
        assert_eq!(root_name(Path::new("/tmp/my-app")).unwrap(), "my-app");
    }

    #[test]
    fn test_root_name_folds_parent_components() {
        let tmp = TempDir::new().unwrap();
        let inner = tmp.path().join("myproj").join("inner");
        fs::create_dir_all(&inner).unwrap();

        assert_eq!(root_name(&inner.join("..")).unwrap(), "myproj");
        assert_eq!(root_name(&inner.join(".").join("..").join("..")).unwrap(), tmp_name(&tmp));
        assert_eq!(root_name(Path::new("/a/b/../..")).unwrap(), "");
    }

    #[test]
    fn test_parent_root_named_in_document() {
        let (_tmp, root, config) = setup();
        write(&root, "inner/App.tsx", "x");

        write_summary(&root.join("inner").join(".."), &config).unwrap();
        let output = fs::read_to_string(&config.output).unwrap();
        assert!(output.starts_with("Project Folder Structure\n========================\nproj/\n"));
        assert!(output.contains("// FILE: inner/App.tsx"));
    }

    fn tmp_name(tmp: &TempDir) -> String {
        tmp.path().file_name().unwrap().to_string_lossy().into_owned()
    }
}
