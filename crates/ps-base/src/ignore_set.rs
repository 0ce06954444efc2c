use std::collections::HashSet;
use std::ffi::OsStr;

/// Entry names excluded from traversal everywhere.
///
/// Matching is on the exact file name of an entry, never on a path or a glob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// True if an entry with this file name must be skipped.
    pub fn contains(&self, name: &OsStr) -> bool {
        // Non-UTF-8 names can't be listed in the YAML config, so they never match
        name.to_str().is_some_and(|n| self.names.contains(n))
    }

    /// Names in sorted order, for logging.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
