//! YAML configuration: embedded defaults, optional user file, CLI overrides.
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::debug;

use crate::error::SummaryError;
use crate::ignore_set::IgnoreSet;

pub mod constants;

// ============================================================================
// Config Types
// ============================================================================

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Entry names skipped in both sections
    pub ignore: Vec<String>,
    /// File-name ending selected for concatenation, always dot-prefixed
    pub suffix: String,
    /// Output document path
    pub output: PathBuf,
}

/// User config file: every field optional, present fields replace the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub ignore: Option<Vec<String>>,
    pub suffix: Option<String>,
    pub output: Option<PathBuf>,
}

// ============================================================================
// Defaults (embedded at compile time)
// ============================================================================

fn parse_yaml<T: for<'de> Deserialize<'de>>(name: &str, content: &str) -> T {
    serde_yaml::from_str(content).unwrap_or_else(|e| panic!("Failed to parse {}: {}", name, e))
}

pub static DEFAULTS: LazyLock<SummaryConfig> = LazyLock::new(|| {
    let mut cfg: SummaryConfig = parse_yaml("config.yaml", include_str!("../../../../yamls/config.yaml"));
    cfg.suffix = normalize_suffix(&cfg.suffix);
    cfg
});

// ============================================================================
// Loading
// ============================================================================

impl Default for SummaryConfig {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

impl SummaryConfig {
    /// Resolve defaults plus a user config file.
    ///
    /// An explicit path must exist. Without one, `.project-summary.yaml` in
    /// `root` is used when present.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self, SummaryError> {
        let mut cfg = Self::default();

        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let candidate = root.join(constants::USER_CONFIG_FILE);
                candidate.is_file().then_some(candidate)
            }
        };

        if let Some(path) = path {
            debug!(path = %path.display(), "loading config file");
            cfg.apply(read_partial(&path)?);
        }

        Ok(cfg)
    }

    /// Overlay the fields present in a user file.
    pub fn apply(&mut self, partial: PartialConfig) {
        if let Some(ignore) = partial.ignore {
            self.ignore = ignore;
        }
        if let Some(suffix) = partial.suffix {
            self.set_suffix(&suffix);
        }
        if let Some(output) = partial.output {
            self.output = output;
        }
    }

    /// Set the target suffix; `tsx` and `.tsx` are equivalent.
    pub fn set_suffix(&mut self, suffix: &str) {
        self.suffix = normalize_suffix(suffix);
    }

    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::new(self.ignore.iter().cloned())
    }

    /// Title of the content section, e.g. `Concatenated TSX Files`.
    pub fn content_title(&self) -> String {
        format!("Concatenated {} Files", self.suffix.trim_start_matches('.').to_uppercase())
    }
}

fn read_partial(path: &Path) -> Result<PartialConfig, SummaryError> {
    let content = fs::read_to_string(path)
        .map_err(|e| SummaryError::Config { path: path.to_path_buf(), reason: e.to_string() })?;
    // An empty file deserialises to unit, not a map
    if content.trim().is_empty() {
        return Ok(PartialConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|e| SummaryError::Config { path: path.to_path_buf(), reason: e.to_string() })
}

fn normalize_suffix(suffix: &str) -> String {
    format!(".{}", suffix.trim().trim_start_matches('.'))
}
