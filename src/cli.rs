use std::path::PathBuf;

use clap::Parser;

use ps_base::SummaryConfig;

#[derive(Parser, Debug)]
#[command(name = "project-summary")]
#[command(about = "Write a project's folder tree and concatenated sources into one text file", long_about = None)]
pub struct Cli {
    /// Directory to summarise
    #[arg(short, long, env = "PROJECT_SUMMARY_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Output file, replaced on every run
    #[arg(short, long, env = "PROJECT_SUMMARY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// File-name ending to concatenate (`tsx` or `.tsx`)
    #[arg(short, long, env = "PROJECT_SUMMARY_EXT")]
    pub ext: Option<String>,

    /// Extra name to ignore everywhere (repeatable)
    #[arg(short, long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// YAML config file (defaults to .project-summary.yaml in the root, if present)
    #[arg(short, long, env = "PROJECT_SUMMARY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    /// Flags win over the config file; `--ignore` adds to the configured names.
    pub fn apply(&self, config: &mut SummaryConfig) {
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(ext) = &self.ext {
            config.set_suffix(ext);
        }
        for name in &self.ignore {
            if !config.ignore.contains(name) {
                config.ignore.push(name.clone());
            }
        }
    }
}
