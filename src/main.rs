mod cli;
mod summary;

use clap::Parser;
use tracing::info;

use ps_base::{SummaryConfig, SummaryError};

use cli::Cli;
use summary::SummaryReport;

fn main() {
    // Env vars for the flags may come from .env
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Logs go to stderr so stdout keeps the single status line
    let level = if cli.debug { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();

    match run(&cli) {
        Ok(report) => {
            info!(files = report.stats.files_written, read_errors = report.stats.read_errors, "summary written");
            println!("✅ Success! Project summary created at: '{}'", report.output.display());
        }
        Err(e) => println!("❌ An error occurred: {}", e),
    }
}

fn run(cli: &Cli) -> Result<SummaryReport, SummaryError> {
    let mut config = SummaryConfig::load(cli.config.as_deref(), &cli.root)?;
    cli.apply(&mut config);

    info!(root = %cli.root.display(), output = %config.output.display(), "writing project summary");
    summary::write_summary(&cli.root, &config)
}
