use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use access_log_report::{logging, pipeline, report, ReportFormat, Settings};

#[derive(Parser, Debug)]
#[command(name = "access-log-report")]
#[command(about = "Summarize an access log: requests per IP, top endpoint, failed logins")]
struct Args {
    /// Access log to analyze [default: sample.log]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report file to write [default: log_analysis_results.csv]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Failed-login count an IP must exceed to be flagged [default: 10]
    #[arg(short, long)]
    threshold: Option<u64>,

    /// Report file format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Config file (TOML, YAML or JSON) layered under env and flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip lines with too few fields instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Print the console report only, write no file
    #[arg(long)]
    no_file: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Apply command-line overrides on top of loaded settings.
    fn apply(&self, settings: &mut Settings) {
        if let Some(input) = &self.input {
            settings.input = input.clone();
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if let Some(threshold) = self.threshold {
            settings.threshold = threshold;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if self.skip_malformed {
            settings.skip_malformed = true;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let mut settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    args.apply(&mut settings);

    let analysis = pipeline::analyze(&settings)
        .with_context(|| format!("Failed to analyze {}", settings.input.display()))?;

    report::console::print(&analysis);

    if !args.no_file {
        report::write_report(&analysis, settings.format, &settings.output)
            .with_context(|| format!("Failed to write {}", settings.output.display()))?;
        println!("\nResults saved to {}", settings.output.display());
    }

    Ok(())
}
