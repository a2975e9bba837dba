//! scope-report — generate the C++ singleton scope tutorial report.
//!
//! Renders the embedded topic catalog into a single Markdown document,
//! pulling each topic's expected output from `<root>/<topic>/plan.md` when
//! the plan file carries an `## Expected Output` block:
//!
//! - `scope-report` writes `./singleton_scope_report.md`
//! - `scope-report -r path/to/tutorial -o report.md`

mod catalog;
mod extract;
mod model;
mod render;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Default report file name, relative to the project root.
const OUTPUT_FILE_NAME: &str = "singleton_scope_report.md";

#[derive(Parser)]
#[command(
    name = "scope-report",
    about = "Generate the C++ singleton scope tutorial report"
)]
struct Cli {
    /// Project root holding the per-scope plan files (default: current directory)
    #[arg(short = 'r', long)]
    root: Option<PathBuf>,

    /// Output file (default: <root>/singleton_scope_report.md)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

/// Paths resolved once at startup.
struct ReportConfig {
    project_root: PathBuf,
    output_file: PathBuf,
}

impl ReportConfig {
    fn from_cli(cli: Cli) -> Result<Self> {
        let project_root = match cli.root {
            Some(root) => root,
            None => std::env::current_dir().context("failed to determine current directory")?,
        };
        let output_file = cli
            .output
            .unwrap_or_else(|| project_root.join(OUTPUT_FILE_NAME));
        Ok(ReportConfig {
            project_root,
            output_file,
        })
    }
}

fn main() -> Result<()> {
    let config = ReportConfig::from_cli(Cli::parse())?;

    println!("Generating report...");
    println!("Project root: {}", config.project_root.display());
    println!("Output file: {}", config.output_file.display());

    let plans = extract::PlanFiles {
        root: config.project_root.clone(),
    };
    let document = report::assemble(catalog::TOPICS, &plans);
    let stats = report::write_report(&config.output_file, &document)?;

    println!("\nReport generated successfully!");
    println!("Size: {} characters", report::group_thousands(stats.chars));
    println!("Lines: {}", report::group_thousands(stats.lines));

    Ok(())
}
