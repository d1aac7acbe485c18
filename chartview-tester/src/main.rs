mod report;

use anyhow::{Context, Result};
use chartview_core::{Navigation, RouterConfig};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use report::{build_report, generate_console_report, generate_json_report};

#[derive(Debug, Parser)]
#[command(name = "chartview-tester", version = "0.1.0")]
#[command(about = "Inspect the Chartview route table and check how paths resolve")]
struct Args {
    /// Addressing mode: history or hash
    #[arg(long, default_value = "history")]
    mode: String,

    /// Deployment base path (e.g. /charts)
    #[arg(long)]
    base: Option<String>,

    /// Fallback for unmatched paths: blank, not-found or redirect:<path>
    #[arg(long, default_value = "blank")]
    fallback: String,

    /// Print the route table
    #[arg(long)]
    list: bool,

    /// Paths to resolve (comma-separated)
    #[arg(long)]
    resolve: Option<String>,

    /// Exit with an error when any resolved path matches no route
    #[arg(long)]
    strict: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let navigation = install_navigation(&args)?;
    let paths = args.resolve.as_deref().map(split_csv).unwrap_or_default();
    let list = args.list || paths.is_empty();
    let report = build_report(&navigation, list, &paths);

    let mut out = open_output(args.output.as_deref())?;
    match args.report.as_str() {
        "json" => generate_json_report(out.as_mut(), &report)?,
        _ => {
            if args.verbose {
                writeln!(
                    out,
                    "{}",
                    "📈 Chartview Route Tester".bright_cyan().bold()
                )?;
            }
            generate_console_report(out.as_mut(), &report)?;
        }
    }
    out.flush()?;

    let unmatched = report.unmatched();
    if args.strict && unmatched > 0 {
        anyhow::bail!("{unmatched} path(s) matched no route");
    }
    Ok(())
}

fn install_navigation(args: &Args) -> Result<Navigation> {
    let config = RouterConfig::from_settings(
        Some(&args.mode),
        args.base.as_deref(),
        Some(&args.fallback),
    )
    .context("invalid router settings")?;
    log::info!(
        "Installing navigation: mode={} fallback={}",
        config.mode,
        config.fallback
    );
    Navigation::new(config).context("invalid router configuration")
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Report sink: the given file, or stdout when no path is set.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(stdout())),
    })
}
