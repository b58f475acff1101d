mod reports;
mod scenario;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;
use storefront_core::JsonCatalog;

use scenario::{ScenarioCtx, ScenarioResult, catalog_from_file, expand_keys, list_scenarios};
use util::split_csv;

const EMBEDDED_CATALOG: &str = include_str!("../../storefront-core/fixtures/products.json");

#[derive(Debug, Parser)]
#[command(name = "storefront-tester", version = "0.1.0")]
#[command(about = "Automated QA scenarios for the storefront widget")]
struct Args {
    /// JSON catalog file (defaults to the embedded 13-product fixture)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
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

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner(&args);

    let start_time = Instant::now();
    let (catalog, catalog_label) = load_catalog(&args)?;
    let ctx = ScenarioCtx {
        catalog,
        verbose: args.verbose,
    };
    let keys = expand_keys(split_csv(&args.scenarios));
    let results = scenario::run_scenarios(&keys, &ctx);

    write_report(&args, &results, &catalog_label, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:12} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

/// Banner goes to stderr when the report itself is on stdout in a machine format.
fn announce_banner(args: &Args) {
    let banner = format!(
        "{}\n{}",
        "🛒 Storefront Automated Tester".bright_cyan().bold(),
        "==============================".cyan()
    );
    if args.output.is_none() && args.report != "console" {
        eprintln!("{banner}");
    } else {
        println!("{banner}");
    }
}

fn load_catalog(args: &Args) -> Result<(JsonCatalog, String)> {
    match &args.catalog {
        Some(path) => Ok((catalog_from_file(path)?, path.display().to_string())),
        None => Ok((JsonCatalog::new(EMBEDDED_CATALOG), "embedded fixture".to_string())),
    }
}

fn write_report(
    args: &Args,
    results: &[ScenarioResult],
    catalog_label: &str,
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results, catalog_label)?,
        "markdown" => reports::generate_markdown_report(&mut output_target, results)?,
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner().context("flushing report")?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
