use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use rsrscan::{report, scan, ExportFormat, ScanConfig};

/// Print the paragraphs of a .docx document that mention RSR
#[derive(Parser, Debug)]
#[command(name = "rsrscan", version, about)]
struct Cli {
    /// Document to scan (defaults to the configured document)
    path: Option<PathBuf>,

    /// Substring marking a paragraph as RSR data (case-insensitive)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    term: Option<String>,

    /// Keyword searched for when no RSR data is found; repeat for several
    #[arg(
        long = "related",
        value_name = "KEYWORD",
        value_parser = NonEmptyStringValueParser::new()
    )]
    related_terms: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
    format: ExportFormat,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rsrscan=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.init_config {
        match ScanConfig::init_default()? {
            Some(path) => println!("Wrote default configuration to {}", path.display()),
            None => println!("No configuration directory available on this platform"),
        }
        return Ok(());
    }

    let config =
        ScanConfig::load_or_default().with_overrides(cli.path, cli.term, cli.related_terms);
    let options = config.scan_options();

    // Scan failures are part of the report, not of the exit status
    let outcome = scan(&config.document, &options);
    print!("{}", report::export(&outcome, &cli.format)?);

    Ok(())
}
