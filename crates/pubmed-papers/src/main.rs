//! Command-line entry point.
//!
//! Search → fetch → extract → filter → CSV sink, with diagnostics on stderr
//! so stdout carries only the table.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pubmed_papers::config::Config;
use pubmed_papers::{PubMedClient, output};

#[derive(Parser, Debug)]
#[command(name = "get-papers-list")]
#[command(about = "Fetch PubMed papers with at least one non-academic (pharma/biotech) author")]
#[command(version)]
struct Cli {
    /// PubMed query string (full PubMed search syntax).
    query: String,

    /// Write results as CSV to this file instead of the console.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print debug information (request URLs, response previews, skipped records).
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default = if debug { "pubmed_papers=debug" } else { "pubmed_papers=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            if cli.debug {
                // Full cause chain
                eprintln!("{err:?}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let client = PubMedClient::new(Config::from_env())?;

    tracing::info!("fetching PubMed IDs");
    let ids = client.search(&cli.query).await?;
    if ids.is_empty() {
        println!("No papers found for the given query.");
        return Ok(());
    }

    tracing::info!(count = ids.len(), "found papers, fetching details");
    let rows = client.fetch_details(&ids).await?;

    let filtered = output::filter_non_academic(rows);
    if filtered.is_empty() {
        println!("No papers found with non-academic (pharma/biotech) authors.");
        return Ok(());
    }

    match &cli.file {
        Some(path) => {
            // Relative paths resolve against the current working directory.
            let path = std::env::current_dir()?.join(path);
            output::write_csv_file(&filtered, &path)?;
            tracing::info!(path = %path.display(), "results saved");
            println!("Results saved to: {}", path.display());
        }
        None => output::write_csv(&filtered, std::io::stdout().lock())?,
    }

    Ok(())
}
