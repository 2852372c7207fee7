//! Fetch PubMed papers with at least one non-academic (pharma/biotech) author.
//!
//! The pipeline is one ESearch call (query → record IDs), one batched EFetch
//! call (IDs → article XML), per-record extraction into [`models::PaperRow`],
//! a filter keeping rows with at least one non-academic author, and a CSV
//! sink writing to a file or the console.
//!
//! # Example
//!
//! ```no_run
//! use pubmed_papers::{Config, PubMedClient, output};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new(Config::default())?;
//!     let ids = client.search("cancer immunotherapy").await?;
//!     let rows = client.fetch_details(&ids).await?;
//!     let filtered = output::filter_non_academic(rows);
//!     output::write_csv(&filtered, std::io::stdout().lock())?;
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod output;

pub use client::PubMedClient;
pub use config::Config;
pub use error::{ClientError, OutputError, RecordParseError};
pub use models::PaperRow;
