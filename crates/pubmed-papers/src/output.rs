//! Filter and CSV sink for extracted rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::OutputResult;
use crate::models::PaperRow;

/// Column headers, in the fixed output order.
pub const HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academicAuthor(s)",
    "CompanyAffiliation(s)",
    "Corresponding Author Email",
];

/// Keep only rows with at least one non-academic author.
#[must_use]
pub fn filter_non_academic(rows: Vec<PaperRow>) -> Vec<PaperRow> {
    rows.into_iter().filter(PaperRow::has_non_academic_authors).collect()
}

/// Write `rows` as CSV to `writer`, header first.
///
/// The header is emitted even for zero rows, so console output always shows
/// the column contract.
pub fn write_csv<W: Write>(rows: &[PaperRow], writer: W) -> OutputResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADERS)?;

    for row in rows {
        let authors = row.joined_authors();
        let affiliations = row.joined_affiliations();
        csv.write_record([
            row.pubmed_id.as_str(),
            row.title.as_str(),
            row.publication_date.as_str(),
            authors.as_str(),
            affiliations.as_str(),
            row.corresponding_email.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write `rows` to a CSV file at `path`, creating or overwriting it.
///
/// With zero rows no file is created at all. The file handle is scoped to
/// this call and closed on every exit path.
pub fn write_csv_file(rows: &[PaperRow], path: &Path) -> OutputResult<()> {
    if rows.is_empty() {
        return Ok(());
    }
    let file = File::create(path)?;
    write_csv(rows, file)
}
