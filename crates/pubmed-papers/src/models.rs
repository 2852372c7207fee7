//! Row model for the tabular output.

/// One normalized output row extracted from a PubMed article record.
///
/// Rows are immutable after extraction; the filter step only selects or
/// discards them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperRow {
    /// PubMed identifier (PMID).
    pub pubmed_id: String,

    /// Article title.
    pub title: String,

    /// Publication date: `"YYYY-MM-DD"`, `"YYYY-MM"`, `"YYYY"` or `""`,
    /// depending on which sub-fields the source record supplies.
    pub publication_date: String,

    /// One entry per flagged (author, affiliation) pair, in document order.
    /// Names repeat when an author has several non-academic affiliations.
    pub non_academic_authors: Vec<String>,

    /// Unique non-academic affiliation strings, in first-seen order.
    pub company_affiliations: Vec<String>,

    /// First email-shaped substring found across all affiliations, or `""`.
    pub corresponding_email: String,
}

impl PaperRow {
    /// Check whether the row has at least one non-academic author.
    #[must_use]
    pub fn has_non_academic_authors(&self) -> bool {
        !self.non_academic_authors.is_empty()
    }

    /// Non-academic author names joined for display.
    #[must_use]
    pub fn joined_authors(&self) -> String {
        self.non_academic_authors.join("; ")
    }

    /// Company affiliations joined for display.
    #[must_use]
    pub fn joined_affiliations(&self) -> String {
        self.company_affiliations.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_without_authors_fails_predicate() {
        let row = PaperRow { pubmed_id: "1".to_string(), ..PaperRow::default() };
        assert!(!row.has_non_academic_authors());
    }

    #[test]
    fn test_joined_fields_use_semicolon_separator() {
        let row = PaperRow {
            non_academic_authors: vec!["Jane Doe".to_string(), "John Roe".to_string()],
            company_affiliations: vec!["Acme Inc.".to_string()],
            ..PaperRow::default()
        };
        assert!(row.has_non_academic_authors());
        assert_eq!(row.joined_authors(), "Jane Doe; John Roe");
        assert_eq!(row.joined_affiliations(), "Acme Inc.");
    }
}
