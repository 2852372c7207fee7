//! Heuristic classification of author affiliations.
//!
//! An affiliation counts as non-academic when it contains any industry
//! keyword and no academic keyword. Academic keywords always veto, so
//! "Pharma Dept., University Hospital" stays academic.

/// Substrings that suggest a commercial/industry organization.
pub const NON_ACADEMIC_KEYWORDS: &[&str] = &[
    "pharma",
    "pharmaceutical",
    "biotech",
    "inc",
    "ltd",
    "gmbh",
    "corp",
    "company",
    "co.",
    "llc",
    "plc",
    "s.a.",
    "s.p.a.",
    "industries",
    "laboratories",
    "labs",
    "biosciences",
    "therapeutics",
    "genomics",
    "diagnostics",
];

/// Substrings that mark an affiliation as academic, vetoing any match above.
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "faculty",
    "hospital",
    "center",
    "centre",
    "department",
    "academy",
];

/// Return true if the affiliation text is likely non-academic (pharma/biotech).
///
/// Case-insensitive substring matching, not whole-word. Pure and total; an
/// empty string is academic.
#[must_use]
pub fn is_non_academic(affiliation: &str) -> bool {
    let affil = affiliation.to_lowercase();
    NON_ACADEMIC_KEYWORDS.iter().any(|word| affil.contains(word))
        && !ACADEMIC_KEYWORDS.iter().any(|word| affil.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_affiliation_is_non_academic() {
        assert!(is_non_academic("Acme Biotech Inc."));
        assert!(is_non_academic("Genentech Inc., South San Francisco, CA, USA"));
        assert!(is_non_academic("Novartis Pharma AG, Basel, Switzerland"));
    }

    #[test]
    fn test_academic_affiliation_is_academic() {
        assert!(!is_non_academic("Stanford University"));
        assert!(!is_non_academic("Harvard Medical School"));
    }

    #[test]
    fn test_academic_keyword_vetoes_regardless_of_order() {
        assert!(!is_non_academic("Pharma Dept., University Hospital"));
        assert!(!is_non_academic("University spin-off, Acme Pharma Ltd."));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(is_non_academic("ACME THERAPEUTICS LLC"));
        assert!(!is_non_academic("STANFORD UNIVERSITY"));
    }

    #[test]
    fn test_matching_is_substring_not_whole_word() {
        // "inc" matches inside "Incorporated"
        assert!(is_non_academic("Acme Incorporated"));
        // "inc" also matches inside "Princeton", but "university" vetoes
        assert!(!is_non_academic("Princeton University"));
    }

    #[test]
    fn test_empty_and_plain_strings_are_academic() {
        assert!(!is_non_academic(""));
        assert!(!is_non_academic("somewhere in the world"));
    }
}
