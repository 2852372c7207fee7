//! Extraction of normalized rows from PubMed EFetch XML.
//!
//! The response document is first split into one fragment per
//! `<PubmedArticle>` subtree, then each fragment is deserialized on its own.
//! A record that fails to deserialize is skipped by the caller while the
//! rest of the batch survives; only a document that is not well-formed XML
//! fails as a whole.
//!
//! The typed models below mirror the subset of the PubMed article schema the
//! pipeline reads; everything is optional so that sparse records still parse
//! and only structurally broken ones are skipped.

use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::events::Event;
use regex::Regex;
use serde::Deserialize;

use crate::classify::is_non_academic;
use crate::error::RecordParseError;
use crate::models::PaperRow;

/// Email-shaped substring, e.g. `jane.doe@acme.com`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("valid email regex"));

/// Inline presentation markup PubMed embeds in text fields, e.g.
/// `<ArticleTitle>Role of <i>E. coli</i> in sepsis</ArticleTitle>`.
/// Dropped before deserialization so formatted text reads as plain text.
static INLINE_MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(?:i|b|u|sup|sub|em|strong)(?:\s[^>]*)?>").expect("valid markup regex"));

/// One article record.
#[derive(Debug, Default, Deserialize)]
pub struct PubmedArticle {
    #[serde(rename = "MedlineCitation")]
    medline_citation: Option<MedlineCitation>,
}

#[derive(Debug, Default, Deserialize)]
struct MedlineCitation {
    #[serde(rename = "PMID")]
    pmid: Option<Pmid>,
    #[serde(rename = "Article")]
    article: Option<Article>,
}

/// PMID carries a `Version` attribute, so its text needs a wrapper.
#[derive(Debug, Default, Deserialize)]
struct Pmid {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Default, Deserialize)]
struct Article {
    #[serde(rename = "ArticleTitle")]
    article_title: Option<String>,
    #[serde(rename = "Journal")]
    journal: Option<Journal>,
    #[serde(rename = "AuthorList")]
    author_list: Option<AuthorList>,
}

#[derive(Debug, Default, Deserialize)]
struct Journal {
    #[serde(rename = "JournalIssue")]
    journal_issue: Option<JournalIssue>,
}

#[derive(Debug, Default, Deserialize)]
struct JournalIssue {
    #[serde(rename = "PubDate")]
    pub_date: Option<PubDate>,
}

#[derive(Debug, Default, Deserialize)]
struct PubDate {
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Month")]
    month: Option<String>,
    #[serde(rename = "Day")]
    day: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthorList {
    #[serde(rename = "Author", default)]
    authors: Vec<Author>,
}

#[derive(Debug, Default, Deserialize)]
struct Author {
    #[serde(rename = "LastName")]
    last_name: Option<String>,
    #[serde(rename = "ForeName")]
    fore_name: Option<String>,
    #[serde(rename = "AffiliationInfo", default)]
    affiliation_info: Vec<AffiliationInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct AffiliationInfo {
    #[serde(rename = "Affiliation")]
    affiliation: Option<String>,
}

/// Split an EFetch response document into one XML fragment per record.
///
/// Fails only when the document itself is not well-formed; problems inside a
/// single record surface later, when that fragment is deserialized by
/// [`parse_record`].
pub fn split_article_set(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut records = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) if start.name().as_ref() == b"PubmedArticle" => {
                let inner = reader.read_text(start.name())?;
                records.push(format!("<PubmedArticle>{inner}</PubmedArticle>"));
            }
            Event::Empty(start) if start.name().as_ref() == b"PubmedArticle" => {
                records.push("<PubmedArticle/>".to_string());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(records)
}

/// Deserialize one record fragment.
///
/// Inline presentation markup is flattened first, so a formatted title or
/// affiliation comes through as plain text. A fragment that still fails to
/// deserialize yields a [`RecordParseError`] scoped to that one record.
pub fn parse_record(fragment: &str) -> Result<PubmedArticle, RecordParseError> {
    let plain = INLINE_MARKUP_RE.replace_all(fragment, "");
    quick_xml::de::from_str(&plain).map_err(|e| RecordParseError::Malformed(e.to_string()))
}

/// Turn one parsed article record into an output row.
///
/// Fails only on structural problems (no citation, no PMID). The caller
/// skips such records and continues with the rest of the batch; a single
/// malformed record never aborts a run.
pub fn extract(article: PubmedArticle) -> Result<PaperRow, RecordParseError> {
    let citation = article.medline_citation.ok_or(RecordParseError::MissingCitation)?;

    let pubmed_id = citation.pmid.map(|p| p.value).unwrap_or_default();
    if pubmed_id.is_empty() {
        return Err(RecordParseError::MissingPmid);
    }

    let art = citation.article.unwrap_or_default();
    let title = art.article_title.unwrap_or_default();
    let publication_date = art
        .journal
        .as_ref()
        .and_then(|j| j.journal_issue.as_ref())
        .and_then(|issue| issue.pub_date.as_ref())
        .map(join_date_parts)
        .unwrap_or_default();

    let mut non_academic_authors = Vec::new();
    let mut company_affiliations: Vec<String> = Vec::new();
    let mut corresponding_email = String::new();

    for author in art.author_list.map(|list| list.authors).unwrap_or_default() {
        let full_name = full_name(author.fore_name.as_deref(), author.last_name.as_deref());

        for info in author.affiliation_info {
            let text = info.affiliation.unwrap_or_default();

            if is_non_academic(&text) {
                non_academic_authors.push(full_name.clone());
                if !company_affiliations.iter().any(|existing| existing == &text) {
                    company_affiliations.push(text.clone());
                }
            }

            // First email in document order wins, academic affiliations included.
            if corresponding_email.is_empty() {
                if let Some(found) = EMAIL_RE.find(&text) {
                    corresponding_email = found.as_str().to_string();
                }
            }
        }
    }

    Ok(PaperRow {
        pubmed_id,
        title,
        publication_date,
        non_academic_authors,
        company_affiliations,
        corresponding_email,
    })
}

/// Join the present date sub-fields with `-`, never padding absent ones.
fn join_date_parts(date: &PubDate) -> String {
    [date.year.as_deref(), date.month.as_deref(), date.day.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// `"{forename} {lastname}"`, omitting absent parts.
fn full_name(fore_name: Option<&str>, last_name: Option<&str>) -> String {
    [fore_name, last_name].into_iter().flatten().collect::<Vec<_>>().join(" ")
}
