//! Error types for the PubMed pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Client errors are fatal and abort the run; a
//! [`RecordParseError`] is recovered locally by skipping the one record.

/// Errors from the E-utilities HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Network/HTTP-level failure on either endpoint (connection, DNS, TLS,
    /// timeout, non-2xx status).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not have the expected top-level shape.
    #[error("unexpected {endpoint} response: {message}")]
    Protocol {
        /// Endpoint that produced the response (`esearch` or `efetch`).
        endpoint: &'static str,
        /// Parser diagnostic.
        message: String,
    },
}

impl ClientError {
    /// Create a protocol error for the given endpoint.
    #[must_use]
    pub fn protocol(endpoint: &'static str, message: impl Into<String>) -> Self {
        Self::Protocol { endpoint, message: message.into() }
    }
}

/// A single article record could not be interpreted.
///
/// The detail client skips the record and continues with the rest of the
/// batch; this error never aborts a run.
#[derive(thiserror::Error, Debug)]
pub enum RecordParseError {
    /// Record carries no `MedlineCitation` element.
    #[error("record has no MedlineCitation")]
    MissingCitation,

    /// Record carries no usable PMID.
    #[error("record has no PMID")]
    MissingPmid,

    /// Record fragment did not deserialize as an article.
    #[error("malformed record: {0}")]
    Malformed(String),
}

/// Errors from the CSV sink.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// File creation or flush failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for sink operations.
pub type OutputResult<T> = Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_names_endpoint() {
        let err = ClientError::protocol("esearch", "missing field `idlist`");
        let msg = err.to_string();
        assert!(msg.contains("esearch"));
        assert!(msg.contains("idlist"));
    }

    #[test]
    fn test_record_parse_error_messages() {
        assert_eq!(RecordParseError::MissingPmid.to_string(), "record has no PMID");
        assert_eq!(
            RecordParseError::MissingCitation.to_string(),
            "record has no MedlineCitation"
        );
    }
}
