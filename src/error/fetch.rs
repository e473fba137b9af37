use thiserror::Error;

/// Failures of the upstream fetch collaborator. None of these escape a scrape
/// cycle; they resolve to `up=0` in the scrape outcome. Only the
/// construction-time variants surface as `AppError`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid scrape URI '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported scheme: {scheme:?}")]
    UnsupportedScheme { scheme: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request failed: {source}")]
    RequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP status {status}")]
    UnexpectedStatus { status: u16 },
    #[error("Failed to read response body: {source}")]
    ReadBodyFailed {
        #[source]
        source: reqwest::Error,
    },
}
