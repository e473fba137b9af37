//! Upstream fetch collaborator: pulls the raw status document from Momo.
use std::time::Duration;

use bytes::Bytes;
use url::Url;

use crate::error::FetchError;

#[cfg(test)]
mod tests;

/// HTTP(S) client configured once at construction with the scrape target,
/// the TLS-verification toggle, and a request timeout.
#[derive(Debug, Clone)]
pub struct StatsFetcher {
    client: reqwest::Client,
    uri: String,
}

impl StatsFetcher {
    /// Builds a fetcher for the given scrape URI.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUri` for unparseable URIs,
    /// `FetchError::UnsupportedScheme` for anything that is not http or
    /// https, and `FetchError::BuildClientFailed` when the HTTP client
    /// cannot be constructed.
    pub fn new(uri: &str, ssl_verify: bool, timeout: Duration) -> Result<Self, FetchError> {
        let parsed = Url::parse(uri).map_err(|err| FetchError::InvalidUri {
            uri: uri.to_owned(),
            source: err,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(FetchError::UnsupportedScheme {
                    scheme: scheme.to_owned(),
                });
            }
        }

        let mut builder = reqwest::Client::builder().timeout(timeout);
        if !ssl_verify {
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::BuildClientFailed { source: err })?;

        Ok(Self {
            client,
            uri: String::from(parsed),
        })
    }

    /// Performs one fetch and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::RequestFailed` on connection or timeout errors,
    /// `FetchError::UnexpectedStatus` for non-2xx responses, and
    /// `FetchError::ReadBodyFailed` when the body cannot be read.
    pub async fn fetch(&self) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(&self.uri)
            .send()
            .await
            .map_err(|err| FetchError::RequestFailed { source: err })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|err| FetchError::ReadBodyFailed { source: err })
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }
}
