use thiserror::Error;

use super::{FetchError, RegistryError, ServeError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("HTTP client error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
    #[error("Join error: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("Metrics encoding error: {source}")]
    Prometheus {
        #[from]
        source: prometheus::Error,
    },
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("Serve error: {0}")]
    Serve(#[from] ServeError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn serve<E>(error: E) -> Self
    where
        E: Into<ServeError>,
    {
        error.into().into()
    }
}
