use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Invalid listen address '{address}': {source}")]
    InvalidListenAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("Failed to bind {address}: {source}")]
    BindFailed {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Telemetry path must start with '/'.")]
    InvalidTelemetryPath,
}
