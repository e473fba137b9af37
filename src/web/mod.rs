//! Minimal HTTP listener exposing the telemetry path and a landing page.
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::error::{AppError, AppResult, ServeError};
use crate::exporter::{Exporter, encode_text};


/// Serves metrics forever. Each GET of the telemetry path runs exactly one
/// scrape cycle.
///
/// # Errors
///
/// Returns an error when the listener cannot be bound; per-connection
/// failures are logged and do not stop the accept loop.
pub async fn serve(
    exporter: Arc<Exporter>,
    listen_address: SocketAddr,
    telemetry_path: String,
) -> AppResult<()> {
    let listener = TcpListener::bind(listen_address).await.map_err(|err| {
        AppError::serve(ServeError::BindFailed {
            address: listen_address,
            source: err,
        })
    })?;
    tracing::info!("Listening on address {}", listen_address);

    let telemetry_path: Arc<str> = telemetry_path.into();
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(err) => {
                tracing::warn!("Failed to accept connection: {}", err);
                continue;
            }
        };
        let exporter = Arc::clone(&exporter);
        let telemetry_path = Arc::clone(&telemetry_path);
        tokio::spawn(async move {
            if let Err(err) = handle_connection(stream, &exporter, &telemetry_path).await {
                tracing::debug!("Connection from {} failed: {}", peer, err);
            }
        });
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    exporter: &Exporter,
    telemetry_path: &str,
) -> AppResult<()> {
    let path = match read_request_path(&mut stream).await? {
        Some(path) => path,
        None => return Ok(()),
    };

    let (status, content_type, body) = if path == telemetry_path {
        match render_metrics(exporter).await {
            Ok(body) => ("200 OK", prometheus::TEXT_FORMAT, body),
            Err(err) => {
                tracing::error!("Failed to encode metrics: {}", err);
                (
                    "500 Internal Server Error",
                    "text/plain; charset=utf-8",
                    "encoding metrics failed\n".to_owned(),
                )
            }
        }
    } else if path == "/" {
        ("200 OK", "text/html; charset=utf-8", landing_page(telemetry_path))
    } else {
        (
            "404 Not Found",
            "text/plain; charset=utf-8",
            "not found\n".to_owned(),
        )
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body,
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

async fn render_metrics(exporter: &Exporter) -> AppResult<String> {
    let families = exporter.collect().await;
    encode_text(&families)
}

/// Upper bound on the request line plus headers; anything past it is cut
/// off so a client cannot grow the buffers without bound.
const MAX_REQUEST_BYTES: u64 = 8 * 1024;

/// Reads the request line and returns its path, or `None` for requests too
/// mangled to answer.
async fn read_request_path(stream: &mut TcpStream) -> AppResult<Option<String>> {
    let mut reader = BufReader::new((&mut *stream).take(MAX_REQUEST_BYTES));
    let mut request_line = String::new();
    reader.read_line(&mut request_line).await?;
    if !request_line.ends_with('\n') {
        // The cap (or EOF) was hit before the request line finished.
        return Ok(None);
    }

    // Drain headers so well-behaved clients see the full request consumed.
    let mut header = String::new();
    loop {
        header.clear();
        let read = reader.read_line(&mut header).await?;
        if read == 0 || header == "\r\n" || header == "\n" {
            break;
        }
    }

    let mut parts = request_line.split_whitespace();
    let method = parts.next();
    let path = parts.next();
    match (method, path) {
        (Some(_), Some(path)) => Ok(Some(path.to_owned())),
        (Some(_), None) | (None, _) => Ok(None),
    }
}

fn landing_page(telemetry_path: &str) -> String {
    format!(
        "<html>\n<head><title>Momo Exporter</title></head>\n<body>\n<h1>WebRTC Native Client Momo Exporter</h1>\n<p><a href={}>Metrics</a></p>\n</body>\n</html>\n",
        telemetry_path,
    )
}
