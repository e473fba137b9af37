use std::future::Future;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::StatsFetcher;
use crate::error::FetchError;

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

/// Serves one canned HTTP response and returns the URI to request.
async fn spawn_canned_server(response: &'static str) -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("Failed to bind listener: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("Failed to read local addr: {}", err))?;

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0_u8; 1024];
            let _ = stream.read(&mut request).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    Ok(format!("http://{}/metrics", addr))
}

#[test]
fn rejects_non_http_schemes() -> Result<(), String> {
    match StatsFetcher::new("ftp://localhost/metrics", true, Duration::from_secs(1)) {
        Err(FetchError::UnsupportedScheme { scheme }) if scheme == "ftp" => Ok(()),
        Err(err) => Err(format!("Expected scheme error, got: {}", err)),
        Ok(_) => Err("Expected ftp scheme to be rejected".to_owned()),
    }
}

#[test]
fn rejects_unparseable_uris() -> Result<(), String> {
    match StatsFetcher::new("not a uri", true, Duration::from_secs(1)) {
        Err(FetchError::InvalidUri { uri, .. }) if uri == "not a uri" => Ok(()),
        Err(err) => Err(format!("Expected URI error, got: {}", err)),
        Ok(_) => Err("Expected malformed URI to be rejected".to_owned()),
    }
}

#[test]
fn fetch_returns_body_on_success() -> Result<(), String> {
    run_async_test(async {
        let uri = spawn_canned_server(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 13\r\nConnection: close\r\n\r\n{\"stats\":\"x\"}",
        )
        .await?;

        let fetcher = StatsFetcher::new(&uri, true, Duration::from_secs(5))
            .map_err(|err| format!("Failed to build fetcher: {}", err))?;
        let body = fetcher
            .fetch()
            .await
            .map_err(|err| format!("Fetch failed: {}", err))?;

        if body.as_ref() != b"{\"stats\":\"x\"}" {
            return Err(format!("Unexpected body: {:?}", body));
        }
        Ok(())
    })
}

#[test]
fn non_success_status_is_an_error() -> Result<(), String> {
    run_async_test(async {
        let uri = spawn_canned_server(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await?;

        let fetcher = StatsFetcher::new(&uri, true, Duration::from_secs(5))
            .map_err(|err| format!("Failed to build fetcher: {}", err))?;
        match fetcher.fetch().await {
            Err(FetchError::UnexpectedStatus { status: 404 }) => Ok(()),
            Err(err) => Err(format!("Expected status error, got: {}", err)),
            Ok(_) => Err("Expected 404 to be an error".to_owned()),
        }
    })
}

#[test]
fn connection_refused_is_a_request_error() -> Result<(), String> {
    run_async_test(async {
        // Bind and immediately drop to find a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|err| format!("Failed to bind listener: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("Failed to read local addr: {}", err))?;
        drop(listener);

        let uri = format!("http://{}/metrics", addr);
        let fetcher = StatsFetcher::new(&uri, true, Duration::from_secs(1))
            .map_err(|err| format!("Failed to build fetcher: {}", err))?;
        match fetcher.fetch().await {
            Err(FetchError::RequestFailed { .. }) => Ok(()),
            Err(err) => Err(format!("Expected request error, got: {}", err)),
            Ok(_) => Err("Expected refused connection to be an error".to_owned()),
        }
    })
}
