use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

use crate::args::ExporterArgs;
use crate::error::{AppError, AppResult, ServeError};
use crate::exporter::Exporter;

pub(crate) fn run() -> AppResult<()> {
    let args = ExporterArgs::parse();
    crate::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

async fn run_async(args: ExporterArgs) -> AppResult<()> {
    tracing::info!(
        "Starting momo_exporter {}",
        env!("CARGO_PKG_VERSION")
    );

    if !args.telemetry_path.starts_with('/') {
        return Err(AppError::serve(ServeError::InvalidTelemetryPath));
    }

    let listen_address: SocketAddr = args.listen_address.parse().map_err(|err| {
        AppError::serve(ServeError::InvalidListenAddress {
            address: args.listen_address.clone(),
            source: err,
        })
    })?;

    let exporter = Exporter::new(&args.scrape_uri, args.ssl_verify, args.timeout)?;
    tracing::info!(
        "Scraping WebRTC Native Client Momo at {}",
        args.scrape_uri
    );

    crate::web::serve(Arc::new(exporter), listen_address, args.telemetry_path).await
}
