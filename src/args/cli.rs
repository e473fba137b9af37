use std::time::Duration;

use clap::Parser;

use super::parsers::{parse_bool_arg, parse_duration_arg};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Prometheus exporter for WebRTC Native Client Momo - scrapes Momo's JSON status endpoint and re-exposes the embedded WebRTC stats as metric series."
)]
pub struct ExporterArgs {
    /// Address to listen on for web interface and telemetry
    #[arg(long = "web.listen-address", default_value = "0.0.0.0:9801")]
    pub listen_address: String,

    /// Path under which to expose metrics
    #[arg(long = "web.telemetry-path", default_value = "/metrics")]
    pub telemetry_path: String,

    /// URI on which to scrape WebRTC Native Client Momo
    #[arg(
        long = "momo.scrape-uri",
        env = "MOMO_SCRAPE_URI",
        default_value = "http://localhost:8081/metrics"
    )]
    pub scrape_uri: String,

    /// Enable SSL certificate verification for the scrape URI
    #[arg(
        long = "momo.ssl-verify",
        default_value = "true",
        action = clap::ArgAction::Set,
        value_parser = parse_bool_arg
    )]
    pub ssl_verify: bool,

    /// Timeout for trying to get stats from WebRTC Native Client Momo (supports ms/s/m/h)
    #[arg(
        long = "momo.timeout",
        default_value = "5s",
        value_parser = parse_duration_arg
    )]
    pub timeout: Duration,

    /// Enable debug-level logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,
}
