//! Collector facade: adapts the stats-translation engine to the pull-based
//! Prometheus protocol.
mod render;


use std::collections::HashMap;
use std::time::Duration;

use prometheus::core::Desc;
use prometheus::proto::MetricFamily;
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::fetch::StatsFetcher;
use crate::stats::{SchemaRegistry, Scraper};

pub use render::encode_text;

/// Metric namespace prepended to every exported series.
pub const NAMESPACE: &str = "momo";

const UP_HELP: &str = "Was the last scrape of WebRTC Native Client Momo successful.";
const SCRAPES_HELP: &str = "Current total momo scrapes.";
const PARSE_FAILURES_HELP: &str = "Number of failures while parsing JSON.";
const VERSION_INFO_HELP: &str = "WebRTC Native Client Momo version info.";

/// Collects Momo stats from the configured URI and exposes them as
/// Prometheus metric families.
///
/// Concurrent collects serialize on one lock around the whole
/// scrape-and-build sequence; the scrape counters are the only state shared
/// across cycles.
#[derive(Debug)]
pub struct Exporter {
    scraper: Mutex<Scraper>,
    descs: Vec<Desc>,
}

impl Exporter {
    /// Builds an exporter scraping the given URI.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid or non-HTTP(S) scrape URI, a failed
    /// HTTP client build, or invalid built-in registry tables.
    pub fn new(uri: &str, ssl_verify: bool, timeout: Duration) -> AppResult<Self> {
        let fetcher = StatsFetcher::new(uri, ssl_verify, timeout)?;
        let registry = SchemaRegistry::webrtc()?;
        let descs = build_descs()?;
        Ok(Self {
            scraper: Mutex::new(Scraper::new(fetcher, registry)),
            descs,
        })
    }

    /// Descriptors of the always-present series: the up gauge, the two
    /// exporter counters, and the version-info gauge.
    #[must_use]
    pub fn describe(&self) -> &[Desc] {
        &self.descs
    }

    /// Performs one scrape cycle and renders the outcome.
    pub async fn collect(&self) -> Vec<MetricFamily> {
        let mut scraper = self.scraper.lock().await;
        let outcome = scraper.scrape().await;
        drop(scraper);
        render::render_outcome(&outcome)
    }
}

fn build_descs() -> prometheus::Result<Vec<Desc>> {
    Ok(vec![
        Desc::new(
            format!("{}_up", NAMESPACE),
            UP_HELP.to_owned(),
            Vec::new(),
            HashMap::new(),
        )?,
        Desc::new(
            format!("{}_exporter_scrapes_total", NAMESPACE),
            SCRAPES_HELP.to_owned(),
            Vec::new(),
            HashMap::new(),
        )?,
        Desc::new(
            format!("{}_exporter_json_parse_failures_total", NAMESPACE),
            PARSE_FAILURES_HELP.to_owned(),
            Vec::new(),
            HashMap::new(),
        )?,
        Desc::new(
            format!("{}_version_info", NAMESPACE),
            VERSION_INFO_HELP.to_owned(),
            vec![
                "version".to_owned(),
                "environment".to_owned(),
                "libwebrtc".to_owned(),
            ],
            HashMap::new(),
        )?,
    ])
}
