use serde::Deserialize;

use crate::fetch::StatsFetcher;

use super::catalog::{CatalogBuilder, MetricSample};
use super::registry::SchemaRegistry;

/// Top-level status document served by Momo. The `stats` field is itself a
/// JSON-encoded string (double-encoded by the upstream producer); this wire
/// contract is fixed and external, do not flatten it.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub version: String,
    pub environment: String,
    pub libwebrtc: String,
    pub stats: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub environment: String,
    pub libwebrtc: String,
}

/// Everything one scrape cycle produced. `total_scrapes` and
/// `parse_failures` are snapshots of the process-lifetime counters.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub up: bool,
    pub version: Option<VersionInfo>,
    pub samples: Vec<MetricSample>,
    pub total_scrapes: u64,
    pub parse_failures: u64,
}

/// Orchestrates one scrape cycle: fetch, envelope decode, embedded-stats
/// decode, catalog build. Failures anywhere resolve to `up=false` in the
/// outcome; nothing propagates as an error past this boundary.
#[derive(Debug)]
pub struct Scraper {
    fetcher: StatsFetcher,
    builder: CatalogBuilder,
    total_scrapes: u64,
    parse_failures: u64,
}

impl Scraper {
    #[must_use]
    pub const fn new(fetcher: StatsFetcher, registry: SchemaRegistry) -> Self {
        Self {
            fetcher,
            builder: CatalogBuilder::new(registry),
            total_scrapes: 0,
            parse_failures: 0,
        }
    }

    pub async fn scrape(&mut self) -> ScrapeOutcome {
        self.total_scrapes = self.total_scrapes.saturating_add(1);

        let body = match self.fetcher.fetch().await {
            Ok(body) => body,
            Err(err) => {
                tracing::error!("Can't scrape WebRTC Native Client Momo: {}", err);
                return self.outcome(false, None, Vec::new());
            }
        };

        let envelope: Envelope = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::error!(
                    "Failed to parse response from WebRTC Native Client Momo: {}",
                    err
                );
                self.parse_failures = self.parse_failures.saturating_add(1);
                return self.outcome(false, None, Vec::new());
            }
        };
        let version = VersionInfo {
            version: envelope.version,
            environment: envelope.environment,
            libwebrtc: envelope.libwebrtc,
        };

        tracing::debug!("Raw stats payload: {}", envelope.stats);

        let stats: Vec<serde_json::Value> = match serde_json::from_str(&envelope.stats) {
            Ok(stats) => stats,
            Err(err) => {
                tracing::error!("Failed to parse WebRTC stats: {}", err);
                self.parse_failures = self.parse_failures.saturating_add(1);
                // Version info survives a stats decode failure.
                return self.outcome(false, Some(version), Vec::new());
            }
        };

        let catalog = self.builder.build(&stats);
        self.parse_failures = self.parse_failures.saturating_add(catalog.parse_failures);
        self.outcome(true, Some(version), catalog.samples)
    }

    #[must_use]
    pub const fn total_scrapes(&self) -> u64 {
        self.total_scrapes
    }

    #[must_use]
    pub const fn parse_failures(&self) -> u64 {
        self.parse_failures
    }

    const fn outcome(
        &self,
        up: bool,
        version: Option<VersionInfo>,
        samples: Vec<MetricSample>,
    ) -> ScrapeOutcome {
        ScrapeOutcome {
            up,
            version,
            samples,
            total_scrapes: self.total_scrapes,
            parse_failures: self.parse_failures,
        }
    }
}
