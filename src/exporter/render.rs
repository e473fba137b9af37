use std::collections::HashMap;

use prometheus::core::Collector;
use prometheus::proto::MetricFamily;
use prometheus::{Counter, CounterVec, Gauge, GaugeVec, Opts, TextEncoder};

use crate::error::AppResult;
use crate::stats::{MetricKind, MetricSample, ScrapeOutcome, VersionInfo};

use super::{NAMESPACE, PARSE_FAILURES_HELP, SCRAPES_HELP, UP_HELP, VERSION_INFO_HELP};

/// Renders one scrape outcome into Prometheus metric families: the up
/// gauge, the two exporter counters, the version-info gauge when the
/// envelope decoded, and one family per distinct sample name.
pub(super) fn render_outcome(outcome: &ScrapeOutcome) -> Vec<MetricFamily> {
    let mut families = Vec::new();

    push_or_log(
        &mut families,
        up_family(outcome.up),
        "up",
    );
    push_or_log(
        &mut families,
        counter_family("exporter_scrapes_total", SCRAPES_HELP, outcome.total_scrapes),
        "exporter_scrapes_total",
    );
    push_or_log(
        &mut families,
        counter_family(
            "exporter_json_parse_failures_total",
            PARSE_FAILURES_HELP,
            outcome.parse_failures,
        ),
        "exporter_json_parse_failures_total",
    );
    if let Some(version) = &outcome.version {
        push_or_log(&mut families, version_family(version), "version_info");
    }

    append_sample_families(&mut families, &outcome.samples);
    families
}

/// Encodes metric families in the Prometheus text exposition format.
///
/// # Errors
///
/// Returns an error when the encoder rejects a family.
pub fn encode_text(families: &[MetricFamily]) -> AppResult<String> {
    let mut buffer = String::new();
    TextEncoder::new().encode_utf8(families, &mut buffer)?;
    Ok(buffer)
}

fn push_or_log(
    families: &mut Vec<MetricFamily>,
    result: prometheus::Result<Vec<MetricFamily>>,
    name: &str,
) {
    match result {
        Ok(mut rendered) => families.append(&mut rendered),
        Err(err) => tracing::error!("Failed to render metric family '{}': {}", name, err),
    }
}

fn up_family(up: bool) -> prometheus::Result<Vec<MetricFamily>> {
    let gauge = Gauge::with_opts(Opts::new("up", UP_HELP).namespace(NAMESPACE))?;
    if up {
        gauge.set(1.0);
    }
    Ok(gauge.collect())
}

fn counter_family(
    name: &str,
    help: &str,
    value: u64,
) -> prometheus::Result<Vec<MetricFamily>> {
    let counter = Counter::with_opts(Opts::new(name, help).namespace(NAMESPACE))?;
    counter.inc_by(value as f64);
    Ok(counter.collect())
}

fn version_family(version: &VersionInfo) -> prometheus::Result<Vec<MetricFamily>> {
    let vec = GaugeVec::new(
        Opts::new("version_info", VERSION_INFO_HELP).namespace(NAMESPACE),
        &["version", "environment", "libwebrtc"],
    )?;
    vec.with_label_values(&[
        version.version.as_str(),
        version.environment.as_str(),
        version.libwebrtc.as_str(),
    ])
    .set(1.0);
    Ok(vec.collect())
}

/// Groups samples by metric name in first-appearance order and materializes
/// each group as one family. Counter samples with identical label values
/// accumulate; gauge samples overwrite. Counter samples with negative values
/// are dropped here: `inc_by` rejects them, and a broken upstream value must
/// not take down the whole render.
fn append_sample_families(families: &mut Vec<MetricFamily>, samples: &[MetricSample]) {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&MetricSample>> = HashMap::new();
    for sample in samples {
        if sample.kind == MetricKind::Counter && sample.value < 0.0 {
            tracing::debug!(
                metric = sample.name.as_str(),
                value = sample.value,
                "Negative counter value, sample skipped."
            );
            continue;
        }
        let group = groups.entry(sample.name.as_str()).or_default();
        if group.is_empty() {
            order.push(sample.name.as_str());
        }
        group.push(sample);
    }

    for name in order {
        let Some(group) = groups.get(name) else {
            continue;
        };
        let Some(first) = group.first() else {
            continue;
        };
        push_or_log(families, sample_family(name, first, group), name);
    }
}

fn sample_family(
    name: &str,
    first: &MetricSample,
    group: &[&MetricSample],
) -> prometheus::Result<Vec<MetricFamily>> {
    let opts = Opts::new(name, first.help).namespace(NAMESPACE);
    match first.kind {
        MetricKind::Gauge => {
            let vec = GaugeVec::new(opts, first.label_names)?;
            for sample in group {
                let values: Vec<&str> = sample.label_values.iter().map(String::as_str).collect();
                vec.with_label_values(&values).set(sample.value);
            }
            Ok(vec.collect())
        }
        MetricKind::Counter => {
            let vec = CounterVec::new(opts, first.label_names)?;
            for sample in group {
                let values: Vec<&str> = sample.label_values.iter().map(String::as_str).collect();
                vec.with_label_values(&values).inc_by(sample.value);
            }
            Ok(vec.collect())
        }
    }
}
