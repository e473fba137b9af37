use serde_json::Value;

use super::registry::{FieldSpec, MetricKind, ProjectionRule, ReportProjection, SchemaRegistry, ValueKind};
use super::value::{Extract, Report};

/// Label schema of the bespoke codec projection. Frozen; part of the metric
/// identity.
pub const CODEC_LABEL_NAMES: &[&str] = &["id", "payload_type", "mime_type", "clock_rate"];

const CODEC_HELP: &str = "WebRTC codec in use, value is the RTP payload type.";

/// One emitted metric data point. `label_values` aligns positionally with
/// `label_names`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub name: String,
    pub kind: MetricKind,
    pub help: &'static str,
    pub label_names: &'static [&'static str],
    pub label_values: Vec<String>,
    pub value: f64,
}

/// Result of one catalog build: the ordered samples plus the number of
/// reports that lacked a usable discriminator.
#[derive(Debug, Default)]
pub struct Catalog {
    pub samples: Vec<MetricSample>,
    pub parse_failures: u64,
}

/// The core translation loop: dispatches each decoded report against the
/// registry and collects the emitted samples. One malformed report degrades
/// to zero samples for that report, never to a scrape-wide failure.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    registry: SchemaRegistry,
}

impl CatalogBuilder {
    #[must_use]
    pub const fn new(registry: SchemaRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Builds the metric catalog for one decoded stats array, preserving
    /// input order.
    #[must_use]
    pub fn build(&self, stats: &[Value]) -> Catalog {
        let mut catalog = Catalog::default();
        for raw in stats {
            self.dispatch(raw, &mut catalog);
        }
        catalog
    }

    fn dispatch(&self, raw: &Value, catalog: &mut Catalog) {
        let report = Report::new(raw);
        let report_type = match report.str_field("type") {
            Extract::Value(report_type) => report_type,
            Extract::Absent | Extract::Mismatch => {
                tracing::debug!("Report without a usable 'type' discriminator.");
                catalog.parse_failures = catalog.parse_failures.saturating_add(1);
                return;
            }
        };

        // Unknown report types are expected from newer libwebrtc builds.
        let Some(projection) = self.registry.lookup(report_type) else {
            tracing::trace!(report_type, "No projection registered, skipping report.");
            return;
        };

        match projection.rule {
            ProjectionRule::Fields(fields) => {
                project_fields(&report, projection, fields, catalog);
            }
            ProjectionRule::CodecInfo => project_codec(&report, catalog),
        }
    }
}

fn project_fields(
    report: &Report<'_>,
    projection: &ReportProjection,
    fields: &'static [FieldSpec],
    catalog: &mut Catalog,
) {
    let label_values: Vec<String> = projection
        .label_keys
        .iter()
        .map(|key| report.label_field(key))
        .collect();

    for spec in fields {
        let Some(value) = extract_numeric(report, spec) else {
            tracing::trace!(
                report_type = projection.report_type,
                field = spec.source_key,
                "Field absent or not numeric, no sample emitted."
            );
            continue;
        };
        catalog.samples.push(MetricSample {
            name: spec.metric_name.to_owned(),
            kind: spec.kind,
            help: spec.help,
            label_names: projection.label_names,
            label_values: label_values.clone(),
            value,
        });
    }
}

fn extract_numeric(report: &Report<'_>, spec: &FieldSpec) -> Option<f64> {
    match report.f64_field(spec.source_key) {
        Extract::Value(value) => Some(value),
        Extract::Absent => None,
        Extract::Mismatch => match spec.value {
            // Integer-marked fields get a second chance through the i64
            // path before the sample is dropped.
            ValueKind::Int => report.i64_field(spec.source_key).ok().map(|int| int as f64),
            ValueKind::Float => None,
        },
    }
}

/// Codec reports become one gauge named after the codec id, mirroring the
/// reference deployment: the payload type is the value and reappears as a
/// label alongside mime type and clock rate.
fn project_codec(report: &Report<'_>, catalog: &mut Catalog) {
    let id = report.str_field("id").ok().unwrap_or_default();
    let payload_type = report.i64_field("payloadType").ok().unwrap_or_default();
    let mime_type = report.str_field("mimeType").ok().unwrap_or_default();
    let clock_rate = report.i64_field("clockRate").ok().unwrap_or_default();
    let value = report.f64_field("payloadType").ok().unwrap_or_default();

    catalog.samples.push(MetricSample {
        name: format!("codec_{}", id),
        kind: MetricKind::Gauge,
        help: CODEC_HELP,
        label_names: CODEC_LABEL_NAMES,
        label_values: vec![
            id.to_owned(),
            payload_type.to_string(),
            mime_type.to_owned(),
            clock_rate.to_string(),
        ],
        value,
    });
}
