use std::collections::HashMap;

use crate::error::RegistryError;

use super::schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

/// Upstream representation of a numeric field. WebRTC stat fields mix
/// integer and float encodings; the dispatcher uses this to pick the
/// fallback extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Float,
}

/// One field-to-metric projection, fixed at registration time.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub source_key: &'static str,
    pub metric_name: &'static str,
    pub kind: MetricKind,
    pub value: ValueKind,
    pub help: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum ProjectionRule {
    /// Table-driven projection: emit one sample per matched field spec.
    Fields(&'static [FieldSpec]),
    /// Bespoke codec projection: one gauge named after the codec id with
    /// the payload type as its value.
    CodecInfo,
}

/// Immutable projection for one report type.
///
/// `label_keys` name the report fields label values are pulled from;
/// `label_names` are the exported label names, aligned positionally with
/// `label_keys`. The `label_names` order defines positional label-value
/// binding for every sample the projection emits and is part of the
/// exported metric's identity.
#[derive(Debug, Clone, Copy)]
pub struct ReportProjection {
    pub report_type: &'static str,
    pub label_keys: &'static [&'static str],
    pub label_names: &'static [&'static str],
    pub rule: ProjectionRule,
}

impl ReportProjection {
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        match self.rule {
            ProjectionRule::Fields(fields) => fields,
            ProjectionRule::CodecInfo => &[],
        }
    }
}

/// Static lookup table from report-type discriminator to projection.
///
/// Constructed once at process start and injected into the engine; report
/// types present in input but absent here are silently skipped, and entries
/// whose fields never appear in input are harmless.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    by_type: HashMap<&'static str, ReportProjection>,
}

impl SchemaRegistry {
    /// Builds a registry from a projection list, rejecting duplicate report
    /// types and duplicate metric names in the exported namespace.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` when two projections share a report type or
    /// two field specs share a metric name.
    pub fn new(projections: &[ReportProjection]) -> Result<Self, RegistryError> {
        let mut by_type = HashMap::with_capacity(projections.len());
        let mut metric_owners: HashMap<&'static str, &'static str> = HashMap::new();

        for projection in projections {
            if by_type.contains_key(projection.report_type) {
                return Err(RegistryError::DuplicateReportType {
                    report_type: projection.report_type.to_owned(),
                });
            }
            if projection.label_keys.len() != projection.label_names.len() {
                return Err(RegistryError::LabelSchemaMismatch {
                    report_type: projection.report_type.to_owned(),
                    keys: projection.label_keys.len(),
                    names: projection.label_names.len(),
                });
            }
            for spec in projection.fields() {
                if let Some(first) = metric_owners.insert(spec.metric_name, projection.report_type)
                {
                    return Err(RegistryError::DuplicateMetricName {
                        metric_name: spec.metric_name.to_owned(),
                        first: first.to_owned(),
                        second: projection.report_type.to_owned(),
                    });
                }
            }
            by_type.insert(projection.report_type, *projection);
        }

        Ok(Self { by_type })
    }

    /// The default registry covering the W3C webrtc-stats report types Momo
    /// emits.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if the built-in tables violate the
    /// uniqueness invariants; reachable only when the tables are edited.
    pub fn webrtc() -> Result<Self, RegistryError> {
        Self::new(schema::PROJECTIONS)
    }

    #[must_use]
    pub fn lookup(&self, report_type: &str) -> Option<&ReportProjection> {
        self.by_type.get(report_type)
    }

    pub fn projections(&self) -> impl Iterator<Item = &ReportProjection> {
        self.by_type.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
