//! The stats-translation engine: decodes Momo's polymorphic WebRTC stats
//! array and projects it into a flat metric catalog without ever failing a
//! whole scrape over one malformed report.
mod catalog;
mod registry;
mod schema;
mod scrape;
mod value;


pub use catalog::{CODEC_LABEL_NAMES, Catalog, CatalogBuilder, MetricSample};
pub use registry::{
    FieldSpec, MetricKind, ProjectionRule, ReportProjection, SchemaRegistry, ValueKind,
};
pub use scrape::{Envelope, ScrapeOutcome, Scraper, VersionInfo};
pub use value::{Extract, Report};
