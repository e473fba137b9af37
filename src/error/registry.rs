use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate metric name '{metric_name}' between report types '{first}' and '{second}'.")]
    DuplicateMetricName {
        metric_name: String,
        first: String,
        second: String,
    },
    #[error("Duplicate projection for report type '{report_type}'.")]
    DuplicateReportType { report_type: String },
    #[error(
        "Label schema for report type '{report_type}' has {keys} source keys but {names} label names."
    )]
    LabelSchemaMismatch {
        report_type: String,
        keys: usize,
        names: usize,
    },
}
