//! Projection metrics.
//!
//! Recorded through the `metrics` facade; the embedding service installs
//! the exporter.

use metrics::{counter, describe_counter, describe_histogram, histogram};

/// Documents built counter.
pub const DOCUMENTS_BUILT: &str = "tessel_search_documents_built_total";

/// Document build failures counter.
pub const DOCUMENT_FAILURES: &str = "tessel_search_document_failures_total";

/// Flattened columns per document histogram.
pub const FLATTENED_COLUMNS: &str = "tessel_search_flattened_columns";

/// Registers all projection metric descriptions.
///
/// Call this once at application startup after initializing the metrics recorder.
pub fn register_metrics() {
    describe_counter!(DOCUMENTS_BUILT, "Total search documents built");
    describe_counter!(DOCUMENT_FAILURES, "Total search document build failures");
    describe_histogram!(FLATTENED_COLUMNS, "Flattened columns per search document");
}

/// Records a successfully built document.
#[allow(clippy::cast_precision_loss)]
pub fn record_document_built(entity_type: &str, flattened_columns: usize) {
    counter!(DOCUMENTS_BUILT, "entity_type" => entity_type.to_string()).increment(1);
    histogram!(FLATTENED_COLUMNS, "entity_type" => entity_type.to_string())
        .record(flattened_columns as f64);
}

/// Records a failed document build.
pub fn record_document_failure(entity_type: &str, reason: &'static str) {
    counter!(
        DOCUMENT_FAILURES,
        "entity_type" => entity_type.to_string(),
        "reason" => reason
    )
    .increment(1);
}
