//! Secrets backend metrics.

use metrics::{counter, describe_counter};

/// Backend instances created counter.
pub const MANAGERS_CREATED: &str = "tessel_secrets_managers_created_total";

/// Registers all secrets metric descriptions.
pub fn register_metrics() {
    describe_counter!(MANAGERS_CREATED, "Total secrets backend instances created");
}

/// Records creation of a backend instance.
pub fn record_manager_created(provider: &'static str) {
    counter!(MANAGERS_CREATED, "provider" => provider).increment(1);
}
