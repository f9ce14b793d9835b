//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and provides the /metrics endpoint handler.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub const CLIENTS_CREATED: &str = "clients_created_total";
pub const CLIENTS_DELETED: &str = "clients_deleted_total";

/// Install the Prometheus recorder.
///
/// Only the first call installs anything; later calls (several test apps in
/// one process) are no-ops.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| {
        PrometheusBuilder::new()
            .install_recorder()
            .unwrap_or_else(|e| {
                tracing::warn!("Prometheus recorder unavailable, metrics will be local: {}", e);
                PrometheusBuilder::new().build_recorder().handle()
            })
    });
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_metrics();
        init_metrics();
        assert!(METRICS_HANDLE.get().is_some());
    }
}
