pub mod metrics;
pub mod pod_identity;
pub mod tracing;
