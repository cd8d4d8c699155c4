//! Lightweight in-process request metrics, rendered by `/metrics`.

pub mod metrics;

pub use metrics::GatewayMetrics;
