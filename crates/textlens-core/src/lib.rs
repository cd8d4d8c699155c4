//! textlens core: text metrics, record model, and the shared error surface.
//!
//! This crate holds the pure parts of the service: the metrics computation,
//! the persisted record shapes (with their wire names), and history limit
//! parsing. It carries no transport, runtime, or storage dependencies so the
//! gateway and any tooling can share one definition of every field.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `TextLensError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod limit;
pub mod metrics;
pub mod record;

/// Shared result type.
pub use error::{Result, TextLensError};
pub use limit::HistoryLimit;
pub use metrics::TextMetrics;
pub use record::{AnalysisRecord, AnalysisSummary, RecordMetadata};
