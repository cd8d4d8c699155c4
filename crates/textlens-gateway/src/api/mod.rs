//! HTTP handlers for the two public endpoints.
//!
//! - `GET|POST /TextAnalyzer`     : compute, store, and return metrics
//! - `GET /GetAnalysisHistory`    : most recent stored analyses
//!
//! Every failure becomes a JSON `{"error": "..."}` body via [`ApiError`].

pub mod analyze;
pub mod error;
pub mod history;

pub use error::ApiError;
