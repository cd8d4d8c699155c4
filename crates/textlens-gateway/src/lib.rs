//! textlens gateway library entry.
//!
//! Wires configuration, the document store, the record writer and history
//! reader, and the HTTP handlers into one axum application. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod analysis;
pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
