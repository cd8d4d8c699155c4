//! Record write and history read flows on top of the document store.

pub mod history;
pub mod writer;

pub use history::{AnalysisHistoryReader, History};
pub use writer::AnalysisRecordWriter;
