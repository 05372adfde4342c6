//! Dataset Module - Log Records & CSV Ingestion
//!
//! Raw records come out of the loader with optional status and latency;
//! the filter stage upgrades them to [`CleanRecord`], where both are
//! guaranteed present.

pub mod loader;
pub mod record;


pub use loader::load_csv;
pub use record::{CleanRecord, LogRecord};
