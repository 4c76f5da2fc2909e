mod errors;
mod ingest_engine;
mod row;

pub use errors::RowError;
pub use ingest_engine::{IngestEngine, IngestSummary};
pub use row::{LedgerEntry, LedgerRow};
