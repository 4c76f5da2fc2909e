//! Pure aggregation over already fetched records.
//!
//! Nothing in here performs I/O or keeps state between calls; request
//! handlers fetch a snapshot, reduce it here, and format the result.

mod aggregator;
mod errors;
mod progress;
mod ranking;
#[cfg(test)]
mod tests;
mod window;

pub use aggregator::{aggregate, CategoryTotals, MonthlyStats, UNCATEGORIZED};
pub use errors::{ProgressError, WindowError};
pub use progress::progress_percent;
pub use ranking::top_categories;
pub use window::MonthWindow;
