mod caller;
mod record_service;
#[cfg(test)]
mod tests;

pub use caller::Caller;
pub use record_service::{RecordService, Registration};
