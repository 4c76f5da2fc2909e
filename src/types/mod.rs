mod errors;
mod money;

pub use errors::MoneyError;
pub use money::Money;

/// Identifier handed out by the authentication provider.
pub type UserId = String;
pub type RecordId = uuid::Uuid;
