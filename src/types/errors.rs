use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoneyError {
    #[error("Money error: {0}")]
    InvalidFormat(String),
    #[error("Money error: {0}")]
    Decimal(#[from] rust_decimal::Error)
}
