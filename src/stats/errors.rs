use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProgressError {
    #[error("Progress error: target must be positive, got [{target}]")]
    NonPositiveTarget {
        target: Decimal
    },
    #[error("Progress error: overflow computing [{amount}] of [{target}]")]
    Overflow {
        amount: Decimal,
        target: Decimal
    }
}

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("Invalid month [{0}], expected YYYY-MM")]
    InvalidMonth(String)
}
