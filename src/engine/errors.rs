use thiserror::Error;

use crate::engine::LedgerRow;
use crate::models::RecordError;
use crate::types::{MoneyError, UserId};

#[derive(Debug, Error)]
pub enum RowError {
    #[error("Unknown record kind [{record}] for user [{user}]")]
    UnknownRecord {
        user: UserId,
        record: String
    },
    #[error("Missing [{field}] in [{record}] row for user [{user}]")]
    MissingField {
        user: UserId,
        record: String,
        field: &'static str
    },
    #[error("Invalid [{field}] in [{record}] row for user [{user}]: {source}")]
    InvalidAmount {
        user: UserId,
        record: String,
        field: &'static str,
        #[source]
        source: MoneyError
    },
    #[error("Negative [{field}] in [{record}] row for user [{user}]")]
    NegativeAmount {
        user: UserId,
        record: String,
        field: &'static str
    },
    #[error("Invalid date [{value}] in [{record}] row for user [{user}], expected YYYY-MM-DD")]
    InvalidDate {
        user: UserId,
        record: String,
        value: String
    },
    #[error("Invalid kind [{value}] in [{record}] row for user [{user}]")]
    InvalidKind {
        user: UserId,
        record: String,
        value: String
    },
    #[error("Rejected [{record}] row for user [{user}]: {source}")]
    Rejected {
        user: UserId,
        record: String,
        #[source]
        source: RecordError
    }
}

impl RowError {
    pub fn unknown_record(row: &LedgerRow) -> Self {
        Self::UnknownRecord {
            user: row.user.clone(),
            record: row.record.clone()
        }
    }

    pub fn missing_field(row: &LedgerRow, field: &'static str) -> Self {
        Self::MissingField {
            user: row.user.clone(),
            record: row.record.clone(),
            field
        }
    }

    pub fn invalid_amount(row: &LedgerRow, field: &'static str, source: MoneyError) -> Self {
        Self::InvalidAmount {
            user: row.user.clone(),
            record: row.record.clone(),
            field,
            source
        }
    }

    pub fn negative_amount(row: &LedgerRow, field: &'static str) -> Self {
        Self::NegativeAmount {
            user: row.user.clone(),
            record: row.record.clone(),
            field
        }
    }

    pub fn invalid_date(row: &LedgerRow, value: &str) -> Self {
        Self::InvalidDate {
            user: row.user.clone(),
            record: row.record.clone(),
            value: value.to_string()
        }
    }

    pub fn invalid_kind(row: &LedgerRow, value: &str) -> Self {
        Self::InvalidKind {
            user: row.user.clone(),
            record: row.record.clone(),
            value: value.to_string()
        }
    }

    pub fn rejected(row: &LedgerRow, source: RecordError) -> Self {
        Self::Rejected {
            user: row.user.clone(),
            record: row.record.clone(),
            source
        }
    }
}
