use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;
use crate::types::Money;

/// A single booked income or expense.
///
/// Transactions are read-only once fetched; aggregation never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Money,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: Option<String>
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// The description when one is present, otherwise the category.
    pub fn label(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => &self.category
        }
    }
}
