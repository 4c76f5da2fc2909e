mod account;
mod budget;
mod errors;
mod profile;
mod savings_goal;
mod transaction;

use serde::{Deserialize, Serialize};

use crate::types::Money;

pub use account::{Account, AccountType};
pub use budget::{Budget, BudgetDraft, BudgetUpdate};
pub use errors::RecordError;
pub use profile::{ProfileUpdate, UserProfile};
pub use savings_goal::{GoalDraft, GoalUpdate, SavingsGoal};
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense
}

fn require_positive(field: &'static str, amount: Money) -> Result<(), RecordError> {
    if amount.is_negative() || amount.is_zero() {
        return Err(RecordError::invalid_amount(field, amount))
    }

    Ok(())
}

fn require_non_negative(field: &'static str, amount: Money) -> Result<(), RecordError> {
    if amount.is_negative() {
        return Err(RecordError::invalid_amount(field, amount))
    }

    Ok(())
}
