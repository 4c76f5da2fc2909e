use thiserror::Error;

use crate::types::{Money, RecordId, UserId};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Caller [{caller}] is not authorized to {action} records of user [{user_id}]")]
    Forbidden {
        caller: UserId,
        user_id: UserId,
        action: &'static str
    },
    #[error("User [{user_id}] was not found")]
    UserNotFound {
        user_id: UserId
    },
    #[error("Budget [{budget_id}] was not found for user [{user_id}]")]
    BudgetNotFound {
        user_id: UserId,
        budget_id: RecordId
    },
    #[error("Savings goal [{goal_id}] was not found for user [{user_id}]")]
    GoalNotFound {
        user_id: UserId,
        goal_id: RecordId
    },
    #[error("Invalid {field} [{amount}]")]
    InvalidAmount {
        field: &'static str,
        amount: Money
    }
}

impl RecordError {
    pub fn forbidden(caller: &str, user_id: &str, action: &'static str) -> Self {
        Self::Forbidden {
            caller: caller.to_string(),
            user_id: user_id.to_string(),
            action
        }
    }

    pub fn user_not_found(user_id: &str) -> Self {
        Self::UserNotFound { user_id: user_id.to_string() }
    }

    pub fn budget_not_found(user_id: &str, budget_id: RecordId) -> Self {
        Self::BudgetNotFound {
            user_id: user_id.to_string(),
            budget_id
        }
    }

    pub fn goal_not_found(user_id: &str, goal_id: RecordId) -> Self {
        Self::GoalNotFound {
            user_id: user_id.to_string(),
            goal_id
        }
    }

    pub fn invalid_amount(field: &'static str, amount: Money) -> Self {
        Self::InvalidAmount { field, amount }
    }
}
