use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::errors::RecordError;
use crate::models::{require_non_negative, require_positive};
use crate::stats::{progress_percent, ProgressError};
use crate::types::{Money, RecordId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: RecordId,
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: Money,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub target_amount: Option<Money>,
    pub current_amount: Option<Money>,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>
}

impl SavingsGoal {
    /// Creates a goal with nothing saved yet.
    pub fn new(draft: GoalDraft) -> Result<Self, RecordError> {
        require_positive("goal target", draft.target_amount)?;

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            name: draft.name,
            target_amount: draft.target_amount,
            current_amount: Money::ZERO,
            target_date: draft.target_date,
            description: draft.description,
            created_at: now,
            updated_at: now
        })
    }

    pub fn progress(&self) -> Result<Decimal, ProgressError> {
        progress_percent(self.current_amount.amount(), self.target_amount.amount())
    }

    /// Amount still missing to reach the target, never below zero.
    pub fn remaining(&self) -> Money {
        match self.target_amount.checked_sub(self.current_amount) {
            Some(remaining) if !remaining.is_negative() => remaining,
            _ => Money::ZERO
        }
    }

    pub fn apply(&mut self, update: GoalUpdate) -> Result<(), RecordError> {
        if let Some(target_amount) = update.target_amount {
            require_positive("goal target", target_amount)?;
        }

        if let Some(current_amount) = update.current_amount {
            require_non_negative("goal current amount", current_amount)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }

        if let Some(target_amount) = update.target_amount {
            self.target_amount = target_amount;
        }

        if let Some(current_amount) = update.current_amount {
            self.current_amount = current_amount;
        }

        if let Some(target_date) = update.target_date {
            self.target_date = Some(target_date);
        }

        if let Some(description) = update.description {
            self.description = Some(description);
        }

        self.updated_at = Utc::now();

        Ok(())
    }
}
