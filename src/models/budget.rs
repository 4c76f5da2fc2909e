use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::errors::RecordError;
use crate::models::{require_non_negative, require_positive};
use crate::stats::{progress_percent, MonthlyStats, ProgressError};
use crate::types::{Money, RecordId};

const OVERALL_LABEL: &str = "Overall";

/// A spending limit, either for one category or for all expenses of a month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: RecordId,
    /// `None` marks an overall monthly budget.
    pub category: Option<String>,
    pub amount: Money,
    pub spent: Money,
    pub description: Option<String>,
    pub period: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

/// Fields accepted when a budget is created.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetDraft {
    pub category: Option<String>,
    pub amount: Money,
    pub description: Option<String>,
    pub period: Option<String>
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetUpdate {
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub spent: Option<Money>,
    pub description: Option<String>,
    pub period: Option<String>
}

impl Budget {
    /// Creates a budget from a draft with nothing spent yet.
    ///
    /// # Errors
    /// Returns `RecordError::InvalidAmount` if the amount is zero or negative.
    pub fn new(draft: BudgetDraft) -> Result<Self, RecordError> {
        require_positive("budget amount", draft.amount)?;

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            category: draft.category.filter(|category| !category.trim().is_empty()),
            amount: draft.amount,
            spent: Money::ZERO,
            description: draft.description,
            period: draft.period,
            created_at: now,
            updated_at: now
        })
    }

    pub fn is_overall(&self) -> bool {
        self.category.is_none()
    }

    pub fn name(&self) -> &str {
        self.category.as_deref().unwrap_or(OVERALL_LABEL)
    }

    /// Share of the budget already spent, in percent.
    pub fn progress(&self) -> Result<Decimal, ProgressError> {
        progress_percent(self.spent.amount(), self.amount.amount())
    }

    /// What the month described by `stats` spent against this budget.
    pub fn spent_in(&self, stats: &MonthlyStats) -> Money {
        match &self.category {
            Some(category) => stats.by_category.get(category).unwrap_or(Money::ZERO),
            None => stats.total_expenses
        }
    }

    pub fn apply(&mut self, update: BudgetUpdate) -> Result<(), RecordError> {
        if let Some(amount) = update.amount {
            require_positive("budget amount", amount)?;
        }

        if let Some(spent) = update.spent {
            require_non_negative("budget spent", spent)?;
        }

        if let Some(category) = update.category {
            self.category = Some(category).filter(|category| !category.trim().is_empty());
        }

        if let Some(amount) = update.amount {
            self.amount = amount;
        }

        if let Some(spent) = update.spent {
            self.spent = spent;
        }

        if let Some(description) = update.description {
            self.description = Some(description);
        }

        if let Some(period) = update.period {
            self.period = Some(period);
        }

        self.updated_at = Utc::now();

        Ok(())
    }
}
