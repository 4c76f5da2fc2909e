use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;

use crate::engine::errors::RowError;
use crate::models::{
    Account, AccountType, Budget, BudgetDraft, GoalDraft, GoalUpdate, ProfileUpdate, SavingsGoal, Transaction,
    TransactionType, UserProfile
};
use crate::types::{Money, UserId};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents a single line of the ledger CSV.
///
/// One file mixes every record kind; the `record` column selects which of
/// the optional columns are meaningful:
///
/// | record      | date        | kind               | name         | category | amount         | target       | description |
/// |-------------|-------------|--------------------|--------------|----------|----------------|--------------|-------------|
/// | transaction | booked on   | `income`/`expense` |              | bucket   | amount         |              | memo        |
/// | account     |             | `current`/`savings`| account name |          | balance        |              |             |
/// | budget      |             | period             |              | category | limit          |              | memo        |
/// | goal        | target date |                    | goal name    |          | saved so far   | target       | memo        |
/// | profile     |             |                    | display name |          | monthly income | savings goal | email       |
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerRow {
    pub record: String,
    pub user: UserId,
    pub date: Option<String>,
    pub kind: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub target: Option<String>,
    pub description: Option<String>
}

/// A ledger row converted into the record it describes.
#[derive(Debug, Clone)]
pub enum LedgerEntry {
    Transaction(Transaction),
    Account(Account),
    Budget(Budget),
    Goal(SavingsGoal),
    Profile(UserProfile)
}

impl TryFrom<LedgerRow> for LedgerEntry {
    type Error = RowError;

    fn try_from(row: LedgerRow) -> Result<Self, Self::Error> {
        match row.record.trim().to_lowercase().as_str() {
            "transaction" => row.to_transaction().map(LedgerEntry::Transaction),
            "account" => row.to_account().map(LedgerEntry::Account),
            "budget" => row.to_budget().map(LedgerEntry::Budget),
            "goal" => row.to_goal().map(LedgerEntry::Goal),
            "profile" => row.to_profile().map(LedgerEntry::Profile),
            _ => Err(RowError::unknown_record(&row))
        }
    }
}

impl LedgerRow {
    fn to_transaction(&self) -> Result<Transaction, RowError> {
        let kind = required(self, "kind", &self.kind)?;
        let transaction_type = match kind.to_lowercase().as_str() {
            "income" => TransactionType::Income,
            "expense" => TransactionType::Expense,
            _ => return Err(RowError::invalid_kind(self, kind))
        };

        let amount = self.money("amount", &self.amount)?;

        if amount.is_negative() {
            return Err(RowError::negative_amount(self, "amount"))
        }

        Ok(Transaction {
            date: self.parse_date(required(self, "date", &self.date)?)?,
            amount,
            transaction_type,
            category: self.category.clone().unwrap_or_default(),
            description: optional(&self.description)
        })
    }

    fn to_account(&self) -> Result<Account, RowError> {
        let name = required(self, "name", &self.name)?;
        let kind = required(self, "kind", &self.kind)?;
        let account_type = match kind.to_lowercase().as_str() {
            "current" => AccountType::Current,
            "savings" => AccountType::Savings,
            _ => return Err(RowError::invalid_kind(self, kind))
        };

        Ok(Account::new(name, account_type, self.money("amount", &self.amount)?))
    }

    fn to_budget(&self) -> Result<Budget, RowError> {
        let draft = BudgetDraft {
            category: optional(&self.category),
            amount: self.money("amount", &self.amount)?,
            description: optional(&self.description),
            period: optional(&self.kind)
        };

        Budget::new(draft).map_err(|error| RowError::rejected(self, error))
    }

    fn to_goal(&self) -> Result<SavingsGoal, RowError> {
        let target_date = match optional(&self.date) {
            Some(value) => Some(self.parse_date(&value)?),
            None => None
        };

        let draft = GoalDraft {
            name: required(self, "name", &self.name)?.to_string(),
            target_amount: self.money("target", &self.target)?,
            target_date,
            description: optional(&self.description)
        };

        let mut goal = SavingsGoal::new(draft).map_err(|error| RowError::rejected(self, error))?;

        if optional(&self.amount).is_some() {
            let update = GoalUpdate {
                current_amount: Some(self.money("amount", &self.amount)?),
                ..GoalUpdate::default()
            };

            goal.apply(update).map_err(|error| RowError::rejected(self, error))?;
        }

        Ok(goal)
    }

    fn to_profile(&self) -> Result<UserProfile, RowError> {
        let name = required(self, "name", &self.name)?;
        let mut profile = UserProfile::new(name, optional(&self.description).unwrap_or_default());

        let monthly_income = match optional(&self.amount) {
            Some(_) => Some(self.money("amount", &self.amount)?),
            None => None
        };

        let savings_goal = match optional(&self.target) {
            Some(_) => Some(self.money("target", &self.target)?),
            None => None
        };

        let update = ProfileUpdate {
            monthly_income,
            savings_goal,
            ..ProfileUpdate::default()
        };

        profile.apply(update).map_err(|error| RowError::rejected(self, error))?;

        Ok(profile)
    }

    fn money(&self, field: &'static str, value: &Option<String>) -> Result<Money, RowError> {
        let value = required(self, field, value)?;
        Money::from_str(value).map_err(|error| RowError::invalid_amount(self, field, error))
    }

    fn parse_date(&self, value: &str) -> Result<NaiveDate, RowError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| RowError::invalid_date(self, value))
    }
}

fn required<'a>(row: &LedgerRow, field: &'static str, value: &'a Option<String>) -> Result<&'a str, RowError> {
    value.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| RowError::missing_field(row, field))
}

fn optional(value: &Option<String>) -> Option<String> {
    value.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
