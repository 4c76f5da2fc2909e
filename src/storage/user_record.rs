use crate::engine::LedgerEntry;
use crate::models::{Account, Budget, SavingsGoal, Transaction, UserProfile};
use crate::stats::MonthWindow;
use crate::types::RecordId;

const DEFAULT_USER_NAME: &str = "User";

/// Everything stored for a single user.
#[derive(Debug, Clone, Default)]
pub struct UserRecord {
    pub profile: Option<UserProfile>,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<SavingsGoal>
}

impl UserRecord {
    /// Adds a single ingested ledger entry.
    ///
    /// A profile entry replaces any existing profile; every other kind is appended.
    pub fn apply(&mut self, entry: LedgerEntry) {
        match entry {
            LedgerEntry::Transaction(transaction) => self.transactions.push(transaction),
            LedgerEntry::Account(account) => self.accounts.push(account),
            LedgerEntry::Budget(budget) => self.budgets.push(budget),
            LedgerEntry::Goal(goal) => self.goals.push(goal),
            LedgerEntry::Profile(profile) => self.profile = Some(profile)
        }
    }

    /// Transactions dated inside `window`, newest first.
    pub fn transactions_in(&self, window: MonthWindow) -> Vec<Transaction> {
        let mut selected: Vec<Transaction> = self.transactions.iter()
            .filter(|transaction| window.contains(transaction.date))
            .cloned()
            .collect();

        selected.sort_by(|left, right| right.date.cmp(&left.date));
        selected
    }

    /// The overall monthly budget, falling back to the first budget of any kind.
    pub fn primary_budget(&self) -> Option<&Budget> {
        self.budgets.iter()
            .find(|budget| budget.is_overall())
            .or_else(|| self.budgets.first())
    }

    pub fn display_name(&self) -> &str {
        self.profile.as_ref()
            .map(|profile| profile.display_name.as_str())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_USER_NAME)
    }

    pub fn budget_mut(&mut self, budget_id: RecordId) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|budget| budget.id == budget_id)
    }

    pub fn goal_mut(&mut self, goal_id: RecordId) -> Option<&mut SavingsGoal> {
        self.goals.iter_mut().find(|goal| goal.id == goal_id)
    }

    /// Removes the budget, reporting whether it existed.
    pub fn remove_budget(&mut self, budget_id: RecordId) -> bool {
        let before = self.budgets.len();
        self.budgets.retain(|budget| budget.id != budget_id);
        self.budgets.len() != before
    }

    pub fn remove_goal(&mut self, goal_id: RecordId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != goal_id);
        self.goals.len() != before
    }
}
