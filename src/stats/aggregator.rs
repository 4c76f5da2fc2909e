use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::{Transaction, TransactionType};
use crate::types::Money;

/// Bucket used for expenses whose category is blank.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Expense totals keyed by category, in first-seen order.
///
/// Ranking ties fall back on this insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(String, Money)>
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the bucket for `category`, creating it at zero if absent.
    pub fn add(&mut self, category: &str, amount: Money) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category.to_string(), amount))
        }
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries.iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> + '_ {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// Sum over every bucket.
    pub fn total(&self) -> Money {
        self.entries.iter().fold(Money::ZERO, |mut sum, (_, total)| {
            sum += *total;
            sum
        })
    }
}

impl<S: AsRef<str>> FromIterator<(S, Money)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (S, Money)>>(iter: I) -> Self {
        let mut totals = CategoryTotals::new();

        for (category, amount) in iter {
            totals.add(category.as_ref(), amount);
        }

        totals
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;

        for (name, total) in &self.entries {
            map.serialize_entry(name, total)?;
        }

        map.end()
    }
}

/// Income and expense totals for one aggregation window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub total_income: Money,
    pub total_expenses: Money,
    pub by_category: CategoryTotals,
    pub transaction_count: usize
}

impl MonthlyStats {
    /// Income minus expenses.
    pub fn net(&self) -> Money {
        let mut net = self.total_income;
        net -= self.total_expenses;
        net
    }
}

/// Reduces a month of transactions into income, expense and per-category totals.
///
/// The caller is trusted to have filtered the input to the desired window and
/// owner. Expenses land in the bucket of their category; everything else
/// counts as income.
///
/// Sums use `Money`'s `+=`: an addition that would overflow is logged with
/// `error!` and dropped, leaving the total at its previous value.
pub fn aggregate(transactions: &[Transaction]) -> MonthlyStats {
    let initial = MonthlyStats {
        transaction_count: transactions.len(),
        ..MonthlyStats::default()
    };

    transactions.iter().fold(initial, |mut stats, transaction| {
        match transaction.transaction_type {
            TransactionType::Expense => {
                stats.total_expenses += transaction.amount;
                stats.by_category.add(bucket_name(&transaction.category), transaction.amount);
            },
            TransactionType::Income => {
                stats.total_income += transaction.amount;
            }
        }

        stats
    })
}

fn bucket_name(category: &str) -> &str {
    if category.trim().is_empty() {
        UNCATEGORIZED
    } else {
        category
    }
}
