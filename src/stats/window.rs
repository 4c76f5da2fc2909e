use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::stats::errors::WindowError;

/// A calendar month, first to last day inclusive.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct MonthWindow {
    first: NaiveDate,
    last: NaiveDate
}

impl MonthWindow {
    /// The month that `date` falls in.
    pub fn containing(date: NaiveDate) -> Self {
        let first = date - Days::new(u64::from(date.day0()));
        let last = first.checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);

        Self { first, last }
    }

    /// Parses a `YYYY-MM` month.
    pub fn parse(month: &str) -> Result<Self, WindowError> {
        NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
            .map(Self::containing)
            .map_err(|_| WindowError::InvalidMonth(month.to_string()))
    }

    pub fn previous(&self) -> Self {
        self.first.pred_opt().map_or(*self, Self::containing)
    }

    pub fn first(&self) -> NaiveDate {
        self.first
    }

    pub fn last(&self) -> NaiveDate {
        self.last
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// Human-readable name such as `October 2026`.
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl Display for MonthWindow {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.first.format("%Y-%m"))
    }
}
