use super::{aggregate, progress_percent, top_categories, CategoryTotals, MonthWindow, ProgressError, UNCATEGORIZED};

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType};
use crate::types::Money;

fn create_transaction(transaction_type: TransactionType, amount: &str, category: &str) -> Result<Transaction> {
    Ok(Transaction {
        date: NaiveDate::from_ymd_opt(2026, 10, 5).ok_or_else(|| anyhow::anyhow!("invalid date"))?,
        amount: Money::from_str(amount)?,
        transaction_type,
        category: category.to_string(),
        description: None
    })
}

fn money(amount: &str) -> Result<Money> {
    Ok(Money::from_str(amount)?)
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow::anyhow!("invalid date"))
}

#[test]
fn test_aggregate_of_empty_input_is_all_zero() {
    let stats = aggregate(&[]);

    assert!(stats.total_income.is_zero());
    assert!(stats.total_expenses.is_zero());
    assert!(stats.by_category.is_empty());
    assert_eq!(stats.transaction_count, 0);
}

#[test]
fn test_aggregate_splits_income_and_expenses_by_category() -> Result<()> {
    let transactions = vec![
        create_transaction(TransactionType::Income, "3000.00", "Salary")?,
        create_transaction(TransactionType::Expense, "800.00", "Rent")?,
        create_transaction(TransactionType::Expense, "45.50", "Food")?,
        create_transaction(TransactionType::Expense, "74.50", "Food")?,
        create_transaction(TransactionType::Income, "120.00", "Freelance")?,
    ];

    let stats = aggregate(&transactions);

    assert_eq!(stats.total_income, money("3120")?);
    assert_eq!(stats.total_expenses, money("920")?);
    assert_eq!(stats.by_category.get("Food"), Some(money("120")?));
    assert_eq!(stats.by_category.get("Rent"), Some(money("800")?));
    assert_eq!(stats.by_category.get("Salary"), None);
    assert_eq!(stats.transaction_count, 5);
    assert_eq!(stats.net(), money("2200")?);

    Ok(())
}

#[test]
fn test_aggregate_expenses_always_equal_category_sum() -> Result<()> {
    let samples = vec![
        vec![],
        vec![("EXPENSE", "0.10"), ("EXPENSE", "0.20"), ("INCOME", "0.30")],
        vec![("EXPENSE", "19.99"), ("EXPENSE", "0.01"), ("EXPENSE", "1000000.333")],
        vec![("INCOME", "5"), ("INCOME", "7")],
    ];
    let categories = ["Food", "Rent", "", "Food"];

    for sample in samples {
        let transactions = sample.iter().enumerate()
            .map(|(index, (kind, amount))| {
                let transaction_type = if *kind == "EXPENSE" { TransactionType::Expense } else { TransactionType::Income };
                create_transaction(transaction_type, amount, categories[index % categories.len()])
            })
            .collect::<Result<Vec<_>>>()?;

        let stats = aggregate(&transactions);
        let expense_count = transactions.iter().filter(|transaction| transaction.is_expense()).count();
        let income_count = transactions.len() - expense_count;

        assert_eq!(stats.total_expenses, stats.by_category.total());
        assert_eq!(stats.transaction_count, expense_count + income_count);
    }

    Ok(())
}

#[test]
fn test_aggregate_buckets_blank_categories_as_uncategorized() -> Result<()> {
    let transactions = vec![
        create_transaction(TransactionType::Expense, "10", "")?,
        create_transaction(TransactionType::Expense, "5", "   ")?,
    ];

    let stats = aggregate(&transactions);

    assert_eq!(stats.by_category.len(), 1);
    assert_eq!(stats.by_category.get(UNCATEGORIZED), Some(money("15")?));

    Ok(())
}

#[test]
fn test_progress_percent_reference_values() -> Result<()> {
    assert_eq!(progress_percent(Decimal::from(50), Decimal::from(200))?, Decimal::from(25));
    assert_eq!(progress_percent(Decimal::from(250), Decimal::from(200))?, Decimal::from(100));
    assert_eq!(progress_percent(Decimal::ZERO, Decimal::from(200))?, Decimal::ZERO);

    Ok(())
}

#[test]
fn test_progress_percent_clamps_negative_amounts_to_zero() -> Result<()> {
    assert_eq!(progress_percent(Decimal::from(-10), Decimal::from(200))?, Decimal::ZERO);

    Ok(())
}

#[test]
fn test_progress_percent_rejects_non_positive_targets() {
    assert_eq!(
        progress_percent(Decimal::from(10), Decimal::ZERO),
        Err(ProgressError::NonPositiveTarget { target: Decimal::ZERO })
    );
    assert!(progress_percent(Decimal::from(10), Decimal::from(-5)).is_err());
}

#[test]
fn test_top_categories_orders_largest_first() -> Result<()> {
    let totals: CategoryTotals = vec![("Food", money("120")?), ("Rent", money("800")?), ("Fun", money("30")?)]
        .into_iter()
        .collect();

    let top = top_categories(&totals, 2);

    assert_eq!(top, vec![("Rent".to_string(), money("800")?), ("Food".to_string(), money("120")?)]);

    Ok(())
}

#[test]
fn test_top_categories_keeps_insertion_order_for_ties() -> Result<()> {
    let totals: CategoryTotals = vec![("Fun", money("10")?), ("A", money("50")?), ("B", money("50")?)]
        .into_iter()
        .collect();

    let top = top_categories(&totals, 2);

    assert_eq!(top, vec![("A".to_string(), money("50")?), ("B".to_string(), money("50")?)]);

    Ok(())
}

#[test]
fn test_top_categories_handles_short_and_empty_maps() -> Result<()> {
    assert!(top_categories(&CategoryTotals::new(), 3).is_empty());

    let totals: CategoryTotals = vec![("Food", money("1")?)].into_iter().collect();

    assert_eq!(top_categories(&totals, 3).len(), 1);

    Ok(())
}

#[test]
fn test_month_window_bounds_and_previous_month() -> Result<()> {
    let window = MonthWindow::containing(date(2024, 3, 15)?);

    assert_eq!(window.first(), date(2024, 3, 1)?);
    assert_eq!(window.last(), date(2024, 3, 31)?);
    assert!(window.contains(date(2024, 3, 31)?));
    assert!(!window.contains(date(2024, 4, 1)?));
    assert_eq!(window.label(), "March 2024");
    assert_eq!(window.to_string(), "2024-03");

    let previous = window.previous();

    assert_eq!(previous.first(), date(2024, 2, 1)?);
    assert_eq!(previous.last(), date(2024, 2, 29)?);

    Ok(())
}

#[test]
fn test_month_window_previous_crosses_year_boundary() -> Result<()> {
    let window = MonthWindow::parse("2026-01")?;

    assert_eq!(window.previous().to_string(), "2025-12");
    assert_eq!(window.previous().last(), date(2025, 12, 31)?);
    assert!(MonthWindow::parse("2026-13").is_err());
    assert!(MonthWindow::parse("october").is_err());

    Ok(())
}

#[test]
fn test_monthly_stats_serialize_with_camel_case_fields() -> Result<()> {
    let stats = aggregate(&[
        create_transaction(TransactionType::Income, "3000.00", "Salary")?,
        create_transaction(TransactionType::Expense, "45.20", "Food")?,
        create_transaction(TransactionType::Expense, "4.80", "")?,
    ]);

    let value = serde_json::to_value(&stats)?;

    assert_eq!(value["totalIncome"], "3000.00");
    assert_eq!(value["totalExpenses"], "50.00");
    assert_eq!(value["transactionCount"], 3);
    assert_eq!(value["byCategory"]["Food"], "45.20");
    assert_eq!(value["byCategory"][UNCATEGORIZED], "4.80");
    assert_eq!(value["byCategory"].as_object().map(|buckets| buckets.len()), Some(2));

    Ok(())
}

#[test]
fn test_aggregate_keeps_previous_total_when_addition_overflows() -> Result<()> {
    let largest = Decimal::MAX.to_string();
    let stats = aggregate(&[
        create_transaction(TransactionType::Expense, &largest, "Food")?,
        create_transaction(TransactionType::Expense, "1", "Food")?,
    ]);

    assert_eq!(stats.total_expenses, Money::new(Decimal::MAX));
    assert_eq!(stats.by_category.get("Food"), Some(Money::new(Decimal::MAX)));
    assert_eq!(stats.by_category.total(), stats.total_expenses);
    assert_eq!(stats.transaction_count, 2);

    Ok(())
}
