use crate::stats::CategoryTotals;
use crate::types::Money;

/// The `n` largest category buckets, largest first.
///
/// The sort is stable, so buckets with equal totals keep the order in which
/// their categories were first seen.
pub fn top_categories(totals: &CategoryTotals, n: usize) -> Vec<(String, Money)> {
    let mut ranked: Vec<(String, Money)> = totals.iter()
        .map(|(category, amount)| (category.to_string(), amount))
        .collect();

    ranked.sort_by(|left, right| right.1.cmp(&left.1));
    ranked.truncate(n);
    ranked
}
