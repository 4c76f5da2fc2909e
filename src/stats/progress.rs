use rust_decimal::Decimal;

use crate::stats::errors::ProgressError;

/// Percentage of `target` covered by `amount`, clamped to `[0, 100]`.
///
/// Used for both budgets (spent against limit) and savings goals (saved
/// against target).
///
/// # Errors
/// Returns `ProgressError::NonPositiveTarget` when `target` is zero or negative.
pub fn progress_percent(amount: Decimal, target: Decimal) -> Result<Decimal, ProgressError> {
    if target <= Decimal::ZERO {
        return Err(ProgressError::NonPositiveTarget { target })
    }

    let percent = amount.checked_div(target)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(ProgressError::Overflow { amount, target })?;

    Ok(percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
}
