use super::{Caller, RecordService, Registration};

use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{BudgetDraft, BudgetUpdate, GoalDraft, GoalUpdate, ProfileUpdate, RecordError};
use crate::storage::FinanceStorage;
use crate::types::Money;

fn create_service() -> RecordService<FinanceStorage> {
    RecordService::new(Arc::new(FinanceStorage::new()))
}

fn alice() -> Caller {
    Caller::new("alice", "alice@mail.test")
}

fn food_budget(amount: &str) -> Result<BudgetDraft> {
    Ok(BudgetDraft {
        category: Some("Food".to_string()),
        amount: Money::from_str(amount)?,
        description: None,
        period: Some("monthly".to_string())
    })
}

fn vacation_goal(target: &str) -> Result<GoalDraft> {
    Ok(GoalDraft {
        name: "Vacation".to_string(),
        target_amount: Money::from_str(target)?,
        target_date: None,
        description: None
    })
}

#[test]
fn test_register_is_idempotent() {
    let service = create_service();

    assert_eq!(service.register(&alice(), "Alice"), Registration::Created);
    assert_eq!(service.register(&alice(), "Alice again"), Registration::AlreadyRegistered);
}

#[test]
fn test_profile_defaults_when_nothing_is_stored() -> Result<()> {
    let service = create_service();
    let profile = service.profile(&alice(), "alice")?;

    assert_eq!(profile.display_name, "User alice");
    assert_eq!(profile.preferred_currency, "USD");

    Ok(())
}

#[test]
fn test_profile_update_applies_only_given_fields() -> Result<()> {
    let service = create_service();
    service.register(&alice(), "Alice");

    let update = ProfileUpdate {
        monthly_income: Some(Money::from_str("4200")?),
        bio: Some("Saving for a bike".to_string()),
        ..ProfileUpdate::default()
    };

    let profile = service.update_profile(&alice(), "alice", update)?;

    assert_eq!(profile.display_name, "Alice");
    assert_eq!(profile.monthly_income, Money::from_str("4200")?);
    assert_eq!(profile.bio.as_deref(), Some("Saving for a bike"));

    Ok(())
}

#[test]
fn test_budget_lifecycle() -> Result<()> {
    let service = create_service();
    let caller = alice();

    assert!(service.budgets(&caller, "alice")?.is_empty());

    let budget_id = service.create_budget(&caller, "alice", food_budget("400")?)?;
    let budgets = service.budgets(&caller, "alice")?;

    assert_eq!(budgets.len(), 1);
    assert!(budgets[0].spent.is_zero());

    let update = BudgetUpdate {
        spent: Some(Money::from_str("100")?),
        ..BudgetUpdate::default()
    };
    service.update_budget(&caller, "alice", budget_id, update)?;

    let budgets = service.budgets(&caller, "alice")?;

    assert_eq!(budgets[0].progress()?, Decimal::from(25));
    assert_eq!(budgets[0].amount, Money::from_str("400")?);

    service.delete_budget(&caller, "alice", budget_id)?;

    assert!(service.budgets(&caller, "alice")?.is_empty());
    assert!(matches!(
        service.delete_budget(&caller, "alice", budget_id),
        Err(RecordError::BudgetNotFound { .. })
    ));

    Ok(())
}

#[test]
fn test_goal_lifecycle() -> Result<()> {
    let service = create_service();
    let caller = alice();

    let goal_id = service.create_goal(&caller, "alice", vacation_goal("2000")?)?;

    let update = GoalUpdate {
        current_amount: Some(Money::from_str("500")?),
        ..GoalUpdate::default()
    };
    service.update_goal(&caller, "alice", goal_id, update)?;

    let goals = service.goals(&caller, "alice")?;

    assert_eq!(goals[0].progress()?, Decimal::from(25));
    assert_eq!(goals[0].remaining(), Money::from_str("1500")?);

    service.delete_goal(&caller, "alice", goal_id)?;

    assert!(service.goals(&caller, "alice")?.is_empty());

    Ok(())
}

#[test]
fn test_updates_report_missing_users_and_records() -> Result<()> {
    let service = create_service();
    let caller = alice();

    assert!(matches!(
        service.update_goal(&caller, "alice", Uuid::new_v4(), GoalUpdate::default()),
        Err(RecordError::UserNotFound { .. })
    ));

    service.create_goal(&caller, "alice", vacation_goal("100")?)?;

    assert!(matches!(
        service.update_goal(&caller, "alice", Uuid::new_v4(), GoalUpdate::default()),
        Err(RecordError::GoalNotFound { .. })
    ));
    assert!(matches!(
        service.update_budget(&caller, "alice", Uuid::new_v4(), BudgetUpdate::default()),
        Err(RecordError::BudgetNotFound { .. })
    ));

    Ok(())
}

#[test]
fn test_invalid_amounts_are_rejected() -> Result<()> {
    let service = create_service();
    let caller = alice();

    assert!(matches!(
        service.create_budget(&caller, "alice", food_budget("0")?),
        Err(RecordError::InvalidAmount { .. })
    ));
    assert!(matches!(
        service.create_goal(&caller, "alice", vacation_goal("-10")?),
        Err(RecordError::InvalidAmount { .. })
    ));

    let goal_id = service.create_goal(&caller, "alice", vacation_goal("100")?)?;
    let update = GoalUpdate {
        target_amount: Some(Money::from_str("0")?),
        ..GoalUpdate::default()
    };

    assert!(service.update_goal(&caller, "alice", goal_id, update).is_err());
    assert_eq!(service.goals(&caller, "alice")?[0].target_amount, Money::from_str("100")?);

    Ok(())
}

#[test]
fn test_access_rules_separate_users() -> Result<()> {
    let service = create_service();
    let developer = Caller::new("dev", "dev@example.com");

    service.create_budget(&alice(), "alice", food_budget("400")?)?;

    assert_eq!(service.budgets(&developer, "alice")?.len(), 1);
    assert!(matches!(
        service.create_budget(&developer, "alice", food_budget("10")?),
        Err(RecordError::Forbidden { .. })
    ));

    let mallory = Caller::new("mallory", "mallory@mail.test");

    assert!(matches!(service.goals(&mallory, "alice"), Err(RecordError::Forbidden { .. })));
    assert!(matches!(service.profile(&mallory, "alice"), Err(RecordError::Forbidden { .. })));

    Ok(())
}
