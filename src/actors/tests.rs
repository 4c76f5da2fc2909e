use super::{ActorReport, UserActor};
use crate::engine::LedgerRow;
use crate::storage::{FinanceStorage, Storage};
use crate::types::Money;
use anyhow::{anyhow, Result};
use std::str::FromStr;
use std::sync::Arc;

fn create_row(user: &str, kind: &str, amount: &str, category: &str) -> LedgerRow {
    LedgerRow {
        record: "transaction".to_string(),
        user: user.to_string(),
        date: Some("2026-10-05".to_string()),
        kind: Some(kind.to_string()),
        name: None,
        category: Some(category.to_string()),
        amount: Some(amount.to_string()),
        target: None,
        description: None
    }
}

#[tokio::test]
async fn test_actor_isolation_and_storage_persistence() -> Result<()> {
    let storage = Arc::new(FinanceStorage::new());

    let actor_alice = UserActor::new("alice".to_string(), storage.clone());
    let actor_bob = UserActor::new("bob".to_string(), storage.clone());

    assert!(actor_alice.accept(create_row("alice", "expense", "100.0", "Food")));
    assert!(actor_bob.accept(create_row("bob", "income", "200.0", "Salary")));
    assert!(actor_alice.accept(create_row("alice", "expense", "50.0", "Fun")));

    actor_alice.despawn().await?;
    actor_bob.despawn().await?;

    let alice = storage.load("alice").ok_or_else(|| anyhow!("alice missing from storage"))?;
    let bob = storage.load("bob").ok_or_else(|| anyhow!("bob missing from storage"))?;

    assert_eq!(alice.transactions.len(), 2);
    assert_eq!(bob.transactions.len(), 1);
    assert_eq!(bob.transactions[0].amount, Money::from_str("200")?);

    Ok(())
}

#[tokio::test]
async fn test_actor_maintains_resilience_to_invalid_rows() -> Result<()> {
    let storage = Arc::new(FinanceStorage::new());
    let actor = UserActor::new("alice".to_string(), storage.clone());

    actor.accept(create_row("alice", "expense", "10.0", "Food"));
    actor.accept(create_row("alice", "expense", "ten", "Food"));
    actor.accept(create_row("alice", "transfer", "5.0", "Food"));
    actor.accept(create_row("alice", "expense", "20.0", "Food"));

    let report = actor.despawn().await?;

    assert_eq!(report, ActorReport { applied: 2, rejected: 2 });

    let record = storage.load("alice").ok_or_else(|| anyhow!("alice missing from storage"))?;

    assert_eq!(record.transactions.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_actor_extends_an_existing_record() -> Result<()> {
    let storage = Arc::new(FinanceStorage::new());

    let first = UserActor::new("alice".to_string(), storage.clone());
    first.accept(create_row("alice", "expense", "10.0", "Food"));
    first.despawn().await?;

    let second = UserActor::new("alice".to_string(), storage.clone());
    second.accept(create_row("alice", "expense", "15.0", "Food"));
    second.despawn().await?;

    let record = storage.load("alice").ok_or_else(|| anyhow!("alice missing from storage"))?;

    assert_eq!(record.transactions.len(), 2);

    Ok(())
}
