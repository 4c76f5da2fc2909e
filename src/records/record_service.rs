use std::sync::Arc;

use tracing::{info, warn};

use crate::models::{Budget, BudgetDraft, BudgetUpdate, GoalDraft, GoalUpdate, ProfileUpdate, RecordError, SavingsGoal, UserProfile};
use crate::records::Caller;
use crate::storage::Storage;
use crate::types::RecordId;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Registration {
    Created,
    AlreadyRegistered
}

/// Budget, savings goal and profile operations scoped to a caller.
pub struct RecordService<S: Storage> {
    storage: Arc<S>
}

impl<S: Storage> RecordService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Creates a profile for the caller unless one exists already.
    pub fn register(&self, caller: &Caller, display_name: &str) -> Registration {
        self.storage.upsert(&caller.uid, |record| {
            if record.profile.is_some() {
                info!("User [{}] already registered", caller.uid);
                return Registration::AlreadyRegistered;
            }

            record.profile = Some(UserProfile::new(display_name, caller.email.as_str()));
            info!("Registered user [{}]", caller.uid);
            Registration::Created
        })
    }

    /// The stored profile, or a default one derived from the caller when none exists.
    pub fn profile(&self, caller: &Caller, user_id: &str) -> Result<UserProfile, RecordError> {
        check_read(caller, user_id)?;

        let stored = self.storage.load(user_id).and_then(|record| record.profile);

        Ok(stored.unwrap_or_else(|| {
            info!("No profile stored for user [{user_id}], returning defaults");
            UserProfile::new(format!("User {user_id}"), caller.email.as_str())
        }))
    }

    pub fn update_profile(&self, caller: &Caller, user_id: &str, update: ProfileUpdate) -> Result<UserProfile, RecordError> {
        check_write(caller, user_id)?;

        self.storage.upsert(user_id, |record| {
            let profile = record.profile.get_or_insert_with(|| {
                UserProfile::new(format!("User {user_id}"), caller.email.as_str())
            });

            profile.apply(update)?;
            info!("Updated profile of user [{user_id}]");
            Ok(profile.clone())
        })
    }

    pub fn budgets(&self, caller: &Caller, user_id: &str) -> Result<Vec<Budget>, RecordError> {
        check_read(caller, user_id)?;

        let budgets = self.storage.load(user_id)
            .map(|record| record.budgets)
            .unwrap_or_default();

        info!("Found {} budgets for user [{user_id}]", budgets.len());

        Ok(budgets)
    }

    pub fn create_budget(&self, caller: &Caller, user_id: &str, draft: BudgetDraft) -> Result<RecordId, RecordError> {
        check_write(caller, user_id)?;

        let budget = Budget::new(draft)?;
        let budget_id = budget.id;

        self.storage.upsert(user_id, |record| record.budgets.push(budget));
        info!("Created budget [{budget_id}] for user [{user_id}]");

        Ok(budget_id)
    }

    pub fn update_budget(&self, caller: &Caller, user_id: &str, budget_id: RecordId, update: BudgetUpdate) -> Result<(), RecordError> {
        check_write(caller, user_id)?;

        self.storage.update(user_id, |record| {
            let budget = record.budget_mut(budget_id)
                .ok_or_else(|| RecordError::budget_not_found(user_id, budget_id))?;

            budget.apply(update)
        })
        .ok_or_else(|| RecordError::user_not_found(user_id))
        .and_then(|result| result)
        .inspect(|_| info!("Updated budget [{budget_id}] for user [{user_id}]"))
        .inspect_err(|error| warn!("{error}"))
    }

    pub fn delete_budget(&self, caller: &Caller, user_id: &str, budget_id: RecordId) -> Result<(), RecordError> {
        check_write(caller, user_id)?;

        let removed = self.storage.update(user_id, |record| record.remove_budget(budget_id))
            .ok_or_else(|| RecordError::user_not_found(user_id))
            .inspect_err(|error| warn!("{error}"))?;

        if !removed {
            warn!("Budget [{budget_id}] not found for user [{user_id}]");
            return Err(RecordError::budget_not_found(user_id, budget_id))
        }

        info!("Deleted budget [{budget_id}] for user [{user_id}]");

        Ok(())
    }

    pub fn goals(&self, caller: &Caller, user_id: &str) -> Result<Vec<SavingsGoal>, RecordError> {
        check_read(caller, user_id)?;

        let goals = self.storage.load(user_id)
            .map(|record| record.goals)
            .unwrap_or_default();

        info!("Found {} savings goals for user [{user_id}]", goals.len());

        Ok(goals)
    }

    pub fn create_goal(&self, caller: &Caller, user_id: &str, draft: GoalDraft) -> Result<RecordId, RecordError> {
        check_write(caller, user_id)?;

        let goal = SavingsGoal::new(draft)?;
        let goal_id = goal.id;

        self.storage.upsert(user_id, |record| record.goals.push(goal));
        info!("Created savings goal [{goal_id}] for user [{user_id}]");

        Ok(goal_id)
    }

    pub fn update_goal(&self, caller: &Caller, user_id: &str, goal_id: RecordId, update: GoalUpdate) -> Result<(), RecordError> {
        check_write(caller, user_id)?;

        self.storage.update(user_id, |record| {
            let goal = record.goal_mut(goal_id)
                .ok_or_else(|| RecordError::goal_not_found(user_id, goal_id))?;

            goal.apply(update)
        })
        .ok_or_else(|| RecordError::user_not_found(user_id))
        .and_then(|result| result)
        .inspect(|_| info!("Updated savings goal [{goal_id}] for user [{user_id}]"))
        .inspect_err(|error| warn!("{error}"))
    }

    pub fn delete_goal(&self, caller: &Caller, user_id: &str, goal_id: RecordId) -> Result<(), RecordError> {
        check_write(caller, user_id)?;

        let removed = self.storage.update(user_id, |record| record.remove_goal(goal_id))
            .ok_or_else(|| RecordError::user_not_found(user_id))
            .inspect_err(|error| warn!("{error}"))?;

        if !removed {
            warn!("Savings goal [{goal_id}] not found for user [{user_id}]");
            return Err(RecordError::goal_not_found(user_id, goal_id))
        }

        info!("Deleted savings goal [{goal_id}] for user [{user_id}]");

        Ok(())
    }
}

fn check_read(caller: &Caller, user_id: &str) -> Result<(), RecordError> {
    if !caller.can_read(user_id) {
        return Err(RecordError::forbidden(&caller.uid, user_id, "read"))
    }

    Ok(())
}

fn check_write(caller: &Caller, user_id: &str) -> Result<(), RecordError> {
    if !caller.can_write(user_id) {
        return Err(RecordError::forbidden(&caller.uid, user_id, "modify"))
    }

    Ok(())
}
