mod finance_storage;
mod user_record;

use crate::types::UserId;

pub use finance_storage::FinanceStorage;
pub use user_record::UserRecord;

pub trait Storage: Send + Sync + 'static {
    /// A snapshot of the user's records, if any exist.
    fn load(&self, user_id: &str) -> Option<UserRecord>;
    fn save(&self, user_id: &str, record: UserRecord);
    /// Mutates an existing record in place; `None` when the user is unknown.
    fn update<R>(&self, user_id: &str, change: impl FnOnce(&mut UserRecord) -> R) -> Option<R>;
    /// Like `update`, but creates an empty record for unknown users first.
    fn upsert<R>(&self, user_id: &str, change: impl FnOnce(&mut UserRecord) -> R) -> R;
    /// Known user ids in ascending order.
    fn users(&self) -> Vec<UserId>;
}
