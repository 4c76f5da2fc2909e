use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tokio::spawn;
use tracing::{debug, warn};

use crate::engine::{LedgerEntry, LedgerRow};
use crate::storage::Storage;
use crate::types::UserId;

/// Counts of what a single actor did with the rows it received.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ActorReport {
    pub applied: usize,
    pub rejected: usize
}

/// Owns one user's record while ledger rows for that user are being applied.
///
/// The record is loaded when the actor spawns and written back to storage
/// once the actor is despawned, so rows for the same user are applied in
/// the order they were accepted.
pub struct UserActor {
    sender: mpsc::UnboundedSender<LedgerRow>,
    handle: JoinHandle<ActorReport>
}

impl UserActor {
    pub fn new<S: Storage>(user_id: UserId, storage: Arc<S>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<LedgerRow>();

        let handle = spawn(async move {
            let mut record = storage.load(&user_id).unwrap_or_default();
            let mut report = ActorReport::default();

            while let Some(row) = receiver.recv().await {
                match LedgerEntry::try_from(row) {
                    Ok(entry) => {
                        debug!("Applied ledger entry for user [{user_id}]: {entry:?}");
                        record.apply(entry);
                        report.applied += 1;
                    },
                    Err(error) => {
                        warn!("{error}");
                        report.rejected += 1;
                    }
                }
            }

            storage.save(&user_id, record);

            report
        });

        Self { sender, handle }
    }

    /// Queues a row; `false` if the actor is no longer running.
    pub fn accept(&self, row: LedgerRow) -> bool {
        self.sender.send(row).is_ok()
    }

    /// Closes the queue and waits for the record to be saved.
    pub async fn despawn(self) -> Result<ActorReport, JoinError> {
        drop(self.sender);
        self.handle.await
    }
}
