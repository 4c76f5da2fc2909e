use crate::actors::UserActor;
use crate::engine::LedgerRow;
use crate::storage::Storage;
use crate::types::UserId;
use csv::{ReaderBuilder, Trim};
use futures::future::join_all;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{error, info, warn};

/// What a single ingestion run did.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct IngestSummary {
    pub users: usize,
    pub applied: usize,
    pub rejected: usize,
    pub unreadable: usize
}

/// Loads ledger CSV files into storage, one actor per user.
pub struct IngestEngine<S: Storage> {
    storage: Arc<S>,
    backpressure: usize
}

impl<S: Storage> IngestEngine<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            backpressure: 256
        }
    }

    /// Streams every row of the CSV at `path` into storage.
    ///
    /// Rows that cannot be read or converted are logged and skipped; a
    /// missing file is logged and leaves storage untouched.
    pub async fn run(&self, path: &str) -> anyhow::Result<IngestSummary> {
        let (sender, receiver) = mpsc::channel::<LedgerRow>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);
        let mut summary = self.process_rows(receiver).await?;

        match csv_handle.await {
            Ok(unreadable) => summary.unreadable = unreadable,
            Err(error) => error!("CSV ingestion failed: {error}")
        }

        info!(
            "Ingested {} rows for {} users ({} rejected, {} unreadable)",
            summary.applied, summary.users, summary.rejected, summary.unreadable
        );

        Ok(summary)
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<LedgerRow>) -> JoinHandle<usize> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return 0;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            let mut unreadable = 0;

            for result in reader.deserialize::<LedgerRow>() {
                match result {
                    Ok(row) => {
                        if sender.blocking_send(row).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                        unreadable += 1;
                    }
                }
            }

            unreadable
        })
    }

    async fn process_rows(&self, mut receiver: mpsc::Receiver<LedgerRow>) -> anyhow::Result<IngestSummary> {
        let mut actors = HashMap::<UserId, UserActor>::new();
        let mut summary = IngestSummary::default();

        while let Some(row) = receiver.recv().await {
            if row.user.trim().is_empty() {
                warn!("Skipping [{}] row without a user", row.record);
                summary.rejected += 1;
                continue;
            }

            let user_id = row.user.clone();
            let actor = actors.entry(user_id.clone()).or_insert_with(|| {
                UserActor::new(user_id.clone(), self.storage.clone())
            });

            if !actor.accept(row) {
                error!("User actor for [{user_id}] could not accept a ledger row");
            }
        }

        summary.users = actors.len();

        let despawns = actors.into_values().map(|actor| actor.despawn());

        for result in join_all(despawns).await {
            match result {
                Ok(report) => {
                    summary.applied += report.applied;
                    summary.rejected += report.rejected;
                },
                Err(error) => error!("A user actor did not despawn gracefully: {error:?}")
            }
        }

        Ok(summary)
    }
}
