//! Background Seeder
//!
//! Bulk-populates the data source off the caller's thread. The caller
//! shows a busy state from [`SeedEvent::Started`] until the terminal
//! event arrives, and refreshes its adapter on success.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::Sender;

use crate::domain::item::ItemDraft;
use crate::services::database::DataSource;
use crate::services::events::SeedEvent;
use crate::services::runtime;

/// Build the sample drafts inserted on first launch
pub fn sample_drafts(amount: usize) -> Vec<ItemDraft> {
    (0..amount)
        .map(|i| {
            let message = format!("message {i} ").repeat(10).trim_end().to_string();
            ItemDraft::new(format!("Title {i}"), message)
        })
        .collect()
}

/// Spawns bulk population runs, at most one in flight at a time
pub struct Seeder {
    in_flight: Arc<AtomicBool>,
    tx: Sender<SeedEvent>,
}

impl Seeder {
    /// Create a new seeder reporting over `tx`
    pub fn new(tx: Sender<SeedEvent>) -> Self {
        Self {
            in_flight: Arc::new(AtomicBool::new(false)),
            tx,
        }
    }

    /// Check if a population run is currently in flight
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Populate `source` with `amount` sample records in the background
    ///
    /// Returns `false` without spawning when a run is already in flight.
    /// The insert happens inside one transaction on a blocking worker; the
    /// caller always receives a terminal event, success or failure.
    pub fn spawn<D>(&self, source: D, amount: usize) -> bool
    where
        D: DataSource<ItemDraft> + Send + 'static,
    {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::warn!("Seed already in flight, ignoring request");
            return false;
        }
        let _ = self.tx.send(SeedEvent::Started);

        let in_flight = self.in_flight.clone();
        let tx = self.tx.clone();
        runtime::spawn_in_tokio(async move {
            let result = tokio::task::spawn_blocking(move || {
                let drafts = sample_drafts(amount);
                source.bulk_insert(&drafts)
            })
            .await;

            let event = match result {
                Ok(Ok(inserted)) => {
                    tracing::info!("Seed finished: {inserted} items");
                    SeedEvent::Finished { inserted }
                }
                Ok(Err(e)) => {
                    tracing::error!("Seed failed: {e}");
                    SeedEvent::Failed {
                        message: e.to_string().into(),
                    }
                }
                Err(e) => {
                    tracing::error!("Seed task panicked: {e}");
                    SeedEvent::Failed {
                        message: e.to_string().into(),
                    }
                }
            };

            in_flight.store(false, Ordering::SeqCst);
            let _ = tx.send(event);
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::services::database::{DataSource, Database, ItemRepository, SortOrder};

    #[test]
    fn test_sample_drafts() {
        let drafts = sample_drafts(3);
        assert_eq!(drafts.len(), 3);
        assert_eq!(drafts[0].title, "Title 0");
        assert!(drafts[2].message.starts_with("message 2"));
    }

    #[test]
    fn test_seed_reports_started_then_finished() {
        let db = Database::open_in_memory().expect("open db");
        let repo = ItemRepository::new(db);
        let (tx, rx) = crossbeam_channel::unbounded();
        let seeder = Seeder::new(tx);

        assert!(seeder.spawn(repo.clone(), 50));

        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(5)).expect("started"),
            SeedEvent::Started
        ));
        match rx.recv_timeout(Duration::from_secs(5)).expect("terminal") {
            SeedEvent::Finished { inserted } => assert_eq!(inserted, 50),
            other => panic!("unexpected event: {other:?}"),
        }

        assert!(!seeder.is_in_flight());
        assert_eq!(repo.count().expect("count"), 50);
        let stream = repo.open_stream(SortOrder::Ascending).expect("stream");
        assert_eq!(crate::list::RowStream::len(&stream), 50);
    }
}
