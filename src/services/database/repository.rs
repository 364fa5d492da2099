//! Item Repository
//!
//! Data access for list records: streaming reads, transactional bulk
//! insert and full clear.

use rusqlite::params;

use crate::domain::item::ItemDraft;
use crate::error::Result;

use super::connection::Database;
use super::stream::SqliteRowStream;
use super::{DataSource, SortOrder};

/// Repository for the items table
#[derive(Clone)]
pub struct ItemRepository {
    db: Database,
}

impl ItemRepository {
    /// Create a new repository over `db`
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Number of persisted records
    pub fn count(&self) -> Result<usize> {
        let conn = self.db.connection();
        let locked = conn.lock();
        let count: i64 = locked.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl DataSource<ItemDraft> for ItemRepository {
    type Stream = SqliteRowStream;

    fn open_stream(&self, order: SortOrder) -> Result<SqliteRowStream> {
        SqliteRowStream::open(self.db.connection(), order)
    }

    fn bulk_insert(&self, drafts: &[ItemDraft]) -> Result<usize> {
        let conn = self.db.connection();
        let mut locked = conn.lock();
        let tx = locked.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO items (title, message) VALUES (?1, ?2)")?;
            for draft in drafts {
                stmt.execute(params![draft.title, draft.message])?;
            }
        }
        tx.commit()?;

        tracing::debug!("Bulk inserted {} items", drafts.len());
        Ok(drafts.len())
    }

    fn clear_all(&self) -> Result<()> {
        let conn = self.db.connection();
        let locked = conn.lock();
        locked.execute("DELETE FROM items", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::RowStream;

    fn repo_with(drafts: usize) -> ItemRepository {
        let db = Database::open_in_memory().expect("open db");
        let repo = ItemRepository::new(db);
        let batch: Vec<ItemDraft> = (0..drafts)
            .map(|i| ItemDraft::new(format!("Title {i}"), format!("message {i}")))
            .collect();
        repo.bulk_insert(&batch).expect("insert");
        repo
    }

    #[test]
    fn test_bulk_insert_and_count() {
        let repo = repo_with(25);
        assert_eq!(repo.count().expect("count"), 25);
    }

    #[test]
    fn test_ids_are_ascending() {
        let repo = repo_with(5);
        let mut stream = repo.open_stream(SortOrder::Ascending).expect("stream");
        let ids: Vec<i64> = (0..5)
            .map(|p| stream.row_at(p).expect("row").id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_descending_stream_reverses_order() {
        let repo = repo_with(5);
        let mut asc = repo.open_stream(SortOrder::Ascending).expect("stream");
        let mut desc = repo.open_stream(SortOrder::Descending).expect("stream");
        assert_eq!(asc.len(), 5);
        assert_eq!(desc.len(), 5);
        for p in 0..5 {
            let front = asc.row_at(p).expect("asc row");
            let back = desc.row_at(4 - p).expect("desc row");
            assert_eq!(front.id, back.id);
            assert_eq!(front.title, back.title);
        }
    }

    #[test]
    fn test_stream_len_is_snapshotted_at_open() {
        let repo = repo_with(3);
        let stream = repo.open_stream(SortOrder::Ascending).expect("stream");
        repo.bulk_insert(&[ItemDraft::new("late", "late")])
            .expect("insert");
        assert_eq!(stream.len(), 3);
        assert_eq!(repo.count().expect("count"), 4);
    }

    #[test]
    fn test_clear_all() {
        let repo = repo_with(10);
        repo.clear_all().expect("clear");
        assert_eq!(repo.count().expect("count"), 0);
        let stream = repo.open_stream(SortOrder::Ascending).expect("stream");
        assert!(stream.is_empty());
    }
}
