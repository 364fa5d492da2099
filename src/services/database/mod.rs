//! Database Service
//!
//! SQLite-backed persistence for list records, behind the [`DataSource`]
//! capability trait so the rest of the crate never touches SQL directly.

pub mod connection;
pub mod repository;
pub mod stream;

pub use connection::Database;
pub use repository::ItemRepository;
pub use stream::{RawItemRow, SqliteRowStream};

use crate::error::Result;
use crate::list::RowStream;

/// Sort direction over the monotonic id column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest record first
    #[default]
    Ascending,
    /// Newest record first
    Descending,
}

impl SortOrder {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub(crate) fn sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Capability surface of the persistence layer
///
/// Generic over the draft type `D` so data sources for other record types
/// can share the same contract. Reading goes through a [`RowStream`] whose
/// count is fixed at open time; `bulk_insert` is all-or-nothing.
pub trait DataSource<D> {
    type Stream: RowStream;

    /// Open a counted stream over all records in `order`
    fn open_stream(&self, order: SortOrder) -> Result<Self::Stream>;

    /// Atomically persist all drafts, assigning ascending ids
    ///
    /// Either every draft is persisted or none is; concurrent readers
    /// never observe a partial batch.
    fn bulk_insert(&self, drafts: &[D]) -> Result<usize>;

    /// Remove all persisted records
    fn clear_all(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::item::{Item, ItemDraft};
    use crate::list::{Converter, PaginatedAdapter};

    fn seeded_repo(amount: usize) -> ItemRepository {
        let repo = ItemRepository::new(Database::open_in_memory().expect("open db"));
        let drafts: Vec<ItemDraft> = (0..amount)
            .map(|i| ItemDraft::new(format!("Title {i}"), format!("message {i}")))
            .collect();
        repo.bulk_insert(&drafts).expect("insert");
        repo
    }

    fn item_converter() -> Converter<RawItemRow, Item> {
        Arc::new(|row: &RawItemRow| Item::new(row.id, row.title.clone(), row.message.clone()))
    }

    #[test]
    fn test_adapter_over_sqlite_stream() {
        let repo = seeded_repo(250);
        let stream = repo.open_stream(SortOrder::Ascending).expect("stream");
        let mut adapter =
            PaginatedAdapter::new(stream, item_converter(), 100).expect("adapter");

        assert_eq!(adapter.pages().full_list_size(), 250);
        assert_eq!(adapter.pages().page_count(), 3);

        let first = adapter.bind(0).expect("bind").expect("record");
        assert_eq!(first.title, "Title 0");

        adapter.paginate(true);
        adapter.paginate(true);
        assert_eq!(adapter.count(), 50);
        let last = adapter.bind(49).expect("bind").expect("record");
        assert_eq!(last.title, "Title 249");
        assert_eq!(adapter.bind(50).expect("bind"), None);
    }

    #[test]
    fn test_refresh_with_toggled_order() {
        let repo = seeded_repo(10);
        let stream = repo.open_stream(SortOrder::Ascending).expect("stream");
        let mut adapter = PaginatedAdapter::new(stream, item_converter(), 4).expect("adapter");
        adapter.paginate(true);
        assert_eq!(adapter.pages().current_page(), 1);

        let toggled = SortOrder::Ascending.toggled();
        assert_eq!(toggled, SortOrder::Descending);
        let stream = repo.open_stream(toggled).expect("stream");
        adapter.refresh(stream).expect("refresh");

        assert_eq!(adapter.pages().current_page(), 0);
        let first = adapter.bind(0).expect("bind").expect("record");
        assert_eq!(first.title, "Title 9");
    }
}
