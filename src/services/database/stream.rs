//! SQLite Row Stream
//!
//! Positionable, counted stream over the items table. The row count is
//! snapshotted when the stream is opened; each `row_at` call reads exactly
//! one row at the requested offset.

use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{Connection, params};

use crate::error::Result;
use crate::list::RowStream;

use super::SortOrder;

/// Raw row of the items table before conversion to a domain record
#[derive(Clone, Debug)]
pub struct RawItemRow {
    pub id: i64,
    pub title: String,
    pub message: String,
}

/// Row stream over `SELECT ... FROM items ORDER BY id`
pub struct SqliteRowStream {
    conn: Arc<Mutex<Connection>>,
    order: SortOrder,
    len: usize,
}

impl SqliteRowStream {
    pub(crate) fn open(conn: Arc<Mutex<Connection>>, order: SortOrder) -> Result<Self> {
        let len = {
            let locked = conn.lock();
            locked.query_row("SELECT COUNT(*) FROM items", [], |row| row.get::<_, i64>(0))? as usize
        };
        tracing::debug!("Opened item stream: {len} rows, {order:?}");
        Ok(Self { conn, order, len })
    }
}

impl RowStream for SqliteRowStream {
    type Row = RawItemRow;

    fn len(&self) -> usize {
        self.len
    }

    fn row_at(&mut self, position: usize) -> Result<RawItemRow> {
        let sql = format!(
            "SELECT id, title, message FROM items ORDER BY id {} LIMIT 1 OFFSET ?1",
            self.order.sql()
        );
        let conn = self.conn.lock();
        let row = conn.query_row(&sql, params![position as i64], |row| {
            Ok(RawItemRow {
                id: row.get(0)?,
                title: row.get(1)?,
                message: row.get(2)?,
            })
        })?;
        Ok(row)
    }
}
