//! Row Stream
//!
//! Abstraction over a positionable, counted source of raw rows, so the
//! list core works with both SQLite results and in-memory data.

use crate::error::{Error, Result};

/// A positionable, counted source of raw rows
///
/// The row count is fixed at open time. Any position in `[0, len)` must be
/// readable for as long as the stream is open.
pub trait RowStream: Send {
    type Row;

    /// Total number of rows, fixed at open time
    fn len(&self) -> usize;

    /// Check if the stream has no rows
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position the stream and read the raw row at `position`
    fn row_at(&mut self, position: usize) -> Result<Self::Row>;
}

/// Simple in-memory row stream
pub struct VecRowStream<R> {
    rows: Vec<R>,
}

impl<R: Clone + Send> VecRowStream<R> {
    /// Create a new VecRowStream
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }
}

impl<R: Clone + Send> RowStream for VecRowStream<R> {
    type Row = R;

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn row_at(&mut self, position: usize) -> Result<R> {
        self.rows.get(position).cloned().ok_or(Error::OutOfRange {
            index: position,
            len: self.rows.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_row_stream() {
        let mut stream = VecRowStream::new(vec![10, 20, 30]);
        assert_eq!(stream.len(), 3);
        assert!(!stream.is_empty());
        assert_eq!(stream.row_at(1).expect("row"), 20);
        assert!(matches!(
            stream.row_at(3),
            Err(Error::OutOfRange { index: 3, len: 3 })
        ));
    }
}
