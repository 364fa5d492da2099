//! Lazy List
//!
//! A fixed-size, indexable view over a row stream. Each record is fetched
//! from the stream on first access, converted to the domain type and
//! cached; later accesses never touch the stream again.

use std::sync::Arc;

use crate::error::{Error, Result};

use super::stream::RowStream;

/// Conversion from a raw stream row to a domain record
pub type Converter<R, T> = Arc<dyn Fn(&R) -> T + Send + Sync>;

/// Lazily materialized, cached list backed by a row stream
///
/// The size is fixed at construction time and equals the stream row count.
/// The stream is released as soon as it can no longer be needed: when the
/// list is empty, when every index has been loaded, or on [`close`].
///
/// [`close`]: LazyList::close
pub struct LazyList<S: RowStream, T> {
    stream: Option<S>,
    convert: Converter<S::Row, T>,
    cache: Vec<Option<T>>,
    loaded: usize,
    len: usize,
    closed: bool,
}

impl<S: RowStream, T: Clone> LazyList<S, T> {
    /// Create a new LazyList over `stream`
    pub fn new(stream: S, convert: Converter<S::Row, T>) -> Self {
        let len = stream.len();
        // An empty stream can never serve a row, release it right away.
        let stream = if len == 0 { None } else { Some(stream) };
        Self {
            stream,
            convert,
            cache: std::iter::repeat_with(|| None).take(len).collect(),
            loaded: 0,
            len,
            closed: false,
        }
    }

    /// Number of records in the list, fixed at construction
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of records fetched from the stream so far
    pub fn loaded_count(&self) -> usize {
        self.loaded
    }

    /// Check if the list was closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Get the record at `index`, fetching it from the stream on first access
    ///
    /// Fails with [`Error::OutOfRange`] outside `[0, len)` and with
    /// [`Error::ListClosed`] after [`close`](Self::close).
    pub fn get(&mut self, index: usize) -> Result<T> {
        if self.closed {
            return Err(Error::ListClosed);
        }
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        if let Some(item) = &self.cache[index] {
            return Ok(item.clone());
        }

        let stream = self.stream.as_mut().ok_or(Error::ListClosed)?;
        let row = stream.row_at(index)?;
        let item = (self.convert)(&row);
        self.cache[index] = Some(item.clone());
        self.loaded += 1;
        if self.loaded == self.len {
            // Every record is cached, the stream is no longer needed.
            self.stream = None;
        }
        Ok(item)
    }

    /// Like get, but never fetches: returns the cached record only
    pub fn peek(&self, index: usize) -> Option<&T> {
        self.cache.get(index).and_then(|slot| slot.as_ref())
    }

    /// Iterate over all records in order, loading them as needed
    ///
    /// Restartable: a fresh iterator re-scans from the beginning, serving
    /// already-visited indices from the cache.
    pub fn iter(&mut self) -> LazyIter<'_, S, T> {
        LazyIter {
            list: self,
            index: 0,
        }
    }

    /// Release the underlying stream
    ///
    /// Safe to call more than once; any `get` after the first close fails
    /// with [`Error::ListClosed`].
    pub fn close(&mut self) {
        self.stream = None;
        self.closed = true;
    }
}

/// Forward iterator over a [`LazyList`]
pub struct LazyIter<'a, S: RowStream, T> {
    list: &'a mut LazyList<S, T>,
    index: usize,
}

impl<S: RowStream, T: Clone> Iterator for LazyIter<'_, S, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.list.len() {
            return None;
        }
        let item = self.list.get(self.index);
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Row stream that counts how often each fetch hits the backing data
    struct CountingStream {
        rows: Vec<i64>,
        fetches: Arc<AtomicUsize>,
    }

    impl RowStream for CountingStream {
        type Row = i64;

        fn len(&self) -> usize {
            self.rows.len()
        }

        fn row_at(&mut self, position: usize) -> crate::error::Result<i64> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.rows.get(position).copied().ok_or(Error::OutOfRange {
                index: position,
                len: self.rows.len(),
            })
        }
    }

    fn counting_list(rows: Vec<i64>) -> (LazyList<CountingStream, i64>, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let stream = CountingStream {
            rows,
            fetches: fetches.clone(),
        };
        let convert: Converter<i64, i64> = Arc::new(|row: &i64| *row);
        let list = LazyList::new(stream, convert);
        (list, fetches)
    }

    #[test]
    fn test_get_fetches_once_per_index() {
        let (mut list, fetches) = counting_list(vec![10, 20, 30]);

        assert_eq!(list.get(1).expect("first access"), 20);
        assert_eq!(list.get(1).expect("second access"), 20);
        assert_eq!(list.get(1).expect("third access"), 20);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(list.loaded_count(), 1);
    }

    #[test]
    fn test_get_out_of_range() {
        let (mut list, _) = counting_list(vec![10, 20]);
        assert!(matches!(
            list.get(2),
            Err(Error::OutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_get_after_close() {
        let (mut list, _) = counting_list(vec![10, 20]);
        assert_eq!(list.get(0).expect("open access"), 10);
        list.close();
        list.close(); // second close is a no-op
        assert!(list.is_closed());
        assert!(matches!(list.get(0), Err(Error::ListClosed)));
    }

    #[test]
    fn test_stream_released_when_fully_loaded() {
        let (mut list, fetches) = counting_list(vec![1, 2, 3]);
        for i in 0..3 {
            list.get(i).expect("load");
        }
        assert!(list.stream.is_none());
        assert!(!list.is_closed());
        // Fully cached list keeps serving without a stream.
        assert_eq!(list.get(2).expect("cached"), 3);
        assert_eq!(fetches.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_empty_list() {
        let (mut list, _) = counting_list(Vec::new());
        assert!(list.is_empty());
        assert!(list.stream.is_none());
        assert!(matches!(
            list.get(0),
            Err(Error::OutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_peek_does_not_load() {
        let (mut list, fetches) = counting_list(vec![10, 20]);
        assert!(list.peek(0).is_none());
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
        list.get(0).expect("load");
        assert_eq!(list.peek(0), Some(&10));
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_iter_is_restartable_and_reuses_cache() {
        let (mut list, fetches) = counting_list(vec![1, 2, 3, 4]);

        let first: Vec<i64> = list.iter().collect::<Result<_, _>>().expect("first pass");
        assert_eq!(first, vec![1, 2, 3, 4]);
        assert_eq!(fetches.load(Ordering::SeqCst), 4);

        let second: Vec<i64> = list.iter().collect::<Result<_, _>>().expect("second pass");
        assert_eq!(second, vec![1, 2, 3, 4]);
        assert_eq!(fetches.load(Ordering::SeqCst), 4);
    }
}
