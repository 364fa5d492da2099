//! List Core
//!
//! Lazy loading and pagination between a database result stream and a
//! display surface.

pub mod adapter;
pub mod lazy_list;
pub mod paginated;
pub mod stream;

pub use adapter::PaginatedAdapter;
pub use lazy_list::{Converter, LazyIter, LazyList};
pub use paginated::PaginatedList;
pub use stream::{RowStream, VecRowStream};
