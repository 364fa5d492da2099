//! Services
//!
//! Persistence layer and background work. Everything the list core needs
//! from the outside world lives here.

pub mod database;
pub mod events;
pub mod runtime;
pub mod seeder;

pub use database::{DataSource, Database, ItemRepository, SortOrder, SqliteRowStream};
pub use events::SeedEvent;
pub use seeder::Seeder;
