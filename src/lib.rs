//! Pagelist Library
//!
//! This crate provides the logic for the pagelist demo client: a locally
//! cached, paginated list backed by an embedded SQLite database. The list
//! core lives in [`list`], the persistence layer and background seeding in
//! [`services`].

pub mod constants;
pub mod domain;
pub mod error;
pub mod list;
pub mod services;
pub mod utils;
