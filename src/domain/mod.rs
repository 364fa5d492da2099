//! Domain - Pure Data Structures
//!
//! These types don't depend on the service layer and represent the
//! business domain.

pub mod config;
pub mod item;
