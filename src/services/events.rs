//! Service Events
//!
//! Events emitted by the service layer to be consumed by the display
//! layer, multiplexed over a crossbeam channel.

use std::sync::Arc;

/// Progress of a background population run
#[derive(Clone, Debug)]
pub enum SeedEvent {
    /// Population started; the caller shows a busy state
    Started,
    /// Population committed; the caller refreshes its adapter
    Finished {
        /// Number of records inserted
        inserted: usize,
    },
    /// Population failed and was rolled back; the caller surfaces a notice
    Failed {
        /// Human-readable failure description
        message: Arc<str>,
    },
}
