//! Pagelist - Main Entry Point
//!
//! Demo driver: seeds the database in the background on first launch,
//! then walks a lazily loaded, paginated view of the items table.

use std::sync::Arc;

use anyhow::Result;

use pagelist::domain::config::AppConfig;
use pagelist::domain::item::Item;
use pagelist::list::{Converter, PaginatedAdapter};
use pagelist::services::database::RawItemRow;
use pagelist::services::{
    DataSource, Database, ItemRepository, SeedEvent, Seeder, SortOrder, SqliteRowStream,
};

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting pagelist demo...");

    let config = AppConfig::load();
    if let Err(e) = config.save() {
        tracing::warn!("Could not persist config: {e}");
    }
    let db = match &config.db_path {
        Some(path) => Database::open_path(path)?,
        None => Database::open_in_memory()?,
    };
    let repo = ItemRepository::new(db);
    repo.clear_all()?;

    let order = if config.order_descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    let convert: Converter<RawItemRow, Item> =
        Arc::new(|row: &RawItemRow| Item::new(row.id, row.title.clone(), row.message.clone()));

    let mut adapter = PaginatedAdapter::new(repo.open_stream(order)?, convert, config.page_size)?
        .on_content_changed(|| tracing::debug!("List content changed"));

    if adapter.pages().full_list_size() == 0 {
        // Busy until the seed completes; no pagination interaction before
        // the refresh.
        let (tx, rx) = crossbeam_channel::unbounded();
        let seeder = Seeder::new(tx);
        seeder.spawn(repo.clone(), config.seed_amount);

        loop {
            match rx.recv()? {
                SeedEvent::Started => {
                    tracing::info!("Filling sample database on first launch...");
                }
                SeedEvent::Finished { inserted } => {
                    tracing::info!("Sample database ready: {inserted} items");
                    break;
                }
                SeedEvent::Failed { message } => {
                    tracing::error!("Could not fill sample database: {message}");
                    return Ok(());
                }
            }
        }
        adapter.refresh(repo.open_stream(order)?)?;
    }

    print_page(&mut adapter)?;
    while !adapter.pages().is_on_last_page() {
        adapter.paginate(true);
        print_page(&mut adapter)?;
    }

    // Flip the sort order and show the first page again
    let toggled = order.toggled();
    tracing::info!("Toggling sort order to {toggled:?}");
    adapter.refresh(repo.open_stream(toggled)?)?;
    print_page(&mut adapter)?;

    adapter.close();
    Ok(())
}

/// Print the page indicator line and the first row of the current page
fn print_page(adapter: &mut PaginatedAdapter<SqliteRowStream, Item>) -> Result<()> {
    let pages = adapter.pages();
    if pages.is_pagination_necessary() {
        tracing::info!(
            "Showing items {} - {} of {}",
            pages.current_start_index() + 1,
            pages.current_end_index() + 1,
            pages.full_list_size(),
        );
    }
    match adapter.bind(0)? {
        Some(item) => tracing::info!("  [{}] {}", adapter.item_id(0), item.title),
        None => tracing::info!("  (empty page)"),
    }
    Ok(())
}
