//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod craft;
pub mod init;
pub mod list;
pub mod show;
pub mod validate;

use tracing::debug;

use craftgrid_adapters::{BuiltinCatalog, InMemoryRecipeStore, JsonCatalogLoader};
use craftgrid_core::application::{CatalogService, CatalogSource};

use crate::{cli::CatalogArgs, config::AppConfig, error::CliResult};

/// The catalog named by `--catalog`, then `catalog.path`, falling back to
/// the built-in recipes.
pub fn catalog_source(args: &CatalogArgs, config: &AppConfig) -> Box<dyn CatalogSource> {
    match args.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => Box::new(JsonCatalogLoader::new(path)),
        None => Box::new(BuiltinCatalog),
    }
}

/// Build a store holding the catalog picked by [`catalog_source`].
pub fn load_store(args: &CatalogArgs, config: &AppConfig) -> CliResult<InMemoryRecipeStore> {
    let store = InMemoryRecipeStore::new();
    let service = CatalogService::new(Box::new(store.clone()));
    let count = service.load_from(catalog_source(args, config).as_ref())?;

    debug!(variants = count, "catalog ready");
    Ok(store)
}

/// `--table-size`, then `table.size`.
pub fn table_size(args: &CatalogArgs, config: &AppConfig) -> usize {
    args.table_size
        .map(usize::from)
        .unwrap_or(config.table.size)
}
