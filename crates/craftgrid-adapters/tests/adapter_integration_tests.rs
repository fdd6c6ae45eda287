//! End-to-end tests wiring the adapters into the core services.

use std::{fs, path::Path};

use craftgrid_adapters::{BuiltinCatalog, InMemoryRecipeStore, JsonCatalogLoader, read_grid_file};
use craftgrid_core::{
    application::{CatalogService, CraftingService},
    domain::MatchResult,
};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn grid_file_resolves_against_builtin_catalog() {
    let store = InMemoryRecipeStore::new();
    let catalog = CatalogService::new(Box::new(store.clone()));
    catalog.load_from(&BuiltinCatalog).unwrap();

    let temp = TempDir::new().unwrap();
    let grid_path = write(
        temp.path(),
        "chest.grid",
        "# chest\nplanks planks planks\nplanks _ planks\nplanks planks planks\n",
    );

    let crafting = CraftingService::new(Box::new(store));
    let grid = read_grid_file(&grid_path).unwrap();

    assert_eq!(
        crafting.craft(&grid).unwrap(),
        Some(MatchResult::new("chest", "0"))
    );
}

#[test]
fn user_catalog_replaces_builtin() {
    let store = InMemoryRecipeStore::with_builtin().unwrap();
    let catalog = CatalogService::new(Box::new(store.clone()));

    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "custom.json",
        r#"{ "lantern": [{ "id": "0", "name": "Lantern", "recipe": [["torch"], ["iron_nugget"]] }] }"#,
    );
    let loaded = catalog
        .load_from(&JsonCatalogLoader::new(temp.path()))
        .unwrap();
    assert_eq!(loaded, 1);

    let names: Vec<_> = catalog
        .list(3, true)
        .unwrap()
        .into_iter()
        .map(|info| info.group)
        .collect();
    assert_eq!(names, ["lantern"]);
}

#[test]
fn failed_load_keeps_previous_catalog() {
    let store = InMemoryRecipeStore::with_builtin().unwrap();
    let before = store.len();
    let catalog = CatalogService::new(Box::new(store.clone()));

    let temp = TempDir::new().unwrap();
    let bad = write(temp.path(), "bad.json", "{");

    assert!(catalog.load_from(&JsonCatalogLoader::new(bad)).is_err());
    assert_eq!(store.len(), before);
}
