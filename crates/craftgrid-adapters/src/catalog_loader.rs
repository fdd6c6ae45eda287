//! Filesystem-based recipe catalog loader.
//!
//! Reads recipe catalogs written as JSON, either a single file or a
//! directory of `*.json` files, and converts them into a domain
//! [`RecipeCollection`].
//!
//! # Directory layout expected
//!
//! ```text
//! recipes/
//! ├── 00-basics.json      ← loaded first
//! ├── 10-tools.json
//! └── 20-food.json        ← loaded last
//! ```
//!
//! Files are read in file-name order and their groups appended in that
//! order, so an earlier file wins ties at resolution time.
//!
//! # Catalog format
//!
//! ```json
//! {
//!   "torch": [
//!     { "id": "0", "name": "Torch", "shapeless": false,
//!       "recipe": [[null, ["coal", "charcoal"], null], [null, "stick", null]] }
//!   ],
//!   "dye": [
//!     { "id": 0, "name": "Dye", "shapeless": true,
//!       "recipe": { "required": ["flower"], "optional": [["bone_meal"]] } }
//!   ]
//! }
//! ```
//!
//! Group order and variant order are the document order. A shaped cell is
//! `null`, a material, or an array of alternative materials. Ids may be
//! strings or non-negative integers.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use craftgrid_core::{
    application::{ApplicationError, ports::CatalogSource},
    domain::{
        DomainError, Ingredient, RecipeCollection, RecipeVariant, ShapedTemplate, ShapelessRecipe,
    },
    error::{CraftError, CraftResult},
};

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a catalog document was rejected.
#[derive(Debug, Error)]
pub enum CatalogParseError {
    /// Not JSON, or not a map of groups to variant lists.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A variant's `recipe` body does not fit its kind.
    #[error("recipe '{group}/{id}': {reason}")]
    Recipe {
        group: String,
        id: String,
        reason: String,
    },

    /// The catalog breaks a domain rule (duplicate group, ragged template).
    #[error(transparent)]
    Domain(#[from] DomainError),
}

// ── Manifest types ────────────────────────────────────────────────────────────

/// A whole catalog document: group name → variants, in document order.
#[derive(Debug, Clone, Default)]
pub struct CatalogManifest {
    pub groups: Vec<(String, Vec<VariantManifest>)>,
}

impl<'de> Deserialize<'de> for CatalogManifest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedGroups;

        impl<'de> Visitor<'de> for OrderedGroups {
            type Value = CatalogManifest;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of recipe group names to variant lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<VariantManifest>>()? {
                    groups.push(entry);
                }
                Ok(CatalogManifest { groups })
            }
        }

        deserializer.deserialize_map(OrderedGroups)
    }
}

/// One variant entry of a group.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantManifest {
    pub id: VariantId,
    /// Display name; defaults to the group name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub shapeless: bool,
    /// Decoded according to `shapeless`.
    pub recipe: serde_json::Value,
}

/// Variant ids appear both as strings and as bare numbers in the wild.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VariantId {
    Text(String),
    Number(u64),
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// `recipe` body of a shapeless variant.
#[derive(Debug, Clone, Deserialize)]
struct ShapelessManifest {
    required: Vec<Ingredient>,
    #[serde(default)]
    optional: Option<Vec<Ingredient>>,
}

impl CatalogManifest {
    /// Convert the manifest into a domain catalog.
    pub fn into_collection(self) -> Result<RecipeCollection, CatalogParseError> {
        let mut catalog = RecipeCollection::new();

        for (group, entries) in self.groups {
            let variants = entries
                .into_iter()
                .map(|entry| entry.into_variant(&group))
                .collect::<Result<Vec<_>, _>>()?;

            catalog.insert_group(group, variants)?;
        }

        Ok(catalog)
    }
}

impl VariantManifest {
    fn into_variant(self, group: &str) -> Result<RecipeVariant, CatalogParseError> {
        let id = self.id.to_string();
        let name = self.name.unwrap_or_else(|| group.to_owned());
        let context = |e: &dyn fmt::Display| CatalogParseError::Recipe {
            group: group.to_owned(),
            id: id.clone(),
            reason: e.to_string(),
        };

        if self.shapeless {
            let body: ShapelessManifest =
                serde_json::from_value(self.recipe).map_err(|e| context(&e))?;
            let recipe =
                ShapelessRecipe::new(body.required).with_optional(body.optional.unwrap_or_default());
            Ok(RecipeVariant::shapeless(id, name, recipe))
        } else {
            let rows: Vec<Vec<Option<Ingredient>>> =
                serde_json::from_value(self.recipe).map_err(|e| context(&e))?;
            let template = ShapedTemplate::from_ingredients(rows).map_err(|e| context(&e))?;
            Ok(RecipeVariant::shaped(id, name, template))
        }
    }
}

/// Parse one catalog document.
pub fn parse_catalog(raw: &str) -> Result<RecipeCollection, CatalogParseError> {
    let manifest: CatalogManifest = serde_json::from_str(raw)?;
    manifest.into_collection()
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`RecipeCollection`] from a JSON file or a directory of them.
///
/// # Example
///
/// ```no_run
/// use craftgrid_adapters::JsonCatalogLoader;
///
/// let catalog = JsonCatalogLoader::new("./recipes").load_all()?;
/// println!("Loaded {} recipes", catalog.variant_count());
/// # Ok::<(), craftgrid_core::error::CraftError>(())
/// ```
pub struct JsonCatalogLoader {
    path: PathBuf,
}

impl JsonCatalogLoader {
    /// Create a loader pointed at `path`, a file or a directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog.
    ///
    /// # Errors
    ///
    /// - `path` does not exist or cannot be read.
    /// - `path` is a file that is not a valid catalog.
    /// - Two files in a directory define the same group.
    ///
    /// Malformed files inside a directory are **skipped with a `WARN` log**
    /// rather than failing the whole batch.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_all(&self) -> CraftResult<RecipeCollection> {
        if self.path.is_dir() {
            self.load_dir(&self.path)
        } else if self.path.is_file() {
            self.load_file(&self.path)
        } else {
            Err(self.load_error(&self.path, "path not found"))
        }
    }

    fn load_file(&self, path: &Path) -> CraftResult<RecipeCollection> {
        let raw = fs::read_to_string(path)
            .map_err(|e| self.load_error(path, format!("failed to read file: {e}")))?;

        let catalog = parse_catalog(&raw).map_err(|e| self.load_error(path, e.to_string()))?;
        debug!(
            file = %path.display(),
            groups = catalog.group_count(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    fn load_dir(&self, dir: &Path) -> CraftResult<RecipeCollection> {
        let mut catalog = RecipeCollection::new();

        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in entries {
            let entry =
                entry.map_err(|e| self.load_error(dir, format!("directory walk error: {e}")))?;
            let path = entry.path();

            let is_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if !entry.file_type().is_file() || !is_json {
                continue;
            }

            match self.load_file(path) {
                Ok(part) => catalog.extend(part)?,
                Err(e) => {
                    // One bad file must not block the others.
                    warn!(
                        file = %path.display(),
                        error = %e,
                        "skipping catalog file due to load error"
                    );
                }
            }
        }

        debug!(groups = catalog.group_count(), "finished loading catalog directory");
        Ok(catalog)
    }

    fn load_error(&self, path: &Path, reason: impl Into<String>) -> CraftError {
        ApplicationError::CatalogLoad {
            source_name: path.display().to_string(),
            reason: reason.into(),
        }
        .into()
    }
}

impl CatalogSource for JsonCatalogLoader {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> CraftResult<RecipeCollection> {
        self.load_all()
    }
}
