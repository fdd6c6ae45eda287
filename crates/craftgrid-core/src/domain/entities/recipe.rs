// ============================================================================
// Recipe entities: templates, variants, and the ordered catalog
// ============================================================================

use serde::Serialize;

use crate::domain::{
    entities::grid::Grid,
    error::DomainError,
    value_objects::{AlternativeSet, Ingredient, MaterialId},
};

// ============================================================================
// ShapedTemplate
// ============================================================================

/// A position-sensitive recipe pattern.
///
/// Cells hold an [`AlternativeSet`] or nothing. Templates are stored as
/// authored; trimming happens on a copy at match time so the catalog is
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapedTemplate {
    grid: Grid<AlternativeSet>,
}

impl ShapedTemplate {
    pub fn new(grid: Grid<AlternativeSet>) -> Self {
        Self { grid }
    }

    /// Build from ingredient rows; bare materials become singleton sets.
    pub fn from_ingredients(rows: Vec<Vec<Option<Ingredient>>>) -> Result<Self, DomainError> {
        Grid::new(rows).map(|grid| Self::new(grid.map(AlternativeSet::from)))
    }

    pub fn grid(&self) -> &Grid<AlternativeSet> {
        &self.grid
    }

    /// The trimmed pattern that crafting grids are compared against.
    pub fn normalized(&self) -> Grid<AlternativeSet> {
        self.grid.clone().normalized()
    }

    /// Whether the trimmed pattern fits a `size` x `size` table.
    pub fn fits(&self, size: usize) -> bool {
        self.normalized().fits(size)
    }

    pub fn materials(&self) -> impl Iterator<Item = &MaterialId> {
        self.grid.occupied().flat_map(|set| set.members())
    }
}

// ============================================================================
// ShapelessRecipe
// ============================================================================

/// A position-free recipe: `required` entries must all be present,
/// `optional` entries may soak up what is left.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ShapelessRecipe {
    pub required: Vec<Ingredient>,
    pub optional: Vec<Ingredient>,
}

impl ShapelessRecipe {
    pub fn new(required: Vec<Ingredient>) -> Self {
        Self {
            required,
            optional: Vec::new(),
        }
    }

    pub fn with_optional(mut self, optional: Vec<Ingredient>) -> Self {
        self.optional = optional;
        self
    }

    pub fn materials(&self) -> impl Iterator<Item = &MaterialId> {
        self.required
            .iter()
            .chain(&self.optional)
            .flat_map(Ingredient::materials)
    }

    /// Lay the required entries out row-major, `table_size` per row, for
    /// display. Optional entries are not shown.
    pub fn to_matrix(&self, table_size: usize) -> Grid<AlternativeSet> {
        let width = table_size.max(1);
        let mut rows: Vec<Vec<Option<AlternativeSet>>> = self
            .required
            .chunks(width)
            .map(|chunk| chunk.iter().map(|i| Some(i.to_alternatives())).collect())
            .collect();
        // pad the last row so the grid stays rectangular
        if rows.len() > 1 {
            if let Some(last) = rows.last_mut() {
                last.resize(width, None);
            }
        }
        Grid::new(rows).unwrap_or_else(|_| Grid::empty(0, 0))
    }

    /// Whether the displayed layout fits a `size` x `size` table.
    pub fn fits(&self, size: usize) -> bool {
        size > 0 && self.required.len() <= size * size
    }
}

// ============================================================================
// RecipeVariant
// ============================================================================

/// Which matcher a variant is dispatched to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecipeKind {
    Shaped(ShapedTemplate),
    Shapeless(ShapelessRecipe),
}

/// One way of crafting a group's output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeVariant {
    pub id: String,
    pub name: String,
    pub kind: RecipeKind,
}

impl RecipeVariant {
    pub fn shaped(id: impl Into<String>, name: impl Into<String>, template: ShapedTemplate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: RecipeKind::Shaped(template),
        }
    }

    pub fn shapeless(
        id: impl Into<String>,
        name: impl Into<String>,
        recipe: ShapelessRecipe,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: RecipeKind::Shapeless(recipe),
        }
    }

    pub fn is_shapeless(&self) -> bool {
        matches!(self.kind, RecipeKind::Shapeless(_))
    }

    /// Every material mentioned anywhere in the recipe.
    pub fn materials(&self) -> Box<dyn Iterator<Item = &MaterialId> + '_> {
        match &self.kind {
            RecipeKind::Shaped(t) => Box::new(t.materials()),
            RecipeKind::Shapeless(s) => Box::new(s.materials()),
        }
    }

    /// Grid to show for this recipe on a `table_size` table.
    pub fn display_grid(&self, table_size: usize) -> Grid<AlternativeSet> {
        match &self.kind {
            RecipeKind::Shaped(t) => t.grid().clone(),
            RecipeKind::Shapeless(s) => s.to_matrix(table_size),
        }
    }

    /// Whether this recipe can be laid out on a `size` x `size` table.
    pub fn fits(&self, size: usize) -> bool {
        match &self.kind {
            RecipeKind::Shaped(t) => t.fits(size),
            RecipeKind::Shapeless(s) => s.fits(size),
        }
    }
}

// ============================================================================
// RecipeCollection - the ordered catalog
// ============================================================================

/// All variants that produce one output, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeGroup {
    pub name: String,
    pub variants: Vec<RecipeVariant>,
}

/// Group name → ordered variants, in insertion order.
///
/// Order is part of the contract: when a grid satisfies several variants
/// the earliest one wins, so groups are kept in a `Vec` rather than a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeCollection {
    groups: Vec<RecipeGroup>,
}

impl RecipeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a whole group. Group names are unique.
    pub fn insert_group(
        &mut self,
        name: impl Into<String>,
        variants: Vec<RecipeVariant>,
    ) -> Result<(), DomainError> {
        let name = name.into();
        if self.group(&name).is_some() {
            return Err(DomainError::DuplicateGroup { group: name });
        }
        self.groups.push(RecipeGroup { name, variants });
        Ok(())
    }

    /// Append a variant to `group`, creating the group at the end if new.
    pub fn push(&mut self, group: impl Into<String>, variant: RecipeVariant) {
        let group = group.into();
        match self.groups.iter_mut().find(|g| g.name == group) {
            Some(existing) => existing.variants.push(variant),
            None => self.groups.push(RecipeGroup {
                name: group,
                variants: vec![variant],
            }),
        }
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, group: impl Into<String>, variant: RecipeVariant) -> Self {
        self.push(group, variant);
        self
    }

    /// Append every group of `other`, failing on the first name clash.
    pub fn extend(&mut self, other: RecipeCollection) -> Result<(), DomainError> {
        for group in other.groups {
            self.insert_group(group.name, group.variants)?;
        }
        Ok(())
    }

    pub fn group(&self, name: &str) -> Option<&RecipeGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn groups(&self) -> &[RecipeGroup] {
        &self.groups
    }

    /// `(group, variant)` pairs in catalog order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &RecipeVariant)> {
        self.groups
            .iter()
            .flat_map(|g| g.variants.iter().map(move |v| (g.name.as_str(), v)))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn variant_count(&self) -> usize {
        self.groups.iter().map(|g| g.variants.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.variant_count() == 0
    }
}

// ============================================================================
// MatchResult
// ============================================================================

/// The recipe a grid resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchResult {
    pub group: String,
    pub id: String,
}

impl MatchResult {
    pub fn new(group: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            id: id.into(),
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.group, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stick() -> Ingredient {
        Ingredient::material("stick")
    }

    #[test]
    fn template_from_ingredients_turns_materials_into_sets() {
        let template = ShapedTemplate::from_ingredients(vec![vec![
            Some(stick()),
            None,
            Some(Ingredient::any_of(["coal", "charcoal"]).unwrap()),
        ]])
        .unwrap();

        assert_eq!(
            template.grid().get(0, 0),
            Some(&AlternativeSet::single("stick"))
        );
        assert_eq!(template.grid().get(0, 2).map(AlternativeSet::len), Some(2));
    }

    #[test]
    fn template_normalization_leaves_original_untouched() {
        let template = ShapedTemplate::from_ingredients(vec![
            vec![None, None, None],
            vec![None, Some(stick()), None],
            vec![None, Some(stick()), None],
        ])
        .unwrap();

        assert_eq!(template.normalized().dimensions(), (2, 1));
        assert_eq!(template.grid().dimensions(), (3, 3));
    }

    #[test]
    fn shapeless_matrix_wraps_rows_and_pads() {
        let recipe = ShapelessRecipe::new(vec![stick(), stick(), stick(), stick()]);
        let matrix = recipe.to_matrix(3);

        assert_eq!(matrix.dimensions(), (2, 3));
        assert!(matrix.get(1, 0).is_some());
        assert!(matrix.get(1, 1).is_none());
    }

    #[test]
    fn shapeless_matrix_single_row_is_not_padded() {
        let recipe = ShapelessRecipe::new(vec![stick(), stick()]);
        assert_eq!(recipe.to_matrix(3).dimensions(), (1, 2));
    }

    #[test]
    fn shapeless_fit_counts_required_only() {
        let recipe = ShapelessRecipe::new(vec![stick(); 5]).with_optional(vec![stick(); 9]);
        assert!(!recipe.fits(2));
        assert!(recipe.fits(3));
    }

    #[test]
    fn collection_keeps_insertion_order() {
        let catalog = RecipeCollection::new()
            .with("torch", RecipeVariant::shapeless("0", "Torch", ShapelessRecipe::new(vec![stick()])))
            .with("bow", RecipeVariant::shapeless("0", "Bow", ShapelessRecipe::new(vec![stick()])))
            .with("torch", RecipeVariant::shapeless("1", "Torch", ShapelessRecipe::new(vec![stick()])));

        let order: Vec<(&str, &str)> = catalog
            .variants()
            .map(|(group, v)| (group, v.id.as_str()))
            .collect();
        assert_eq!(order, vec![("torch", "0"), ("torch", "1"), ("bow", "0")]);
        assert_eq!(catalog.group_count(), 2);
        assert_eq!(catalog.variant_count(), 3);
    }

    #[test]
    fn collection_rejects_duplicate_group() {
        let mut catalog = RecipeCollection::new();
        catalog.insert_group("torch", vec![]).unwrap();
        assert_eq!(
            catalog.insert_group("torch", vec![]),
            Err(DomainError::DuplicateGroup {
                group: "torch".into()
            })
        );
    }

    #[test]
    fn variant_lists_all_materials() {
        let variant = RecipeVariant::shapeless(
            "0",
            "Dye",
            ShapelessRecipe::new(vec![Ingredient::material("flower")])
                .with_optional(vec![Ingredient::any_of(["bone_meal", "ink"]).unwrap()]),
        );
        let names: Vec<&str> = variant.materials().map(MaterialId::as_str).collect();
        assert_eq!(names, vec!["flower", "bone_meal", "ink"]);
    }
}
