//! Position-free matching of a material pool against a shapeless recipe.
//!
//! Consumption is greedy: each entry takes the first thing it can, in
//! declaration order, and nothing is ever put back. A pool that only works
//! under a different assignment of overlapping alternative sets does not
//! match.

use crate::domain::{
    entities::recipe::ShapelessRecipe,
    value_objects::{AlternativeSet, Ingredient, MaterialId},
};

/// Multiset of materials taken off a crafting grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialPool {
    items: Vec<MaterialId>,
}

impl MaterialPool {
    pub fn new(items: Vec<MaterialId>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove one instance of `material`. Returns whether one was present.
    pub fn take(&mut self, material: &MaterialId) -> bool {
        match self.items.iter().position(|m| m == material) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove one instance of the first member of `set` that is present.
    pub fn take_any(&mut self, set: &AlternativeSet) -> bool {
        set.members().iter().any(|member| self.take(member))
    }
}

impl FromIterator<MaterialId> for MaterialPool {
    fn from_iter<I: IntoIterator<Item = MaterialId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Match `pool` against `recipe`, consuming from it.
///
/// Succeeds iff every required entry is satisfied and the pool ends up
/// empty. Optional entries are only looked at when something is left over
/// after the required pass; a bare optional material may be missing, but an
/// optional alternative set that is reached must find a member.
pub fn match_shapeless(pool: &mut MaterialPool, recipe: &ShapelessRecipe) -> bool {
    for entry in &recipe.required {
        let satisfied = match entry {
            Ingredient::Material(m) => pool.take(m),
            Ingredient::AnyOf(set) => pool.take_any(set),
        };
        if !satisfied {
            return false;
        }
    }

    if pool.is_empty() {
        return true;
    }

    for entry in &recipe.optional {
        match entry {
            Ingredient::Material(m) => {
                pool.take(m);
            }
            Ingredient::AnyOf(set) => {
                if !pool.take_any(set) {
                    return false;
                }
            }
        }
    }

    pool.is_empty()
}
