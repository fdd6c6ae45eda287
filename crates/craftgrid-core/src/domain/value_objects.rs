//! Domain value objects: MaterialId, AlternativeSet, Ingredient, Slot.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. A
//! recipe ingredient is either one concrete material or a set of
//! interchangeable ones; that choice is an explicit enum so every matcher
//! branch is checked by the compiler.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag shared by every item slot; never names a material.
pub const GENERIC_ITEM_TAG: &str = "item";

// ── MaterialId ───────────────────────────────────────────────────────────────

/// Opaque identifier for an ingredient type (`"stick"`, `"oak_planks"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaterialId(String);

impl MaterialId {
    /// Create a material id.
    ///
    /// # Panics
    /// Panics if `id` is empty or blank (use `FromStr` for fallible parsing).
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.trim().is_empty(), "MaterialId cannot be empty");
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MaterialId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyMaterialId);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl TryFrom<String> for MaterialId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MaterialId> for String {
    fn from(id: MaterialId) -> Self {
        id.0
    }
}

impl From<&str> for MaterialId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for MaterialId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── AlternativeSet ───────────────────────────────────────────────────────────

/// "Any one of these materials satisfies this slot."
///
/// Members keep their declared order with duplicates dropped. Matching is by
/// membership, but when a shapeless requirement consumes from a pool the
/// first present member in declared order is the one taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<MaterialId>", into = "Vec<MaterialId>")]
pub struct AlternativeSet(Vec<MaterialId>);

impl AlternativeSet {
    /// Build a set from its members.
    pub fn new<I, M>(members: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = M>,
        M: Into<MaterialId>,
    {
        let mut unique: Vec<MaterialId> = Vec::new();
        for member in members {
            let member = member.into();
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        if unique.is_empty() {
            return Err(DomainError::EmptyAlternativeSet);
        }
        Ok(Self(unique))
    }

    /// A set with exactly one member.
    pub fn single(material: impl Into<MaterialId>) -> Self {
        Self(vec![material.into()])
    }

    pub fn contains(&self, material: &MaterialId) -> bool {
        self.0.contains(material)
    }

    pub fn members(&self) -> &[MaterialId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<MaterialId>> for AlternativeSet {
    type Error = DomainError;

    fn try_from(members: Vec<MaterialId>) -> Result<Self, Self::Error> {
        Self::new(members)
    }
}

impl From<AlternativeSet> for Vec<MaterialId> {
    fn from(set: AlternativeSet) -> Self {
        set.0
    }
}

impl From<MaterialId> for AlternativeSet {
    fn from(material: MaterialId) -> Self {
        Self::single(material)
    }
}

impl fmt::Display for AlternativeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(MaterialId::as_str).collect();
        write!(f, "{}", names.join("|"))
    }
}

// ── Ingredient ───────────────────────────────────────────────────────────────

/// One entry of a recipe: a concrete material or a set of alternatives.
///
/// Serialized untagged, matching the catalog wire form: a bare string is a
/// material, an array of strings is an alternative set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    Material(MaterialId),
    AnyOf(AlternativeSet),
}

impl Ingredient {
    pub fn material(id: impl Into<MaterialId>) -> Self {
        Self::Material(id.into())
    }

    pub fn any_of<I, M>(members: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = M>,
        M: Into<MaterialId>,
    {
        AlternativeSet::new(members).map(Self::AnyOf)
    }

    /// Whether `material` satisfies this ingredient.
    pub fn accepts(&self, material: &MaterialId) -> bool {
        match self {
            Self::Material(m) => m == material,
            Self::AnyOf(set) => set.contains(material),
        }
    }

    /// Every material this ingredient mentions.
    pub fn materials(&self) -> &[MaterialId] {
        match self {
            Self::Material(m) => std::slice::from_ref(m),
            Self::AnyOf(set) => set.members(),
        }
    }

    /// View as an alternative set; a bare material is a singleton.
    pub fn to_alternatives(&self) -> AlternativeSet {
        match self {
            Self::Material(m) => AlternativeSet::single(m.clone()),
            Self::AnyOf(set) => set.clone(),
        }
    }
}

impl From<Ingredient> for AlternativeSet {
    fn from(ingredient: Ingredient) -> Self {
        match ingredient {
            Ingredient::Material(m) => Self::single(m),
            Ingredient::AnyOf(set) => set,
        }
    }
}

impl From<MaterialId> for Ingredient {
    fn from(material: MaterialId) -> Self {
        Self::Material(material)
    }
}

impl From<&str> for Ingredient {
    fn from(s: &str) -> Self {
        Self::Material(MaterialId::new(s))
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Material(m) => write!(f, "{m}"),
            Self::AnyOf(set) => write!(f, "[{set}]"),
        }
    }
}

// ── Slot ─────────────────────────────────────────────────────────────────────

/// Raw contents of one crafting-table slot as the host UI reports it: a list
/// of classification tags, one of which may be the generic item tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    tags: Vec<String>,
}

impl Slot {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The material this slot holds: its first non-generic tag.
    pub fn material(&self) -> Option<MaterialId> {
        self.tags
            .iter()
            .map(|tag| tag.trim())
            .find(|tag| !tag.is_empty() && *tag != GENERIC_ITEM_TAG)
            .map(|tag| MaterialId(tag.to_owned()))
    }
}
