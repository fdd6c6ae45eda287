//! Matchers and the catalog resolver.
//!
//! Everything here is a pure function of its inputs: no I/O, no locking,
//! no mutation of the catalog.

pub mod resolver;
pub mod shaped;
pub mod shapeless;

pub use resolver::{RecipeResolver, craft, variant_matches};
pub use shaped::match_shaped;
pub use shapeless::{MaterialPool, match_shapeless};
