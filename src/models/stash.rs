//! Stash model
//!
//! The ingredients an organization already has on hand.

use serde::{Deserialize, Serialize};

use super::{IngredientCatalog, IngredientUse};
use crate::error::PlanResult;
use crate::units::IngredientUnit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StashEntry {
    pub ingredient_id: i64,
    pub unit: IngredientUnit,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stash {
    #[serde(default)]
    pub entries: Vec<StashEntry>,
}

impl Stash {
    pub fn new(entries: Vec<StashEntry>) -> Self {
        Self { entries }
    }

    /// Resolve every entry against the catalog
    pub fn ingredient_uses(&self, catalog: &IngredientCatalog) -> PlanResult<Vec<IngredientUse>> {
        self.entries
            .iter()
            .map(|entry| {
                let ingredient = catalog.get(entry.ingredient_id)?.clone();
                Ok(IngredientUse::new(ingredient, entry.unit, entry.amount))
            })
            .collect()
    }
}
