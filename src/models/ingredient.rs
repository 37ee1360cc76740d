//! Ingredient model
//!
//! Ingredients as known to the planner, and the catalog used to resolve ids.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::units::IngredientUnit;

/// An ingredient with the unit amounts are normally kept in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub default_unit: IngredientUnit,
}

impl Ingredient {
    pub fn new(id: i64, name: impl Into<String>, default_unit: IngredientUnit) -> Self {
        Self {
            id,
            name: name.into(),
            default_unit,
        }
    }
}

/// Lookup of ingredients by id
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    ingredients: HashMap<i64, Ingredient>,
}

impl IngredientCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient, replacing any previous one with the same id
    pub fn insert(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.id, ingredient);
    }

    pub fn get(&self, id: i64) -> PlanResult<&Ingredient> {
        self.ingredients
            .get(&id)
            .ok_or(PlanError::UnknownIngredient(id))
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl FromIterator<Ingredient> for IngredientCatalog {
    fn from_iter<I: IntoIterator<Item = Ingredient>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for ingredient in iter {
            catalog.insert(ingredient);
        }
        catalog
    }
}
