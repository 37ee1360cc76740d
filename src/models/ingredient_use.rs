//! Ingredient use model
//!
//! An amount of an ingredient in a given unit, as used by a recipe, held in a
//! stash or needed on a shopping list.

use serde::{Deserialize, Serialize};

use super::Ingredient;
use crate::units::{DisplayAmount, IngredientUnit};

/// An amount of one ingredient in one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUse {
    pub ingredient: Ingredient,
    pub unit: IngredientUnit,
    pub amount: f64,
}

/// Grouping key: uses with the same ingredient and unit can be summed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IngredientUseKey {
    pub ingredient_id: i64,
    pub unit: IngredientUnit,
}

impl IngredientUse {
    pub fn new(ingredient: Ingredient, unit: IngredientUnit, amount: f64) -> Self {
        Self {
            ingredient,
            unit,
            amount,
        }
    }

    pub fn key(&self) -> IngredientUseKey {
        IngredientUseKey {
            ingredient_id: self.ingredient.id,
            unit: self.unit,
        }
    }

    /// Same ingredient and unit, different amount
    pub fn with_amount(&self, amount: f64) -> Self {
        Self {
            ingredient: self.ingredient.clone(),
            unit: self.unit,
            amount,
        }
    }

    /// Rescale from a recipe's servings to a number of people
    ///
    /// `from_people` must be non-zero.
    pub fn scale(&self, from_people: u32, to_people: u32) -> Self {
        self.with_amount(self.amount * to_people as f64 / from_people as f64)
    }

    /// Same use with the sign flipped, used to subtract needs from supplies
    pub fn negated(&self) -> Self {
        self.with_amount(-self.amount)
    }

    pub fn display(&self) -> DisplayAmount {
        DisplayAmount::new(self.amount, self.unit)
    }
}
