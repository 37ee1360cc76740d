//! Meal and recipe models
//!
//! A meal is a recipe planned for a number of people at a position in a menu.

use serde::{Deserialize, Serialize};

use super::{IngredientCatalog, IngredientUse};
use crate::error::{PlanError, PlanResult};
use crate::units::IngredientUnit;

/// An ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient_id: i64,
    pub unit: IngredientUnit,
    pub amount: f64,
}

/// A recipe written for a number of servings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// A recipe placed in a menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub name: String,
    /// Order of the meal within its menu
    pub position: i32,
    pub number_of_people: u32,
    #[serde(default)]
    pub is_done: bool,
    pub recipe: Recipe,
}

/// How well the stash covers a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealStatus {
    AllIngredientsPresent,
    SomeIngredientsMissing,
    AllIngredientsMissing,
}

impl Meal {
    /// Recipe ingredients scaled from the recipe's servings to the meal's
    /// number of people
    pub fn scaled_ingredients(&self, catalog: &IngredientCatalog) -> PlanResult<Vec<IngredientUse>> {
        if self.recipe.servings == 0 {
            return Err(PlanError::InvalidServings { meal_id: self.id });
        }

        self.recipe
            .ingredients
            .iter()
            .map(|line| {
                let ingredient = catalog.get(line.ingredient_id)?.clone();
                Ok(IngredientUse::new(ingredient, line.unit, line.amount)
                    .scale(self.recipe.servings, self.number_of_people))
            })
            .collect()
    }
}
