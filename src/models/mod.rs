//! Data models
//!
//! Ingredients, meals and stash entries as consumed by the planner.

mod ingredient;
mod ingredient_use;
mod meal;
mod stash;

pub use ingredient::{Ingredient, IngredientCatalog};
pub use ingredient_use::{IngredientUse, IngredientUseKey};
pub use meal::{Meal, MealStatus, Recipe, RecipeIngredient};
pub use stash::{Stash, StashEntry};
