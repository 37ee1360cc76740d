//! Meal planning computations
//!
//! Aggregates ingredient uses and works out what the stash is missing.

pub mod aggregate;
pub mod missing;

pub use aggregate::{
    convert_heuristic, group_by_ingredient_and_unit, map_to_amount_pairs, sum_amounts,
    sum_autoconverting, sum_ingredients, units_of_ingredients, UnitsByIngredient,
};
pub use missing::{
    available_ingredient_ids, compute_missing_ingredients_simple,
    compute_missing_ingredients_with_timeline, ingredients_of_not_done_recipes,
    ingredients_of_open_meals, MissingIngredients, TimelineMissingIngredients,
};
