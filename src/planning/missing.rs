//! Missing ingredient computation
//!
//! Compares what selected meals need against the stash to work out what has
//! to go on the shopping list, and how well each meal is covered.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::Serialize;

use super::aggregate::{
    convert_heuristic, group_by_ingredient_and_unit, sum_amounts, sum_ingredients,
    units_of_ingredients,
};
use crate::error::PlanResult;
use crate::models::{IngredientCatalog, IngredientUse, IngredientUseKey, Meal, MealStatus, Stash};
use crate::units::{amount_not_minuscule, convert_if_possible};

/// Remaining stash amounts at or below this are treated as used up
const STASH_EMPTY_THRESHOLD: f64 = 0.0049;

/// Balances closer to zero than this are treated as exactly covered
const BALANCE_EPSILON: f64 = 0.00001;

/// Result of the isolated (non-timeline) computation
#[derive(Debug, Clone, Default, Serialize)]
pub struct MissingIngredients {
    /// How much of each stash entry the meals consume
    pub used_stash_ingredients: Vec<IngredientUse>,
    pub missing_ingredients: Vec<IngredientUse>,
    /// Everything the meals need, regardless of the stash
    pub total_ingredients: Vec<IngredientUse>,
}

/// Result of the timeline computation
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimelineMissingIngredients {
    /// Always empty; consumption is spread over the timeline
    pub used_stash_ingredients: Vec<IngredientUse>,
    pub missing_ingredients: Vec<IngredientUse>,
    pub meal_status_per_meal: BTreeMap<i64, MealStatus>,
}

/// Scaled ingredients of every meal that is not done yet
pub fn ingredients_of_open_meals<'a, I>(
    meals: I,
    catalog: &IngredientCatalog,
) -> PlanResult<Vec<IngredientUse>>
where
    I: IntoIterator<Item = &'a Meal>,
{
    let mut uses = Vec::new();
    for meal in meals.into_iter().filter(|m| !m.is_done) {
        uses.extend(meal.scaled_ingredients(catalog)?);
    }
    Ok(uses)
}

/// Ids of ingredients used by meals that are not done yet
pub fn ingredients_of_not_done_recipes(meals: &[Meal]) -> BTreeSet<i64> {
    meals
        .iter()
        .filter(|m| !m.is_done)
        .flat_map(|m| m.recipe.ingredients.iter().map(|i| i.ingredient_id))
        .collect()
}

/// An ingredient is available when some meal uses it and it is not missing
pub fn available_ingredient_ids<I>(meal_ingredient_ids: I, missing: &[IngredientUse]) -> BTreeSet<i64>
where
    I: IntoIterator<Item = i64>,
{
    let missing_ids: HashSet<i64> = missing.iter().map(|u| u.ingredient.id).collect();
    meal_ingredient_ids
        .into_iter()
        .filter(|id| !missing_ids.contains(id))
        .collect()
}

/// Stash entries expressed in each ingredient's default unit where possible
fn stash_in_default_units(stash: &Stash, catalog: &IngredientCatalog) -> PlanResult<Vec<IngredientUse>> {
    Ok(stash
        .ingredient_uses(catalog)?
        .iter()
        .map(|u| convert_if_possible(u, u.ingredient.default_unit))
        .collect())
}

fn keys_of(uses: &[IngredientUse]) -> HashSet<IngredientUseKey> {
    uses.iter().map(IngredientUse::key).collect()
}

fn negated(uses: &[IngredientUse]) -> impl Iterator<Item = IngredientUse> + '_ {
    uses.iter().map(IngredientUse::negated)
}

/// Missing and used ingredients for meals considered in isolation
///
/// Assumes no other meal takes anything from the stash.
pub fn compute_missing_ingredients_simple(
    selected_meals: &[Meal],
    stash: &Stash,
    catalog: &IngredientCatalog,
) -> PlanResult<MissingIngredients> {
    let available = sum_ingredients(&stash_in_default_units(stash, catalog)?);
    let units = units_of_ingredients(&available);
    let available_by_key: HashMap<IngredientUseKey, &IngredientUse> =
        available.iter().map(|u| (u.key(), u)).collect();

    let meal_uses: Vec<IngredientUse> = ingredients_of_open_meals(selected_meals, catalog)?
        .iter()
        .map(|u| convert_heuristic(&units, u))
        .collect();

    let meal_keys = keys_of(&meal_uses);
    let overlapping: HashSet<IngredientUseKey> = keys_of(&available)
        .intersection(&meal_keys)
        .copied()
        .collect();

    let combined: Vec<IngredientUse> = available
        .iter()
        .cloned()
        .chain(negated(&meal_uses))
        .collect();
    let balance = sum_ingredients(&combined);

    let used_stash_ingredients = balance
        .iter()
        .filter(|b| overlapping.contains(&b.key()))
        .filter_map(|b| {
            available_by_key
                .get(&b.key())
                .map(|stashed| b.with_amount(stashed.amount - b.amount.max(0.0)))
        })
        .collect();

    let missing_ingredients = balance
        .iter()
        .filter(|b| b.amount < 0.0)
        .filter(|b| amount_not_minuscule(b))
        .map(IngredientUse::negated)
        .collect();

    Ok(MissingIngredients {
        used_stash_ingredients,
        missing_ingredients,
        total_ingredients: sum_ingredients(&meal_uses),
    })
}

/// Missing ingredients when meals take from the stash in menu order
///
/// Meals from `all_meals` positioned before a selected meal (and after the
/// previous selected one) consume the stash first.
pub fn compute_missing_ingredients_with_timeline(
    selected_meals: &[Meal],
    all_meals: &[Meal],
    stash: &Stash,
    catalog: &IngredientCatalog,
) -> PlanResult<TimelineMissingIngredients> {
    let mut available = stash_in_default_units(stash, catalog)?;
    let stash_units = units_of_ingredients(&available);

    let mut ordered: Vec<&Meal> = selected_meals.iter().collect();
    ordered.sort_by_key(|m| m.position);

    let mut last_position: Option<i32> = None;
    let mut missing = Vec::new();
    let mut meal_status_per_meal = BTreeMap::new();

    for meal in ordered {
        let preceding = all_meals.iter().filter(|other| {
            other.position < meal.position && last_position.map_or(true, |p| other.position > p)
        });
        let preceding_needs = ingredients_of_open_meals(preceding, catalog)?;

        let consumed: Vec<IngredientUse> = available
            .iter()
            .cloned()
            .chain(negated(&preceding_needs))
            .collect();
        available = sum_ingredients(&consumed)
            .into_iter()
            .filter(|u| u.amount > STASH_EMPTY_THRESHOLD)
            .collect();

        let available_units = units_of_ingredients(&available);
        // Needs only move towards units already in the stash, the rest keep
        // their recipe unit until the final regroup
        let needs: Vec<IngredientUse> = ingredients_of_open_meals([meal], catalog)?
            .iter()
            .map(|u| {
                if available_units.contains_key(&u.ingredient.id) {
                    convert_heuristic(&available_units, u).negated()
                } else {
                    u.negated()
                }
            })
            .collect();

        let shares_stash = keys_of(&available)
            .intersection(&keys_of(&needs))
            .next()
            .is_some();

        let combined: Vec<IngredientUse> = available.iter().cloned().chain(needs).collect();
        let (present, lacking): (Vec<IngredientUse>, Vec<IngredientUse>) = sum_ingredients(&combined)
            .into_iter()
            .filter(|u| u.amount.abs() > BALANCE_EPSILON)
            .filter(amount_not_minuscule)
            .partition(|u| u.amount >= 0.0);

        let status = if lacking.is_empty() {
            MealStatus::AllIngredientsPresent
        } else if shares_stash {
            MealStatus::SomeIngredientsMissing
        } else {
            MealStatus::AllIngredientsMissing
        };
        tracing::debug!(
            "Meal {} at position {}: {:?}, {} ingredients missing",
            meal.id,
            meal.position,
            status,
            lacking.len()
        );

        meal_status_per_meal.insert(meal.id, status);
        missing.extend(lacking);
        available = present;
        last_position = Some(meal.position);
    }

    let missing_ingredients = sum_amounts(group_by_ingredient_and_unit(
        &stash_units,
        negated(&missing),
    ));

    Ok(TimelineMissingIngredients {
        used_stash_ingredients: Vec::new(),
        missing_ingredients,
        meal_status_per_meal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::models::{Ingredient, Recipe, RecipeIngredient, StashEntry};
    use crate::units::IngredientUnit::{self, *};

    const FLOUR: i64 = 1;
    const EGGS: i64 = 2;
    const MILK: i64 = 3;
    const SALT: i64 = 4;

    fn catalog() -> IngredientCatalog {
        vec![
            Ingredient::new(FLOUR, "Flour", Kilograms),
            Ingredient::new(EGGS, "Eggs", Piece),
            Ingredient::new(MILK, "Milk", Litres),
            Ingredient::new(SALT, "Salt", Tablespoons),
        ]
        .into_iter()
        .collect()
    }

    fn meal(
        id: i64,
        position: i32,
        servings: u32,
        people: u32,
        lines: &[(i64, IngredientUnit, f64)],
    ) -> Meal {
        Meal {
            id,
            name: format!("Meal {}", id),
            position,
            number_of_people: people,
            is_done: false,
            recipe: Recipe {
                name: format!("Recipe {}", id),
                servings,
                ingredients: lines
                    .iter()
                    .map(|&(ingredient_id, unit, amount)| RecipeIngredient {
                        ingredient_id,
                        unit,
                        amount,
                    })
                    .collect(),
            },
        }
    }

    fn stash(entries: &[(i64, IngredientUnit, f64)]) -> Stash {
        Stash::new(
            entries
                .iter()
                .map(|&(ingredient_id, unit, amount)| StashEntry {
                    ingredient_id,
                    unit,
                    amount,
                })
                .collect(),
        )
    }

    fn assert_use(actual: &IngredientUse, id: i64, unit: IngredientUnit, amount: f64) {
        assert_eq!(actual.ingredient.id, id);
        assert_eq!(actual.unit, unit);
        assert!(
            (actual.amount - amount).abs() < 1e-6,
            "expected {} got {}",
            amount,
            actual.amount
        );
    }

    #[test]
    fn test_open_meals_are_scaled_and_done_meals_skipped() {
        let mut done = meal(2, 1, 1, 1, &[(EGGS, Piece, 6.0)]);
        done.is_done = true;
        let meals = vec![meal(1, 0, 4, 30, &[(FLOUR, Kilograms, 1.3), (MILK, Teaspoons, 2.0)]), done];

        let uses = ingredients_of_open_meals(&meals, &catalog()).unwrap();
        assert_eq!(uses.len(), 2);
        assert_use(&uses[0], FLOUR, Kilograms, 9.75);
        assert_use(&uses[1], MILK, Teaspoons, 15.0);

        let ids = ingredients_of_not_done_recipes(&meals);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![FLOUR, MILK]);
    }

    #[test]
    fn test_simple_with_partial_stash() {
        let meals = vec![meal(
            1,
            0,
            2,
            4,
            &[(FLOUR, Grams, 300.0), (EGGS, Piece, 5.0), (MILK, Millilitres, 250.0)],
        )];
        let stash = stash(&[(FLOUR, Kilograms, 1.0), (EGGS, Piece, 3.0)]);

        let result = compute_missing_ingredients_simple(&meals, &stash, &catalog()).unwrap();

        assert_eq!(result.used_stash_ingredients.len(), 2);
        assert_use(&result.used_stash_ingredients[0], FLOUR, Kilograms, 0.6);
        assert_use(&result.used_stash_ingredients[1], EGGS, Piece, 3.0);

        assert_eq!(result.missing_ingredients.len(), 2);
        assert_use(&result.missing_ingredients[0], EGGS, Piece, 7.0);
        assert_use(&result.missing_ingredients[1], MILK, Litres, 0.5);

        assert_eq!(result.total_ingredients.len(), 3);
        assert_use(&result.total_ingredients[0], FLOUR, Kilograms, 0.6);
        assert_use(&result.total_ingredients[1], EGGS, Piece, 10.0);
        assert_use(&result.total_ingredients[2], MILK, Litres, 0.5);
    }

    #[test]
    fn test_simple_ignores_minuscule_shortfall() {
        let meals = vec![meal(1, 0, 1, 1, &[(MILK, Litres, 1.001)])];
        let stash = stash(&[(MILK, Litres, 1.0)]);

        let result = compute_missing_ingredients_simple(&meals, &stash, &catalog()).unwrap();
        assert!(result.missing_ingredients.is_empty());
        assert_use(&result.used_stash_ingredients[0], MILK, Litres, 1.0);
    }

    #[test]
    fn test_simple_without_meals() {
        let stash = stash(&[(FLOUR, Kilograms, 1.0)]);
        let result = compute_missing_ingredients_simple(&[], &stash, &catalog()).unwrap();
        assert!(result.used_stash_ingredients.is_empty());
        assert!(result.missing_ingredients.is_empty());
        assert!(result.total_ingredients.is_empty());
    }

    #[test]
    fn test_timeline_earlier_meals_take_stash_first() {
        let m1 = meal(1, 0, 1, 1, &[(FLOUR, Grams, 700.0)]);
        let m2 = meal(2, 1, 1, 1, &[(FLOUR, Grams, 500.0)]);
        let m3 = meal(3, 2, 1, 1, &[(FLOUR, Grams, 200.0)]);
        let all = vec![m1.clone(), m2, m3.clone()];
        let stash = stash(&[(FLOUR, Kilograms, 1.0)]);

        let result =
            compute_missing_ingredients_with_timeline(&[m3, m1], &all, &stash, &catalog()).unwrap();

        assert!(result.used_stash_ingredients.is_empty());
        assert_eq!(result.meal_status_per_meal[&1], MealStatus::AllIngredientsPresent);
        assert_eq!(result.meal_status_per_meal[&3], MealStatus::AllIngredientsMissing);
        assert_eq!(result.missing_ingredients.len(), 1);
        assert_use(&result.missing_ingredients[0], FLOUR, Kilograms, 0.2);
    }

    #[test]
    fn test_timeline_some_ingredients_missing() {
        let m1 = meal(1, 0, 1, 1, &[(FLOUR, Grams, 500.0), (EGGS, Piece, 2.0)]);
        let stash = stash(&[(FLOUR, Kilograms, 1.0)]);

        let result = compute_missing_ingredients_with_timeline(
            &[m1.clone()],
            &[m1],
            &stash,
            &catalog(),
        )
        .unwrap();

        assert_eq!(result.meal_status_per_meal[&1], MealStatus::SomeIngredientsMissing);
        assert_eq!(result.missing_ingredients.len(), 1);
        assert_use(&result.missing_ingredients[0], EGGS, Piece, 2.0);
    }

    #[test]
    fn test_timeline_sums_missing_across_meals() {
        let m1 = meal(1, 0, 1, 1, &[(EGGS, Piece, 2.0), (MILK, Millilitres, 300.0)]);
        let m2 = meal(2, 1, 1, 2, &[(EGGS, Piece, 2.0), (MILK, Millilitres, 300.0)]);
        let meals = vec![m1, m2];

        let result =
            compute_missing_ingredients_with_timeline(&meals, &meals, &Stash::default(), &catalog())
                .unwrap();

        assert_eq!(result.meal_status_per_meal[&1], MealStatus::AllIngredientsMissing);
        assert_eq!(result.meal_status_per_meal[&2], MealStatus::AllIngredientsMissing);
        assert_eq!(result.missing_ingredients.len(), 2);
        assert_use(&result.missing_ingredients[0], EGGS, Piece, 6.0);
        // Milk has no stash entry, so it lands in its default unit
        assert_use(&result.missing_ingredients[1], MILK, Litres, 0.9);
    }

    #[test]
    fn test_timeline_minuscule_check_uses_recipe_unit() {
        // 0.6 tsp clears the teaspoon limit but would be 0.2 tbsp in the default unit
        let m1 = meal(1, 0, 1, 1, &[(SALT, Teaspoons, 0.6)]);

        let result = compute_missing_ingredients_with_timeline(
            &[m1.clone()],
            &[m1],
            &Stash::default(),
            &catalog(),
        )
        .unwrap();

        assert_eq!(result.meal_status_per_meal[&1], MealStatus::AllIngredientsMissing);
        assert_eq!(result.missing_ingredients.len(), 1);
        assert_use(&result.missing_ingredients[0], SALT, Tablespoons, 0.2);
    }

    #[test]
    fn test_timeline_done_meal_is_covered() {
        let mut m1 = meal(1, 0, 1, 1, &[(EGGS, Piece, 12.0)]);
        m1.is_done = true;

        let result = compute_missing_ingredients_with_timeline(
            &[m1.clone()],
            &[m1],
            &Stash::default(),
            &catalog(),
        )
        .unwrap();

        assert_eq!(result.meal_status_per_meal[&1], MealStatus::AllIngredientsPresent);
        assert!(result.missing_ingredients.is_empty());
    }

    #[test]
    fn test_timeline_unknown_stash_ingredient() {
        let stash = stash(&[(42, Grams, 1.0)]);
        let result = compute_missing_ingredients_with_timeline(&[], &[], &stash, &catalog());
        assert!(matches!(result, Err(PlanError::UnknownIngredient(42))));
    }

    #[test]
    fn test_available_ingredient_ids() {
        let catalog = catalog();
        let missing = vec![IngredientUse::new(catalog.get(EGGS).unwrap().clone(), Piece, 2.0)];
        let ids = available_ingredient_ids([FLOUR, EGGS, MILK], &missing);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![FLOUR, MILK]);
    }
}
