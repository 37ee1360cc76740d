//! Ingredient aggregation
//!
//! Sums ingredient uses across recipes, stash entries and shopping lists,
//! converting compatible units onto a common unit per ingredient first.

use std::collections::{BTreeMap, HashMap};

use crate::models::{IngredientUse, IngredientUseKey};
use crate::units::{can_convert, convert_if_possible, heuristically_convert_to_nicer_unit, IngredientUnit};

/// Units each ingredient appears in, in order of first appearance in a list
pub type UnitsByIngredient = HashMap<i64, Vec<IngredientUnit>>;

/// Collect the units every ingredient is used with
pub fn units_of_ingredients(uses: &[IngredientUse]) -> UnitsByIngredient {
    let mut units = UnitsByIngredient::new();
    for ingredient_use in uses {
        units
            .entry(ingredient_use.ingredient.id)
            .or_default()
            .push(ingredient_use.unit);
    }
    units
}

/// Convert a use into the preferred unit for its ingredient
///
/// Preference goes to units already seen for the ingredient, then its
/// default unit, then the use's own unit.
pub fn convert_heuristic(units: &UnitsByIngredient, ingredient_use: &IngredientUse) -> IngredientUse {
    let target = units
        .get(&ingredient_use.ingredient.id)
        .into_iter()
        .flatten()
        .copied()
        .chain([ingredient_use.ingredient.default_unit, ingredient_use.unit])
        .find(|candidate| can_convert(ingredient_use.unit, *candidate))
        .unwrap_or(ingredient_use.unit);

    convert_if_possible(ingredient_use, target)
}

/// Convert uses against a unit map and group them by ingredient and unit
pub fn group_by_ingredient_and_unit<I>(
    units: &UnitsByIngredient,
    uses: I,
) -> BTreeMap<IngredientUseKey, Vec<IngredientUse>>
where
    I: IntoIterator<Item = IngredientUse>,
{
    let mut groups: BTreeMap<IngredientUseKey, Vec<IngredientUse>> = BTreeMap::new();
    for ingredient_use in uses {
        let converted = convert_heuristic(units, &ingredient_use);
        groups.entry(converted.key()).or_default().push(converted);
    }
    groups
}

/// Collapse each group into a single use carrying the summed amount
pub fn sum_amounts(groups: BTreeMap<IngredientUseKey, Vec<IngredientUse>>) -> Vec<IngredientUse> {
    groups
        .into_values()
        .filter_map(|group| {
            let amount: f64 = group.iter().map(|u| u.amount).sum();
            group.into_iter().next().map(|first| first.with_amount(amount))
        })
        .collect()
}

/// Sum uses of the same ingredient, merging convertible units
///
/// Output is ordered by ingredient id, then unit.
pub fn sum_ingredients(uses: &[IngredientUse]) -> Vec<IngredientUse> {
    let units = units_of_ingredients(uses);
    sum_amounts(group_by_ingredient_and_unit(&units, uses.iter().cloned()))
}

/// Sum, move each total to a nicer unit, then sum again so no key repeats
pub fn sum_autoconverting(uses: &[IngredientUse]) -> Vec<IngredientUse> {
    let nicer: Vec<IngredientUse> = sum_ingredients(uses)
        .iter()
        .map(heuristically_convert_to_nicer_unit)
        .collect();
    sum_ingredients(&nicer)
}

/// Inner join on ingredient and unit, pairing each left amount with the
/// matching right use (e.g. "2 of 5 bought")
pub fn map_to_amount_pairs(
    left: &[IngredientUse],
    right: &[IngredientUse],
) -> Vec<(f64, IngredientUse)> {
    let right_by_key: HashMap<IngredientUseKey, &IngredientUse> =
        right.iter().map(|u| (u.key(), u)).collect();

    left.iter()
        .filter_map(|u| right_by_key.get(&u.key()).map(|r| (u.amount, (*r).clone())))
        .collect()
}
