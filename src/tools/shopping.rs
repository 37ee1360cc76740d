//! Shopping report tool
//!
//! Turns a menu plan (ingredients, meals, stash) into the shopping list and
//! stash usage lines shown to users.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::build_info::BuildInfo;
use crate::config::PlanMode;
use crate::error::PlanResult;
use crate::models::{Ingredient, IngredientCatalog, IngredientUse, Meal, MealStatus, Stash};
use crate::planning::{
    available_ingredient_ids, compute_missing_ingredients_simple,
    compute_missing_ingredients_with_timeline, ingredients_of_not_done_recipes,
    ingredients_of_open_meals, sum_autoconverting,
};
use crate::units::IngredientUnit;

/// Input document for a shopping report
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub stash: Stash,
    /// Meals to shop for; every meal when absent
    #[serde(default)]
    pub selected_meal_ids: Option<Vec<i64>>,
}

/// One displayed ingredient line
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingLine {
    pub ingredient_id: i64,
    pub ingredient_name: String,
    /// Amount before display conversion and rounding
    pub raw_amount: f64,
    pub raw_unit: IngredientUnit,
    pub amount: f64,
    pub unit: IngredientUnit,
    pub display: String,
}

impl From<&IngredientUse> for ShoppingLine {
    fn from(ingredient_use: &IngredientUse) -> Self {
        let shown = ingredient_use.display();
        Self {
            ingredient_id: ingredient_use.ingredient.id,
            ingredient_name: ingredient_use.ingredient.name.clone(),
            raw_amount: shown.raw_amount,
            raw_unit: shown.raw_unit,
            amount: shown.amount,
            unit: shown.unit,
            display: shown.to_string(),
        }
    }
}

/// Response for build_shopping_report
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingReport {
    pub build: BuildInfo,
    pub mode: &'static str,
    pub missing: Vec<ShoppingLine>,
    /// Only filled by the simple computation
    pub used_from_stash: Vec<ShoppingLine>,
    pub totals: Vec<ShoppingLine>,
    pub meal_status: BTreeMap<i64, MealStatus>,
    pub available_ingredient_ids: Vec<i64>,
}

fn lines(uses: &[IngredientUse]) -> Vec<ShoppingLine> {
    uses.iter()
        // Zero lines are removed ingredients, not tiny ones
        .filter(|u| !u.display().is_zero())
        .map(ShoppingLine::from)
        .collect()
}

/// Build the shopping report for a plan
pub fn build_shopping_report(plan: &PlanRequest, mode: PlanMode) -> PlanResult<ShoppingReport> {
    let catalog: IngredientCatalog = plan.ingredients.iter().cloned().collect();

    let selected: Vec<Meal> = match &plan.selected_meal_ids {
        Some(ids) => plan
            .meals
            .iter()
            .filter(|m| ids.contains(&m.id))
            .cloned()
            .collect(),
        None => plan.meals.clone(),
    };

    tracing::info!(
        "Building {} report for {} of {} meals, {} stash entries",
        mode.as_str(),
        selected.len(),
        plan.meals.len(),
        plan.stash.entries.len()
    );

    let (missing, used, totals, meal_status) = match mode {
        PlanMode::Simple => {
            let result = compute_missing_ingredients_simple(&selected, &plan.stash, &catalog)?;
            (
                result.missing_ingredients,
                result.used_stash_ingredients,
                result.total_ingredients,
                BTreeMap::new(),
            )
        }
        PlanMode::Timeline => {
            let result = compute_missing_ingredients_with_timeline(
                &selected,
                &plan.meals,
                &plan.stash,
                &catalog,
            )?;
            let totals = ingredients_of_open_meals(&selected, &catalog)?;
            (
                result.missing_ingredients,
                result.used_stash_ingredients,
                totals,
                result.meal_status_per_meal,
            )
        }
    };

    let meal_ingredient_ids = ingredients_of_not_done_recipes(&selected);
    let available = available_ingredient_ids(meal_ingredient_ids, &missing);

    Ok(ShoppingReport {
        build: BuildInfo::current(),
        mode: mode.as_str(),
        missing: lines(&sum_autoconverting(&missing)),
        used_from_stash: lines(&used),
        totals: lines(&sum_autoconverting(&totals)),
        meal_status,
        available_ingredient_ids: available.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"{
        "ingredients": [
            {"id": 1, "name": "Flour", "default_unit": "KILOGRAMS"},
            {"id": 2, "name": "Eggs", "default_unit": "PIECE"},
            {"id": 3, "name": "Milk", "default_unit": "LITRES"}
        ],
        "meals": [
            {
                "id": 10, "name": "Pancakes", "position": 0, "number_of_people": 8,
                "recipe": {
                    "name": "Pancakes", "servings": 4,
                    "ingredients": [
                        {"ingredient_id": 1, "unit": "GRAMS", "amount": 250},
                        {"ingredient_id": 2, "unit": "PIECE", "amount": 3},
                        {"ingredient_id": 3, "unit": "MILLILITRES", "amount": 400}
                    ]
                }
            }
        ],
        "stash": {"entries": [
            {"ingredient_id": 1, "unit": "KILOGRAMS", "amount": 1},
            {"ingredient_id": 2, "unit": "PIECE", "amount": 2}
        ]}
    }"#;

    fn plan() -> PlanRequest {
        serde_json::from_str(PLAN).unwrap()
    }

    #[test]
    fn test_timeline_report() {
        let report = build_shopping_report(&plan(), PlanMode::Timeline).unwrap();

        assert_eq!(report.mode, "timeline");
        assert_eq!(report.meal_status[&10], MealStatus::SomeIngredientsMissing);

        let missing: Vec<&str> = report.missing.iter().map(|l| l.display.as_str()).collect();
        assert_eq!(missing, vec!["4 piece", "0.8L"]);
        assert_eq!(report.missing[0].ingredient_name, "Eggs");

        let totals: Vec<&str> = report.totals.iter().map(|l| l.display.as_str()).collect();
        assert_eq!(totals, vec!["0.5kg", "6 piece", "0.8L"]);

        assert_eq!(report.available_ingredient_ids, vec![1]);
        assert!(report.used_from_stash.is_empty());
    }

    #[test]
    fn test_simple_report() {
        let report = build_shopping_report(&plan(), PlanMode::Simple).unwrap();

        assert_eq!(report.mode, "simple");
        assert!(report.meal_status.is_empty());

        let used: Vec<&str> = report.used_from_stash.iter().map(|l| l.display.as_str()).collect();
        assert_eq!(used, vec!["0.5kg", "2 piece"]);

        let missing: Vec<&str> = report.missing.iter().map(|l| l.display.as_str()).collect();
        assert_eq!(missing, vec!["4 piece", "0.8L"]);
    }

    #[test]
    fn test_selected_meals_filter() {
        let mut plan = plan();
        plan.selected_meal_ids = Some(vec![99]);

        let report = build_shopping_report(&plan, PlanMode::Timeline).unwrap();
        assert!(report.missing.is_empty());
        assert!(report.totals.is_empty());
        assert!(report.meal_status.is_empty());
    }
}
