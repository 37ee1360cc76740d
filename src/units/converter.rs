//! Unit-to-unit conversion
//!
//! Converts ingredient amounts between units of the same kind using fixed
//! kitchen approximations (a cup is 236 mL, an ounce 28 g) and decides when an
//! amount is too small to be worth listing.

use super::unit::{IngredientUnit, Scale, UnitKind};
use crate::error::ConversionError;
use crate::models::IngredientUse;

/// Whether an amount in `from` can be expressed in `to`
///
/// Pieces only convert to themselves.
pub fn can_convert(from: IngredientUnit, to: IngredientUnit) -> bool {
    if from == to {
        return true;
    }
    if from.kind() == UnitKind::Piece || to.kind() == UnitKind::Piece {
        return false;
    }
    from.kind() == to.kind()
}

/// The single multiply or divide taking an amount from one unit to another
fn conversion_scale(from: IngredientUnit, to: IngredientUnit) -> Option<Scale> {
    use IngredientUnit::*;

    let scale = match (from, to) {
        (Millilitres, Litres) => Scale::Divide(1000.0),
        (Millilitres, Cups) => Scale::Divide(236.0),
        (Millilitres, Tablespoons) => Scale::Divide(15.0),
        (Millilitres, Teaspoons) => Scale::Divide(5.0),

        (Litres, Millilitres) => Scale::Multiply(1000.0),
        (Litres, Cups) => Scale::Multiply(4.0),
        (Litres, Tablespoons) => Scale::Multiply(68.0),
        (Litres, Teaspoons) => Scale::Multiply(202.0),

        (Cups, Millilitres) => Scale::Multiply(236.0),
        (Cups, Litres) => Scale::Divide(4.0),
        (Cups, Tablespoons) => Scale::Multiply(16.0),
        (Cups, Teaspoons) => Scale::Multiply(48.0),

        (Tablespoons, Millilitres) => Scale::Multiply(15.0),
        (Tablespoons, Litres) => Scale::Divide(68.0),
        (Tablespoons, Cups) => Scale::Divide(16.0),
        (Tablespoons, Teaspoons) => Scale::Multiply(3.0),

        (Teaspoons, Millilitres) => Scale::Multiply(5.0),
        (Teaspoons, Litres) => Scale::Divide(202.0),
        (Teaspoons, Cups) => Scale::Divide(48.0),
        (Teaspoons, Tablespoons) => Scale::Divide(3.0),

        (Grams, Kilograms) => Scale::Divide(1000.0),
        (Grams, Ounces) => Scale::Divide(28.0),
        (Kilograms, Grams) => Scale::Multiply(1000.0),
        (Kilograms, Ounces) => Scale::Multiply(35.0),
        (Ounces, Grams) => Scale::Multiply(28.0),
        (Ounces, Kilograms) => Scale::Divide(35.0),

        _ => return None,
    };
    Some(scale)
}

/// Convert an amount between two units of the same kind
///
/// Same-unit and zero amounts come back unchanged, even across kinds.
pub fn convert_amount_to(
    amount: f64,
    from: IngredientUnit,
    to: IngredientUnit,
) -> Result<f64, ConversionError> {
    if from == to || amount == 0.0 {
        return Ok(amount);
    }

    conversion_scale(from, to)
        .map(|scale| scale.apply(amount))
        .ok_or(ConversionError::Incompatible { from, to })
}

/// Express a use in `to` when the units are compatible, else leave it as is
pub fn convert_if_possible(ingredient_use: &IngredientUse, to: IngredientUnit) -> IngredientUse {
    if !can_convert(ingredient_use.unit, to) {
        return ingredient_use.clone();
    }

    match convert_amount_to(ingredient_use.amount, ingredient_use.unit, to) {
        Ok(amount) => IngredientUse::new(ingredient_use.ingredient.clone(), to, amount),
        Err(e) => {
            tracing::warn!("Keeping {} unconverted: {}", ingredient_use.ingredient.name, e);
            ingredient_use.clone()
        }
    }
}

/// Move a use one step towards a less absurd unit (e.g. 1500g to kg)
///
/// Only the first matching rule applies.
pub fn heuristically_convert_to_nicer_unit(ingredient_use: &IngredientUse) -> IngredientUse {
    use IngredientUnit::*;

    let amount = ingredient_use.amount;
    let target = match ingredient_use.unit {
        Grams if amount >= 500.0 => Kilograms,
        Kilograms if amount < 0.5 => Grams,
        Millilitres if amount >= 500.0 => Litres,
        Litres if amount < 0.5 => Millilitres,
        Teaspoons if amount >= 3.0 => Tablespoons,
        Tablespoons if amount < 1.0 => Teaspoons,
        Tablespoons if amount >= 16.0 => Cups,
        Cups if amount < 1.0 => Tablespoons,
        _ => return ingredient_use.clone(),
    };
    convert_if_possible(ingredient_use, target)
}

/// Smallest amount per unit still worth putting on a list
pub fn minuscule_limit(unit: IngredientUnit) -> f64 {
    match unit {
        IngredientUnit::Litres => 0.002,
        IngredientUnit::Millilitres => 1.0,
        IngredientUnit::Kilograms => 0.001,
        IngredientUnit::Grams => 1.0,
        IngredientUnit::Ounces => 0.01,
        IngredientUnit::Cups => 0.1,
        IngredientUnit::Tablespoons => 0.25,
        IngredientUnit::Teaspoons => 0.25,
        IngredientUnit::Piece => 0.25,
    }
}

/// Whether the magnitude of a use reaches its unit's minuscule limit
pub fn amount_not_minuscule(ingredient_use: &IngredientUse) -> bool {
    ingredient_use.amount.abs() >= minuscule_limit(ingredient_use.unit)
}
