//! Display conversion and formatting
//!
//! Picks the most readable unit for an amount, rounds it to the unit's
//! display precision and renders the final text shown next to an ingredient.

use std::fmt;

use serde::Serialize;

use super::unit::{IngredientUnit, Scale, DEFAULT_PRECISION_FACTOR};

/// Amount condition of a display rule
#[derive(Debug, Clone, Copy)]
enum Threshold {
    AtLeast(f64),
    Below(f64),
}

impl Threshold {
    fn matches(self, amount: f64) -> bool {
        match self {
            Threshold::AtLeast(limit) => amount >= limit,
            Threshold::Below(limit) => amount < limit,
        }
    }
}

/// Moves an amount from one unit to another once it crosses a threshold
#[derive(Debug, Clone, Copy)]
struct DisplayRule {
    from: IngredientUnit,
    threshold: Threshold,
    scale: Scale,
    to: IngredientUnit,
}

const fn rule(
    from: IngredientUnit,
    threshold: Threshold,
    scale: Scale,
    to: IngredientUnit,
) -> DisplayRule {
    DisplayRule {
        from,
        threshold,
        scale,
        to,
    }
}

// Order matters: every rule sees the amount and unit left by the rules before
// it. The final rule repeats the tablespoon check so that cups brought down
// below one tablespoon still end up in teaspoons.
#[rustfmt::skip]
const DISPLAY_RULES: [DisplayRule; 9] = [
    rule(IngredientUnit::Grams, Threshold::AtLeast(500.0), Scale::Divide(1000.0), IngredientUnit::Kilograms),
    rule(IngredientUnit::Kilograms, Threshold::Below(0.5), Scale::Multiply(1000.0), IngredientUnit::Grams),
    rule(IngredientUnit::Millilitres, Threshold::AtLeast(500.0), Scale::Divide(1000.0), IngredientUnit::Litres),
    rule(IngredientUnit::Litres, Threshold::Below(0.5), Scale::Multiply(1000.0), IngredientUnit::Millilitres),
    rule(IngredientUnit::Teaspoons, Threshold::AtLeast(3.0), Scale::Divide(3.0), IngredientUnit::Tablespoons),
    rule(IngredientUnit::Tablespoons, Threshold::Below(1.0), Scale::Multiply(3.0), IngredientUnit::Teaspoons),
    rule(IngredientUnit::Tablespoons, Threshold::AtLeast(16.0), Scale::Divide(16.0), IngredientUnit::Cups),
    rule(IngredientUnit::Cups, Threshold::Below(1.0), Scale::Multiply(16.0), IngredientUnit::Tablespoons),
    rule(IngredientUnit::Tablespoons, Threshold::Below(1.0), Scale::Multiply(3.0), IngredientUnit::Teaspoons),
];

/// Move an amount into the most readable unit of its display family
///
/// The amount is not rounded. Ounces and pieces pass through unchanged.
pub fn convert_for_display(amount: f64, unit: IngredientUnit) -> (f64, IngredientUnit) {
    DISPLAY_RULES
        .iter()
        .fold((amount, unit), |(amount, unit), rule| {
            if unit == rule.from && rule.threshold.matches(amount) {
                (rule.scale.apply(amount), rule.to)
            } else {
                (amount, unit)
            }
        })
}

/// Round an amount to the display precision of its unit
///
/// Never returns less than one precision step, so a zero amount shows up as
/// the smallest displayable increment.
pub fn round_to_precision(amount: f64, unit: IngredientUnit) -> f64 {
    round_with_factor(amount, unit.precision_factor())
}

fn round_with_factor(amount: f64, factor: f64) -> f64 {
    let rounded = (amount * factor).round() / factor;
    rounded.max(1.0 / factor)
}

/// Convert for display, then round
pub fn round_for_display(amount: f64, unit: IngredientUnit) -> (f64, IngredientUnit) {
    let (converted, unit) = convert_for_display(amount, unit);
    (round_to_precision(converted, unit), unit)
}

/// Suffix for a possibly unrecognized unit; empty when unknown
pub fn format_unit_suffix(unit: Option<IngredientUnit>) -> &'static str {
    unit.map(|u| u.display_suffix()).unwrap_or("")
}

/// Render an amount the way it is shown next to a unit suffix
///
/// Shortest round-trip decimal, never exponent notation even past 1e21.
pub fn format_amount(amount: f64) -> String {
    // -0.0 would otherwise print as "-0"
    if amount == 0.0 {
        return "0".to_string();
    }
    amount.to_string()
}

/// Final display text for an amount, e.g. `"1.5kg"` or `"2 tablespoons"`
pub fn format_for_display(amount: f64, unit: IngredientUnit) -> String {
    let (rounded, unit) = round_for_display(amount, unit);
    format!("{}{}", format_amount(rounded), unit.display_suffix())
}

/// Display text for a raw unit code that may not be a known unit
///
/// Unknown codes are rounded to whole numbers and rendered without a suffix.
pub fn format_unit_code(amount: f64, unit_code: &str) -> String {
    match IngredientUnit::parse(unit_code) {
        Some(unit) => format_for_display(amount, unit),
        None => {
            tracing::warn!(
                "Unrecognized unit '{}', displaying {} without suffix",
                unit_code,
                amount
            );
            let rounded = round_with_factor(amount, DEFAULT_PRECISION_FACTOR);
            format!("{}{}", format_amount(rounded), format_unit_suffix(None))
        }
    }
}

/// Display text for a recipe amount scaled to a meal's number of people
///
/// Without both counts the amount is shown as stored, unconverted and
/// unrounded.
pub fn format_scaled_for_display(
    amount: f64,
    unit: IngredientUnit,
    meal_people: Option<u32>,
    recipe_servings: Option<u32>,
) -> String {
    match (meal_people, recipe_servings) {
        (Some(people), Some(servings)) if people > 0 && servings > 0 => {
            let scaled = amount * (people as f64 / servings as f64);
            format_for_display(scaled, unit)
        }
        _ => format!("{}{}", format_amount(amount), unit.display_suffix()),
    }
}

/// A displayed quantity together with the amount it was computed from
///
/// The rounded amount never reaches zero; check [`DisplayAmount::is_zero`]
/// to tell a removed ingredient from a tiny one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayAmount {
    pub raw_amount: f64,
    pub raw_unit: IngredientUnit,
    pub amount: f64,
    pub unit: IngredientUnit,
}

impl DisplayAmount {
    pub fn new(raw_amount: f64, raw_unit: IngredientUnit) -> Self {
        let (amount, unit) = round_for_display(raw_amount, raw_unit);
        Self {
            raw_amount,
            raw_unit,
            amount,
            unit,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.raw_amount == 0.0
    }
}

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_amount(self.amount), self.unit.display_suffix())
    }
}
