//! Unit types and conversion constants
//!
//! The closed set of ingredient units, their kinds, display families and the
//! per-unit tables used by rounding and formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Measurement unit of an ingredient amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngredientUnit {
    Grams,
    Kilograms,
    Ounces,
    Millilitres,
    Litres,
    Teaspoons,
    Tablespoons,
    Cups,
    Piece,
}

/// Physical kind of a unit, used by the unit-to-unit converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Mass units (g, kg, oz)
    Mass,
    /// Volume units (mL, L, tsp, tbsp, cups)
    Volume,
    /// Discrete count, never converted
    Piece,
}

/// Group of units the display engine may move a quantity between
///
/// Narrower than [`UnitKind`]: display conversion never crosses from metric
/// volume into spoons, and ounces stay ounces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFamily {
    Mass,
    Volume,
    Spoon,
    /// Units without a display partner (ounces, piece)
    Single,
}

/// A one-step rescale of an amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Multiply(f64),
    Divide(f64),
}

impl Scale {
    pub fn apply(self, amount: f64) -> f64 {
        match self {
            Scale::Multiply(factor) => amount * factor,
            Scale::Divide(factor) => amount / factor,
        }
    }

    /// The scale that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            Scale::Multiply(factor) => Scale::Divide(factor),
            Scale::Divide(factor) => Scale::Multiply(factor),
        }
    }
}

// ============================================================================
// Display Constants
// ============================================================================

/// Rounding steps per whole unit for amounts without a recognized unit
pub const DEFAULT_PRECISION_FACTOR: f64 = 1.0;

impl IngredientUnit {
    /// Every unit, in declaration order
    pub const ALL: [IngredientUnit; 9] = [
        IngredientUnit::Grams,
        IngredientUnit::Kilograms,
        IngredientUnit::Ounces,
        IngredientUnit::Millilitres,
        IngredientUnit::Litres,
        IngredientUnit::Teaspoons,
        IngredientUnit::Tablespoons,
        IngredientUnit::Cups,
        IngredientUnit::Piece,
    ];

    pub fn kind(&self) -> UnitKind {
        match self {
            IngredientUnit::Grams | IngredientUnit::Kilograms | IngredientUnit::Ounces => {
                UnitKind::Mass
            }
            IngredientUnit::Millilitres
            | IngredientUnit::Litres
            | IngredientUnit::Teaspoons
            | IngredientUnit::Tablespoons
            | IngredientUnit::Cups => UnitKind::Volume,
            IngredientUnit::Piece => UnitKind::Piece,
        }
    }

    pub fn display_family(&self) -> DisplayFamily {
        match self {
            IngredientUnit::Grams | IngredientUnit::Kilograms => DisplayFamily::Mass,
            IngredientUnit::Millilitres | IngredientUnit::Litres => DisplayFamily::Volume,
            IngredientUnit::Teaspoons | IngredientUnit::Tablespoons | IngredientUnit::Cups => {
                DisplayFamily::Spoon
            }
            IngredientUnit::Ounces | IngredientUnit::Piece => DisplayFamily::Single,
        }
    }

    /// Steps per whole unit when rounding for display
    ///
    /// A factor of 4 rounds to quarters, 100 to hundredths.
    pub fn precision_factor(&self) -> f64 {
        match self {
            IngredientUnit::Litres => 100.0,
            IngredientUnit::Millilitres => 1.0,
            IngredientUnit::Kilograms => 100.0,
            IngredientUnit::Grams => 1.0,
            IngredientUnit::Ounces => 4.0,
            IngredientUnit::Cups => 4.0,
            IngredientUnit::Tablespoons => 4.0,
            IngredientUnit::Teaspoons => 2.0,
            IngredientUnit::Piece => 4.0,
        }
    }

    /// Text appended directly after the displayed number
    pub fn display_suffix(&self) -> &'static str {
        match self {
            IngredientUnit::Litres => "L",
            IngredientUnit::Millilitres => "mL",
            IngredientUnit::Kilograms => "kg",
            IngredientUnit::Grams => "g",
            IngredientUnit::Ounces => " ounces",
            IngredientUnit::Cups => " cups",
            IngredientUnit::Tablespoons => " tablespoons",
            IngredientUnit::Teaspoons => " teaspoons",
            IngredientUnit::Piece => " piece",
        }
    }

    /// Wire name as used by the REST API
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            IngredientUnit::Grams => "GRAMS",
            IngredientUnit::Kilograms => "KILOGRAMS",
            IngredientUnit::Ounces => "OUNCES",
            IngredientUnit::Millilitres => "MILLILITRES",
            IngredientUnit::Litres => "LITRES",
            IngredientUnit::Teaspoons => "TEASPOONS",
            IngredientUnit::Tablespoons => "TABLESPOONS",
            IngredientUnit::Cups => "CUPS",
            IngredientUnit::Piece => "PIECE",
        }
    }

    /// Parse a unit code, accepting wire names and common abbreviations
    pub fn parse(unit: &str) -> Option<Self> {
        let lower = unit.trim().to_lowercase();

        match lower.as_str() {
            "g" | "gram" | "grams" => Some(IngredientUnit::Grams),
            "kg" | "kilogram" | "kilograms" => Some(IngredientUnit::Kilograms),
            "oz" | "ounce" | "ounces" => Some(IngredientUnit::Ounces),
            "ml" | "millilitre" | "millilitres" | "milliliter" | "milliliters" => {
                Some(IngredientUnit::Millilitres)
            }
            "l" | "litre" | "litres" | "liter" | "liters" => Some(IngredientUnit::Litres),
            "tsp" | "teaspoon" | "teaspoons" => Some(IngredientUnit::Teaspoons),
            "tbsp" | "tablespoon" | "tablespoons" => Some(IngredientUnit::Tablespoons),
            "cup" | "cups" => Some(IngredientUnit::Cups),
            "piece" | "pieces" | "pc" | "pcs" => Some(IngredientUnit::Piece),
            _ => None,
        }
    }
}

impl fmt::Display for IngredientUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}
