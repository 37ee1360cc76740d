//! Ingredient units
//!
//! Display conversion, rounding and formatting of ingredient amounts, plus
//! unit-to-unit conversion used when amounts are aggregated.

pub mod converter;
pub mod display;
pub mod unit;

pub use converter::{
    amount_not_minuscule, can_convert, convert_amount_to, convert_if_possible,
    heuristically_convert_to_nicer_unit, minuscule_limit,
};
pub use display::{
    convert_for_display, format_amount, format_for_display, format_scaled_for_display,
    format_unit_code, format_unit_suffix, round_for_display, round_to_precision, DisplayAmount,
};
pub use unit::{DisplayFamily, IngredientUnit, Scale, UnitKind, DEFAULT_PRECISION_FACTOR};
