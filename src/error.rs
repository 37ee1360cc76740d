//! Error types
//!
//! Display conversion never fails; these cover unit-to-unit conversion and
//! the meal planning computations built on top of it.

use thiserror::Error;

use crate::units::IngredientUnit;

/// Unit-to-unit conversion error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Cannot convert {from} to {to}")]
    Incompatible {
        from: IngredientUnit,
        to: IngredientUnit,
    },
}

/// Meal planning error types
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(i64),

    #[error("Recipe of meal {meal_id} has zero servings")]
    InvalidServings { meal_id: i64 },

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for planning operations
pub type PlanResult<T> = Result<T, PlanError>;
