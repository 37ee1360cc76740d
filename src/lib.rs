//! Menu Units Library
//!
//! Ingredient unit conversion, display rounding and the meal planning
//! computations built on them.

pub mod build_info;
pub mod config;
pub mod error;
pub mod models;
pub mod planning;
pub mod tools;
pub mod units;

pub use error::{ConversionError, PlanError, PlanResult};
pub use units::{convert_for_display, format_for_display, round_for_display, IngredientUnit};
