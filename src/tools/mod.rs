//! Report tools
//!
//! Serializable request/response shapes around the unit and planning logic.

pub mod quantities;
pub mod shopping;

pub use quantities::{format_quantities, QuantityDisplay, QuantityRequest};
pub use shopping::{build_shopping_report, PlanRequest, ShoppingLine, ShoppingReport};
