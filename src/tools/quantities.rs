//! Quantity formatting tool
//!
//! Formats loose `(amount, unit code)` pairs as they arrive from stored or
//! fetched data, where the unit code may not be a known unit.

use serde::{Deserialize, Serialize};

use crate::units::{format_unit_code, DisplayAmount, IngredientUnit};

/// A quantity to format
#[derive(Debug, Clone, Deserialize)]
pub struct QuantityRequest {
    pub amount: f64,
    pub unit: String,
}

/// Response for format_quantities
#[derive(Debug, Clone, Serialize)]
pub struct QuantityDisplay {
    pub amount: f64,
    pub unit: String,
    /// Unit after display conversion, absent for unknown unit codes
    pub display_unit: Option<IngredientUnit>,
    pub display: String,
    pub is_zero: bool,
}

/// Format every request, never failing on unknown units
pub fn format_quantities(requests: &[QuantityRequest]) -> Vec<QuantityDisplay> {
    requests
        .iter()
        .map(|request| {
            let shown = IngredientUnit::parse(&request.unit)
                .map(|unit| DisplayAmount::new(request.amount, unit));
            QuantityDisplay {
                amount: request.amount,
                unit: request.unit.clone(),
                display_unit: shown.map(|s| s.unit),
                display: match shown {
                    Some(s) => s.to_string(),
                    None => format_unit_code(request.amount, &request.unit),
                },
                is_zero: request.amount == 0.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: f64, unit: &str) -> QuantityRequest {
        QuantityRequest {
            amount,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_format_quantities() {
        let shown = format_quantities(&[
            request(1500.0, "GRAMS"),
            request(9.0, "tsp"),
            request(3.0, "bunches"),
            request(0.0, "PIECE"),
        ]);

        assert_eq!(shown[0].display, "1.5kg");
        assert_eq!(shown[0].display_unit, Some(IngredientUnit::Kilograms));
        assert_eq!(shown[1].display, "3 tablespoons");
        assert_eq!(shown[2].display, "3");
        assert_eq!(shown[2].display_unit, None);
        assert_eq!(shown[3].display, "0.25 piece");
        assert!(shown[3].is_zero);
    }

    #[test]
    fn test_deserialize_requests() {
        let requests: Vec<QuantityRequest> =
            serde_json::from_str(r#"[{"amount": 2, "unit": "GRAMS"}]"#).unwrap();
        assert_eq!(format_quantities(&requests)[0].display, "2g");
    }
}
