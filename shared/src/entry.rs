//! Entry validation and calculation.
//!
//! Takes the raw text the user typed into the form, validates it,
//! normalizes the two prices to a per-kilogram basis according to the
//! selected [`PriceMode`], and emits a fully computed
//! [`NewTransaction`] candidate. All failures surface as a single
//! human-readable message; nothing here ever touches the store.

use std::fmt;

use anyhow::Result;
use thiserror::Error;

use crate::transaction::{NewTransaction, PriceMode};

/// Raw form input as entered by the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryForm {
    pub product_name: String,
    pub weight: String,
    pub purchase_price: String,
    pub selling_price: String,
    pub price_mode: PriceMode,
}

/// Why an entry was rejected. Two families only: missing input and
/// bad numbers. Both are recoverable; the form shows the message and
/// leaves every field intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("Please fill in all of the fields.")]
    MissingField,
    #[error("{0}")]
    InvalidNumber(InvalidNumberReason),
}

/// The specific numeric problem, used to pick the displayed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNumberReason {
    Unparsable,
    NonPositiveWeight,
    NegativePrice,
    NonFinitePrice,
}

impl fmt::Display for InvalidNumberReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidNumberReason::Unparsable => {
                write!(f, "Please enter valid numeric values.")
            }
            InvalidNumberReason::NonPositiveWeight => {
                write!(f, "Weight must be greater than zero.")
            }
            InvalidNumberReason::NegativePrice => {
                write!(f, "Prices cannot be negative.")
            }
            InvalidNumberReason::NonFinitePrice => {
                write!(f, "The price values are invalid. Please check the inputs.")
            }
        }
    }
}

/// Validate raw form input and compute the transaction candidate.
///
/// `recorded_at` is the caller-supplied entry timestamp (RFC 3339);
/// the core has no clock of its own.
pub fn validate_entry(form: &EntryForm, recorded_at: &str) -> Result<NewTransaction, EntryError> {
    let product_name = form.product_name.trim();
    if product_name.is_empty()
        || form.weight.trim().is_empty()
        || form.purchase_price.trim().is_empty()
        || form.selling_price.trim().is_empty()
    {
        return Err(EntryError::MissingField);
    }

    let weight = parse_number(&form.weight)?;
    let raw_purchase = parse_number(&form.purchase_price)?;
    let raw_selling = parse_number(&form.selling_price)?;

    if weight <= 0.0 || !weight.is_finite() {
        return Err(EntryError::InvalidNumber(
            InvalidNumberReason::NonPositiveWeight,
        ));
    }
    if raw_purchase < 0.0 || raw_selling < 0.0 {
        return Err(EntryError::InvalidNumber(
            InvalidNumberReason::NegativePrice,
        ));
    }

    let (purchase_per_kg, selling_per_kg) = match form.price_mode {
        PriceMode::PerUnit => (raw_purchase, raw_selling),
        PriceMode::Aggregate => (raw_purchase / weight, raw_selling / weight),
    };

    // Guards division artifacts from degenerate weights
    if !is_valid_price(purchase_per_kg) || !is_valid_price(selling_per_kg) {
        return Err(EntryError::InvalidNumber(
            InvalidNumberReason::NonFinitePrice,
        ));
    }

    Ok(NewTransaction::compute(
        product_name.to_string(),
        weight,
        purchase_per_kg,
        selling_per_kg,
        recorded_at.to_string(),
    ))
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

fn parse_number(input: &str) -> Result<f64, EntryError> {
    clean_and_parse_number(input)
        .map_err(|_| EntryError::InvalidNumber(InvalidNumberReason::Unparsable))
}

/// Clean and parse a numeric input string, tolerating digit-group
/// commas and stray spaces ("5,000" parses as 5000).
pub fn clean_and_parse_number(input: &str) -> Result<f64> {
    let cleaned = input.trim().replace(",", "").replace(" ", "");

    cleaned
        .parse::<f64>()
        .map_err(|e| anyhow::anyhow!("Invalid number format: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDED_AT: &str = "2025-06-13T09:00:00Z";

    fn filled_form() -> EntryForm {
        EntryForm {
            product_name: "Apple".to_string(),
            weight: "100".to_string(),
            purchase_price: "5000".to_string(),
            selling_price: "7000".to_string(),
            price_mode: PriceMode::PerUnit,
        }
    }

    #[test]
    fn test_per_unit_entry_computes_totals() {
        let candidate = validate_entry(&filled_form(), RECORDED_AT).unwrap();

        assert_eq!(candidate.product_name, "Apple");
        assert_eq!(candidate.weight, 100.0);
        assert_eq!(candidate.purchase_price_per_kg, 5000.0);
        assert_eq!(candidate.selling_price_per_kg, 7000.0);
        assert_eq!(candidate.total_purchase_price, 500_000.0);
        assert_eq!(candidate.total_selling_price, 700_000.0);
        assert_eq!(candidate.profit, 200_000.0);
        assert_eq!(candidate.recorded_at, RECORDED_AT);
    }

    #[test]
    fn test_aggregate_entry_normalizes_per_kg() {
        let form = EntryForm {
            purchase_price: "500000".to_string(),
            selling_price: "700000".to_string(),
            price_mode: PriceMode::Aggregate,
            ..filled_form()
        };

        let candidate = validate_entry(&form, RECORDED_AT).unwrap();

        assert_eq!(candidate.purchase_price_per_kg, 5000.0);
        assert_eq!(candidate.selling_price_per_kg, 7000.0);
        assert_eq!(candidate.total_purchase_price, 500_000.0);
        assert_eq!(candidate.total_selling_price, 700_000.0);
        assert_eq!(candidate.profit, 200_000.0);
    }

    #[test]
    fn test_aggregate_round_trips_against_per_unit() {
        let weight = 37.5;
        let total_purchase = 412_500.0;
        let total_selling = 468_750.0;

        let aggregate = EntryForm {
            weight: weight.to_string(),
            purchase_price: total_purchase.to_string(),
            selling_price: total_selling.to_string(),
            price_mode: PriceMode::Aggregate,
            ..filled_form()
        };
        let per_unit = EntryForm {
            weight: weight.to_string(),
            purchase_price: (total_purchase / weight).to_string(),
            selling_price: (total_selling / weight).to_string(),
            price_mode: PriceMode::PerUnit,
            ..filled_form()
        };

        let a = validate_entry(&aggregate, RECORDED_AT).unwrap();
        let b = validate_entry(&per_unit, RECORDED_AT).unwrap();

        assert!((a.purchase_price_per_kg - b.purchase_price_per_kg).abs() < 1e-9);
        assert!((a.selling_price_per_kg - b.selling_price_per_kg).abs() < 1e-9);
        assert!((a.profit - b.profit).abs() < 1e-9);
    }

    #[test]
    fn test_missing_fields_rejected() {
        for blank in ["product_name", "weight", "purchase_price", "selling_price"] {
            let mut form = filled_form();
            match blank {
                "product_name" => form.product_name = "  ".to_string(),
                "weight" => form.weight = String::new(),
                "purchase_price" => form.purchase_price = String::new(),
                _ => form.selling_price = String::new(),
            }

            assert_eq!(
                validate_entry(&form, RECORDED_AT),
                Err(EntryError::MissingField),
                "field {} should be required",
                blank
            );
        }
    }

    #[test]
    fn test_unparsable_input_rejected() {
        let form = EntryForm {
            weight: "a hundred".to_string(),
            ..filled_form()
        };
        assert_eq!(
            validate_entry(&form, RECORDED_AT),
            Err(EntryError::InvalidNumber(InvalidNumberReason::Unparsable))
        );
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        for weight in ["0", "-5"] {
            let form = EntryForm {
                weight: weight.to_string(),
                ..filled_form()
            };
            assert_eq!(
                validate_entry(&form, RECORDED_AT),
                Err(EntryError::InvalidNumber(
                    InvalidNumberReason::NonPositiveWeight
                ))
            );
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        let form = EntryForm {
            selling_price: "-7000".to_string(),
            ..filled_form()
        };
        assert_eq!(
            validate_entry(&form, RECORDED_AT),
            Err(EntryError::InvalidNumber(InvalidNumberReason::NegativePrice))
        );
    }

    #[test]
    fn test_zero_price_allowed() {
        let form = EntryForm {
            purchase_price: "0".to_string(),
            ..filled_form()
        };
        let candidate = validate_entry(&form, RECORDED_AT).unwrap();
        assert_eq!(candidate.total_purchase_price, 0.0);
        assert_eq!(candidate.profit, candidate.total_selling_price);
    }

    #[test]
    fn test_degenerate_division_rejected() {
        // Aggregate price overflows to infinity once divided by a
        // vanishingly small weight
        let form = EntryForm {
            weight: "1e-300".to_string(),
            purchase_price: "1e300".to_string(),
            selling_price: "1e300".to_string(),
            price_mode: PriceMode::Aggregate,
            ..filled_form()
        };
        assert_eq!(
            validate_entry(&form, RECORDED_AT),
            Err(EntryError::InvalidNumber(
                InvalidNumberReason::NonFinitePrice
            ))
        );
    }

    #[test]
    fn test_clean_and_parse_number() {
        assert_eq!(clean_and_parse_number("5000").unwrap(), 5000.0);
        assert_eq!(clean_and_parse_number(" 5,000 ").unwrap(), 5000.0);
        assert_eq!(clean_and_parse_number("1 234.56").unwrap(), 1234.56);

        assert!(clean_and_parse_number("abc").is_err());
        assert!(clean_and_parse_number("").is_err());
    }

    #[test]
    fn test_error_messages_are_displayable() {
        assert_eq!(
            EntryError::MissingField.to_string(),
            "Please fill in all of the fields."
        );
        assert_eq!(
            EntryError::InvalidNumber(InvalidNumberReason::Unparsable).to_string(),
            "Please enter valid numeric values."
        );
        assert_eq!(
            EntryError::InvalidNumber(InvalidNumberReason::NonPositiveWeight).to_string(),
            "Weight must be greater than zero."
        );
    }
}
