use super::repository::{OrderLine, OrderStatus};
use crate::utils::validation::{self, Data, Outcome, ValidationError};
use serde_json::Value;

const PREFIX: &str = "Must";
const INVALID_STATUS: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

pub fn has_field(data: &Data, field: &str) -> Outcome<String> {
    validation::has_field(data, field, PREFIX)
}

/// Requires a non-empty `dishes` array whose every line carries a positive
/// integer quantity. The lowest offending index is reported.
pub fn dishes_is_valid(data: &Data) -> Outcome<Vec<OrderLine>> {
    let lines = match data.get("dishes") {
        Some(Value::Array(lines)) if !lines.is_empty() => lines,
        _ => return Err(ValidationError::new("Order must include at least one dish")),
    };

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| -> Outcome<OrderLine> {
            let quantity = line
                .get("quantity")
                .and_then(validation::positive_integer)
                .ok_or_else(|| {
                    ValidationError::new(format!(
                        "Dish {index} must have a quantity that is an integer greater than 0"
                    ))
                })?;

            let mut details = line.as_object().cloned().unwrap_or_default();
            details.remove("quantity");

            Ok(OrderLine { quantity, details })
        })
        .collect()
}

/// Checks membership only; any of the four statuses may follow any other.
pub fn status_is_valid(data: &Data) -> Outcome<OrderStatus> {
    data.get("status")
        .and_then(Value::as_str)
        .and_then(|status| status.parse::<OrderStatus>().ok())
        .ok_or_else(|| ValidationError::new(INVALID_STATUS))
}
