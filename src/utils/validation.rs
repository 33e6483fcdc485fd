use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Map, Value};
use std::fmt;

/// The `data` object of a request body.
pub type Data = Map<String, Value>;

/// A stage rejected the request payload. Always answered with 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": self.message })),
        )
            .into_response()
    }
}

pub type Outcome<T> = Result<T, ValidationError>;

/// `null`, `false` and `""` count as absent alongside a missing key.
pub fn is_present(value: Option<&Value>) -> bool {
    !matches!(
        value,
        None | Some(Value::Null) | Some(Value::Bool(false))
    ) && value.and_then(Value::as_str) != Some("")
}

/// The string form of a truthy scalar: non-empty strings as-is, non-zero
/// numbers printed. Anything else yields `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Requires `field` to be present and truthy. Non-zero numbers are kept in
/// their printed form; other non-string values are rejected as the wrong type.
/// `prefix` starts the failure message, e.g. `"Dish must"` or `"Must"`.
pub fn has_field(data: &Data, field: &str, prefix: &str) -> Outcome<String> {
    let value = data.get(field);

    if !is_present(value) || value.and_then(Value::as_f64) == Some(0.0) {
        return Err(ValidationError::new(format!("{prefix} include a {field}")));
    }

    value.and_then(scalar_text).ok_or_else(|| {
        ValidationError::new(format!("{prefix} have a {field} that is a string"))
    })
}

/// Accepts integral JSON numbers strictly greater than zero, including
/// integral floats such as `3.0`.
pub fn positive_integer(value: &Value) -> Option<u64> {
    let number = match value {
        Value::Number(number) => number,
        _ => return None,
    };

    if let Some(n) = number.as_u64() {
        return (n > 0).then_some(n);
    }

    number
        .as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= 1.0 && *n <= u64::MAX as f64)
        .map(|n| n as u64)
}

/// The `id` a client sent in the body, in string form. Falsy ids (`""`, `0`,
/// `null`, `false`) are ignored; numeric ids compare by their printed form.
pub fn body_id(data: &Data) -> Option<String> {
    let value = data.get("id")?;

    match value {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        _ if !is_present(Some(value)) => None,
        Value::String(id) => Some(id.clone()),
        other => Some(other.to_string()),
    }
}
