//! Safe typed extraction over a raw JSON record.

use serde_json::{Map, Value};

use crate::error::ParseError;

/// Read-only wrapper around one JSON object from an API response.
///
/// Every getter takes a field name and returns `None` when the key is
/// missing or holds `null`; absence is never an error. The numeric and
/// boolean getters fail with [`ParseError`] only when the field is present
/// but cannot be coerced.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use walmart_api::resources::ResponseHandler;
///
/// let handler = ResponseHandler::from_value(json!({
///     "name": "Tom &amp; Jerry",
///     "salePrice": "9.99",
/// }))
/// .unwrap();
///
/// assert_eq!(handler.get_text("name").as_deref(), Some("Tom & Jerry"));
/// assert_eq!(handler.get_float("salePrice").unwrap(), Some(9.99));
/// assert_eq!(handler.get_int("numReviews").unwrap(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseHandler {
    payload: Map<String, Value>,
}

impl ResponseHandler {
    /// Wraps a JSON object.
    #[must_use]
    pub const fn new(payload: Map<String, Value>) -> Self {
        Self { payload }
    }

    /// Wraps a JSON value, returning `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(payload) => Some(Self::new(payload)),
            _ => None,
        }
    }

    /// Returns the raw JSON value of a field, treating `null` as absent.
    pub(crate) fn get_raw(&self, name: &str) -> Option<&Value> {
        self.payload.get(name).filter(|value| !value.is_null())
    }

    /// Follows a path of nested object keys.
    pub(crate) fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut value = self.get_raw(first)?;
        for key in rest {
            value = value.get(key).filter(|value| !value.is_null())?;
        }
        Some(value)
    }

    /// Returns a field as a string.
    ///
    /// Strings are returned unchanged. Numbers and booleans are rendered as
    /// their JSON text, arrays and objects as compact JSON, so callers must
    /// not assume the field was a JSON string.
    #[must_use]
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.get_raw(name).map(render)
    }

    /// Returns a field as a string with HTML entities decoded.
    ///
    /// Used for human-readable text the API may send encoded, such as
    /// product names and review bodies.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<String> {
        self.get_string(name)
            .map(|text| html_escape::decode_html_entities(&text).into_owned())
    }

    /// Returns a field as a floating-point number.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the field is present but is neither a JSON
    /// number nor a string holding one.
    pub fn get_float(&self, name: &str) -> Result<Option<f64>, ParseError> {
        self.get_raw(name)
            .map(|value| coerce_float(name, value))
            .transpose()
    }

    /// Returns a field as an integer.
    ///
    /// JSON numbers with a fractional part are truncated toward zero;
    /// strings must hold an integer literal.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the field is present but cannot be coerced.
    pub fn get_int(&self, name: &str) -> Result<Option<i64>, ParseError> {
        self.get_raw(name)
            .map(|value| coerce_int(name, value))
            .transpose()
    }

    /// Returns a nested field (e.g. `["overallRating", "rating"]`) as an integer.
    ///
    /// Absent if any level of the path is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the leaf is present but cannot be coerced.
    pub fn get_int_at(&self, path: &[&str]) -> Result<Option<i64>, ParseError> {
        self.get_path(path)
            .map(|value| coerce_int(&path.join("."), value))
            .transpose()
    }

    /// Returns a field as a boolean.
    ///
    /// Accepts JSON booleans and the strings `"true"`/`"false"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for any other present value.
    pub fn get_bool(&self, name: &str) -> Result<Option<bool>, ParseError> {
        self.get_raw(name)
            .map(|value| match value {
                Value::Bool(flag) => Ok(*flag),
                Value::String(text) if text.eq_ignore_ascii_case("true") => Ok(true),
                Value::String(text) if text.eq_ignore_ascii_case("false") => Ok(false),
                other => Err(ParseError::new(name, "boolean", other.to_string())),
            })
            .transpose()
    }
}

impl From<Map<String, Value>> for ResponseHandler {
    fn from(payload: Map<String, Value>) -> Self {
        Self::new(payload)
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn coerce_float(field: &str, value: &Value) -> Result<f64, ParseError> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ParseError::new(field, "float", value.to_string()))
}

#[allow(clippy::cast_possible_truncation)]
fn coerce_int(field: &str, value: &Value) -> Result<i64, ParseError> {
    let parsed = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite() && float.abs() < 9.2e18)
                .map(|float| float.trunc() as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ParseError::new(field, "integer", value.to_string()))
}
