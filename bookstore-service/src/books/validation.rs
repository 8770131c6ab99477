//! Request body validation
//!
//! Turns an untyped JSON body into [`BookFields`] or a [`ValidationError`]
//! before anything touches the store. Create and update share the same rules:
//!
//! | field           | accepted                                               |
//! |-----------------|--------------------------------------------------------|
//! | `title`         | non-empty string                                       |
//! | `author`        | non-empty string                                       |
//! | `description`   | absent, `null`, or string                              |
//! | `publishedYear` | absent, `null`, integral number, or integer string     |
//!
//! Unknown keys, including a caller-supplied `id`, are ignored.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use super::model::BookFields;

/// Why a request body was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body was missing, not JSON, or sent with the wrong content type
    #[error("malformed body: {0}")]
    Malformed(String),

    /// Body was JSON but not an object
    #[error("body must be a JSON object")]
    NotAnObject,

    /// A required field was absent or null
    #[error("missing required field `{0}`")]
    Missing(&'static str),

    /// A required text field was the empty string
    #[error("field `{0}` must not be empty")]
    Empty(&'static str),

    /// A field had a JSON type that cannot be used for it
    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// `publishedYear` was numeric-looking but not an integer
    #[error("field `publishedYear` is not an integer: {0}")]
    InvalidYear(String),
}

/// Validate a create or update body
pub fn validate(body: &Value) -> Result<BookFields, ValidationError> {
    let object = body.as_object().ok_or(ValidationError::NotAnObject)?;
    validate_object(object)
}

/// Validate an already-destructured JSON object
fn validate_object(object: &Map<String, Value>) -> Result<BookFields, ValidationError> {
    Ok(BookFields {
        title: required_text(object, "title")?,
        author: required_text(object, "author")?,
        description: optional_text(object, "description")?,
        published_year: optional_year(object, "publishedYear")?,
    })
}

fn present<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|value| !value.is_null())
}

fn required_text(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match present(object, field) {
        None => Err(ValidationError::Missing(field)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::Empty(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn optional_text(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match present(object, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn optional_year(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<i64>, ValidationError> {
    match present(object, field) {
        None => Ok(None),
        Some(Value::Number(n)) => integral(n)
            .map(Some)
            .ok_or_else(|| ValidationError::InvalidYear(n.to_string())),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ValidationError::InvalidYear(s.clone())),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a number",
        }),
    }
}

/// `1965` and `1965.0` are both 1965; `1965.5` and out-of-range values are not integers
fn integral(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}
