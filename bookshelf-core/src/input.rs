//! Raw, nullable form data and its coercion rules

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Unvalidated field values for one book, as submitted by a form or seed file.
///
/// Text fields accept any JSON scalar and keep its string form; `null` or an
/// absent key leaves the field unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookInput {
    #[serde(default, deserialize_with = "coerce_text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "coerce_text")]
    pub author: Option<String>,

    #[serde(default, deserialize_with = "coerce_text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "coerce_text")]
    pub genre: Option<String>,

    #[serde(default)]
    pub year: Option<YearInput>,
}

impl BookInput {
    /// Input with every field present
    pub fn new(
        title: impl ToString,
        author: impl ToString,
        description: impl ToString,
        genre: impl ToString,
        year: impl Into<YearInput>,
    ) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            description: Some(description.to_string()),
            genre: Some(genre.to_string()),
            year: Some(year.into()),
        }
    }
}

/// A year as it arrives from the outside world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl YearInput {
    /// Convert to an integer year; range checks happen on the book
    pub fn to_integer(&self) -> Result<i64, ValidationError> {
        match self {
            YearInput::Int(year) => Ok(*year),
            YearInput::Float(year) => {
                if year.is_finite()
                    && year.fract() == 0.0
                    && *year >= i64::MIN as f64
                    && *year <= i64::MAX as f64
                {
                    Ok(*year as i64)
                } else {
                    Err(ValidationError::NotAnInteger {
                        value: year.to_string(),
                    })
                }
            }
            YearInput::Text(text) => {
                text.trim()
                    .parse()
                    .map_err(|_| ValidationError::NotAnInteger {
                        value: text.clone(),
                    })
            }
        }
    }
}

impl From<i64> for YearInput {
    fn from(year: i64) -> Self {
        YearInput::Int(year)
    }
}

impl From<i32> for YearInput {
    fn from(year: i32) -> Self {
        YearInput::Int(year.into())
    }
}

impl From<f64> for YearInput {
    fn from(year: f64) -> Self {
        YearInput::Float(year)
    }
}

impl From<&str> for YearInput {
    fn from(year: &str) -> Self {
        YearInput::Text(year.to_string())
    }
}

impl From<String> for YearInput {
    fn from(year: String) -> Self {
        YearInput::Text(year)
    }
}

fn coerce_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
