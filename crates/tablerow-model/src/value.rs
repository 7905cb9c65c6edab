//! Scalar cell values.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// The value held by a single worksheet cell.
///
/// Serializes as a plain scalar: text and datetimes as strings, numbers and
/// booleans as themselves, and [`CellValue::Absent`] as `null`.
///
/// # Example
///
/// ```
/// use tablerow_model::CellValue;
///
/// let value = CellValue::from("Alice");
/// assert_eq!(value.as_text(), Some("Alice"));
/// assert!(!value.is_absent());
/// assert!(CellValue::Absent.is_absent());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// String content.
    Text(String),
    /// Numeric content. Spreadsheets store all numbers as doubles.
    Number(f64),
    /// Boolean content.
    Boolean(bool),
    /// A date or datetime cell.
    DateTime(NaiveDateTime),
    /// Blank cell, or a cell outside the used range.
    #[default]
    Absent,
}

impl CellValue {
    /// Returns true for blank cells.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(datetime) => Some(*datetime),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Boolean(flag) => write!(f, "{flag}"),
            Self::DateTime(datetime) => write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S")),
            Self::Absent => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        // xlsx stores every number as a double.
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
