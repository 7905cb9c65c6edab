//! One data row as an ordered field-name to value mapping.

use indexmap::IndexMap;
use serde::Serialize;

use crate::FieldName;
use crate::value::CellValue;

/// A single data row keyed by normalized field names.
///
/// Fields keep the order in which they were first inserted, which for rows
/// read from a worksheet is the column order. Inserting a field that already
/// exists replaces its value in place, so duplicate header names resolve to
/// the value of the last such column.
///
/// # Example
///
/// ```
/// use tablerow_model::{CellValue, Record};
///
/// let mut record = Record::new();
/// record.insert("name", CellValue::from("Alice"));
/// record.insert("age", CellValue::from(30.0));
///
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get("age"), Some(&CellValue::Number(30.0)));
/// assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<FieldName, CellValue>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets `field` to `value`, returning the previous value if the field existed.
    pub fn insert(&mut self, field: impl Into<FieldName>, value: CellValue) -> Option<CellValue> {
        self.fields.insert(field.into(), value)
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over field names in column order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over `(field, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<FieldName>> FromIterator<(K, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (FieldName, CellValue);
    type IntoIter = indexmap::map::IntoIter<FieldName, CellValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_duplicate_keeps_position_and_last_value() {
        let mut record = Record::new();
        assert_eq!(record.insert("id", CellValue::from(1.0)), None);
        record.insert("name", CellValue::from("first"));
        let previous = record.insert("id", CellValue::from(2.0));

        assert_eq!(previous, Some(CellValue::Number(1.0)));
        assert_eq!(record.len(), 2);
        assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["id", "name"]);
        assert_eq!(record.get("id"), Some(&CellValue::Number(2.0)));
    }

    #[test]
    fn test_get_missing_field() {
        let record: Record = [("a", CellValue::from(1.0))].into_iter().collect();
        assert!(record.contains_field("a"));
        assert!(!record.contains_field("b"));
        assert_eq!(record.get("b"), None);
    }

    #[test]
    fn test_empty_record() {
        let record = Record::with_capacity(4);
        assert!(record.is_empty());
        assert_eq!(record.iter().count(), 0);
        assert_eq!(serde_json::to_string(&record).unwrap(), "{}");
    }

    #[test]
    fn test_serialize_in_column_order() {
        let record: Record = [
            ("zeta", CellValue::from("last letter")),
            ("alpha", CellValue::Absent),
            ("mid", CellValue::Boolean(false)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"zeta":"last letter","alpha":null,"mid":false}"#);
    }

    #[test]
    fn test_into_iter_yields_owned_pairs() {
        let record: Record = [("a", CellValue::from("x"))].into_iter().collect();
        let pairs: Vec<(String, CellValue)> = record.into_iter().collect();
        assert_eq!(pairs, vec![("a".to_string(), CellValue::from("x"))]);
    }

    #[test]
    fn test_wide_record_lookup() {
        let record: Record = (0..16_384)
            .map(|i| (format!("column_{i}"), CellValue::from(i as f64)))
            .collect();

        assert_eq!(record.len(), 16_384);
        assert_eq!(record.get("column_16383"), Some(&CellValue::Number(16_383.0)));
        assert_eq!(record.field_names().next(), Some("column_0"));
        assert_eq!(record.field_names().last(), Some("column_16383"));
    }
}
