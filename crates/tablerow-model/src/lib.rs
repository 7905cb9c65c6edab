//! Data model for spreadsheet tables read as records.
//!
//! A worksheet table is represented as an ordered sequence of [`Record`]s.
//! Each record maps a normalized field name (derived from the header row)
//! to the [`CellValue`] found in that column.
//!
//! # Module Organization
//!
//! - [`value`]: Scalar cell values (text, number, boolean, datetime, absent)
//! - [`record`]: Ordered field-name to value mapping for one data row

pub mod record;
pub mod value;

pub use record::Record;
pub use value::CellValue;

/// A normalized key derived from one header cell.
pub type FieldName = String;
