//! Spreadsheet table ingestion.
//!
//! This crate reads a table from an xlsx worksheet and returns it as a
//! sequence of [`Record`]s keyed by snake_case field names derived from the
//! header row.
//!
//! # Features
//!
//! - **Header Normalization**: Turn header labels into identifier-safe keys
//! - **Field Names**: Read the header row up to the first blank cell
//! - **Row Reading**: Map data rows onto field names until the first row with a blank first cell
//! - **Workbook Loading**: Open a file, select a worksheet by name or default to the first
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tablerow_ingest::{get_fieldnames, load_rows, open_worksheet, read_rows};
//!
//! // One call: open, select the first worksheet, read, close.
//! let rows = load_rows(Path::new("orders.xlsx"), None)?;
//!
//! // Or keep the worksheet around to inspect the schema first.
//! let sheet = open_worksheet(Path::new("orders.xlsx"), Some("Q3"))?;
//! let fields = get_fieldnames(&sheet);
//! let rows = read_rows(&sheet);
//! ```

mod error;
mod fields;
mod header;
mod loader;
mod options;
mod rows;
mod worksheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Header Normalization ===
pub use header::{HeaderStyle, snakecase, snakecase_with};

// === Configuration ===
pub use options::ReadOptions;

// === Worksheet Access ===
pub use worksheet::{Worksheet, cell_value};

// === Field Names and Rows ===
pub use fields::{get_fieldnames, get_fieldnames_with};
pub use rows::{read_rows, read_rows_with};

// === Workbook Loading ===
pub use loader::{list_worksheets, load_rows, load_rows_with, open_worksheet};

// === Model Re-exports ===
pub use tablerow_model::{CellValue, FieldName, Record};
