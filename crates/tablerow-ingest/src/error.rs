//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading rows from a workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Workbook file not found.
    #[error("workbook file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to inspect the workbook file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// The file is not a readable xlsx container, or a worksheet part is corrupt.
    #[error("invalid workbook {path}: {source}")]
    InvalidWorkbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    // === Lookup Errors ===
    /// The workbook declares no worksheets, so there is no default to select.
    #[error("workbook has no worksheets: {path}")]
    NoWorksheets { path: PathBuf },

    /// Requested worksheet name is not declared by the workbook.
    #[error("worksheet '{name}' not found in {path} (available: {})", available.join(", "))]
    WorksheetNotFound {
        name: String,
        path: PathBuf,
        available: Vec<String>,
    },
}

impl IngestError {
    /// Returns true for errors caused by a worksheet selector that does not resolve.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::NoWorksheets { .. } | Self::WorksheetNotFound { .. }
        )
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/book.xlsx"),
        };
        assert_eq!(err.to_string(), "workbook file not found: /path/to/book.xlsx");
    }

    #[test]
    fn test_worksheet_not_found_lists_available() {
        let err = IngestError::WorksheetNotFound {
            name: "Missing".to_string(),
            path: PathBuf::from("book.xlsx"),
            available: vec!["Orders".to_string(), "Customers".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "worksheet 'Missing' not found in book.xlsx (available: Orders, Customers)"
        );
        assert!(err.is_lookup());
    }

    #[test]
    fn test_file_errors_are_not_lookup_errors() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("book.xlsx"),
        };
        assert!(!err.is_lookup());
    }
}
