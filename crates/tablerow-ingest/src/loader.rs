//! Workbook file loading and worksheet selection.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Reader, Xlsx, open_workbook};
use tablerow_model::Record;

use crate::error::{IngestError, Result};
use crate::options::ReadOptions;
use crate::rows::read_rows_with;
use crate::worksheet::Worksheet;

type Workbook = Xlsx<BufReader<File>>;

/// Reads data from an xlsx table.
///
/// Uses the first worksheet when `worksheet_name` is `None`.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use tablerow_ingest::load_rows;
///
/// let rows = load_rows(Path::new("orders.xlsx"), Some("Q3"))?;
/// for row in &rows {
///     println!("{:?}", row.get("order_id"));
/// }
/// ```
pub fn load_rows(path: &Path, worksheet_name: Option<&str>) -> Result<Vec<Record>> {
    let options = ReadOptions {
        worksheet: worksheet_name.map(str::to_string),
        ..ReadOptions::default()
    };
    load_rows_with(path, &options)
}

/// Reads data from an xlsx table with explicit options.
pub fn load_rows_with(path: &Path, options: &ReadOptions) -> Result<Vec<Record>> {
    let worksheet = open_worksheet(path, options.worksheet.as_deref())?;
    let rows = read_rows_with(&worksheet, options);

    tracing::info!(
        path = %path.display(),
        worksheet = %worksheet.name(),
        rows = rows.len(),
        "Loaded rows from worksheet"
    );

    Ok(rows)
}

/// Opens a workbook and reads one worksheet into memory.
///
/// The workbook file is closed before this returns, on success and on error.
pub fn open_worksheet(path: &Path, worksheet_name: Option<&str>) -> Result<Worksheet> {
    let mut workbook = open_xlsx(path)?;
    let sheet_names = workbook.sheet_names();

    let name = match worksheet_name {
        Some(name) => name.to_string(),
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::NoWorksheets {
                path: path.to_path_buf(),
            })?,
    };

    if !sheet_names.contains(&name) {
        return Err(IngestError::WorksheetNotFound {
            name,
            path: path.to_path_buf(),
            available: sheet_names,
        });
    }

    tracing::debug!(
        path = %path.display(),
        worksheet = %name,
        sheets = sheet_names.len(),
        "Resolved worksheet"
    );

    let cells = workbook
        .worksheet_range(&name)
        .map_err(|source| IngestError::InvalidWorkbook {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Worksheet::new(name, cells))
}

/// Lists worksheet names in the order the workbook declares them.
pub fn list_worksheets(path: &Path) -> Result<Vec<String>> {
    let workbook = open_xlsx(path)?;
    Ok(workbook.sheet_names())
}

fn open_xlsx(path: &Path) -> Result<Workbook> {
    std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let workbook =
        open_workbook::<Workbook, _>(path).map_err(|source| IngestError::InvalidWorkbook {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), "Opened workbook");

    Ok(workbook)
}
