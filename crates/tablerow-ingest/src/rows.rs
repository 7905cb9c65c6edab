//! Data row scanning.

use std::collections::HashSet;

use tablerow_model::{CellValue, FieldName, Record};

use crate::fields::get_fieldnames_with;
use crate::options::ReadOptions;
use crate::worksheet::Worksheet;

/// Reads the data rows of a worksheet as records.
///
/// Field names come from row 1 (see [`get_fieldnames`](crate::get_fieldnames)).
/// Data starts at row 2 and ends before the first row whose first cell is
/// blank. Short rows are padded with absent values; cells past the last
/// field name are ignored.
pub fn read_rows(worksheet: &Worksheet) -> Vec<Record> {
    read_rows_with(worksheet, &ReadOptions::default())
}

/// Reads the data rows of a worksheet using the header style from `options`.
///
/// The worksheet selector in `options` is not consulted here; the caller
/// has already chosen the worksheet.
pub fn read_rows_with(worksheet: &Worksheet, options: &ReadOptions) -> Vec<Record> {
    let fieldnames = get_fieldnames_with(worksheet, options.header_style);
    log_duplicate_fields(worksheet, &fieldnames);

    let mut rows = Vec::new();
    let mut reached_terminator = false;

    for row in 2..=worksheet.max_row() {
        if worksheet.cell(row, 1).is_absent() {
            reached_terminator = true;
            break;
        }
        rows.push(build_record(worksheet, row, &fieldnames));
    }

    tracing::debug!(
        worksheet = %worksheet.name(),
        rows = rows.len(),
        reached_terminator,
        "Read worksheet rows"
    );

    rows
}

fn build_record(worksheet: &Worksheet, row: usize, fieldnames: &[FieldName]) -> Record {
    let width = worksheet.max_column().min(fieldnames.len());
    let mut record = Record::with_capacity(fieldnames.len());

    for (index, fieldname) in fieldnames[..width].iter().enumerate() {
        record.insert(fieldname.as_str(), worksheet.cell(row, index + 1));
    }
    for fieldname in &fieldnames[width..] {
        record.insert(fieldname.as_str(), CellValue::Absent);
    }

    record
}

fn log_duplicate_fields(worksheet: &Worksheet, fieldnames: &[FieldName]) {
    for (column, fieldname) in duplicate_fields(fieldnames) {
        tracing::debug!(
            worksheet = %worksheet.name(),
            field = %fieldname,
            column,
            "Duplicate field name; later column wins"
        );
    }
}

/// Returns the 1-based column and name of every field already seen to its left.
fn duplicate_fields(fieldnames: &[FieldName]) -> Vec<(usize, &str)> {
    let mut seen = HashSet::with_capacity(fieldnames.len());
    fieldnames
        .iter()
        .enumerate()
        .filter(|(_, fieldname)| !seen.insert(fieldname.as_str()))
        .map(|(index, fieldname)| (index + 1, fieldname.as_str()))
        .collect()
}
