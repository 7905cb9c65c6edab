//! Worksheet handle over an already-parsed cell grid.

use calamine::{Data, Range};
use chrono::{NaiveDate, NaiveDateTime};
use tablerow_model::CellValue;

/// One worksheet's cells, read fully into memory.
///
/// Rows and columns are addressed 1-based, as in the spreadsheet UI: cell
/// `(1, 1)` is `A1` regardless of where the used range starts.
#[derive(Debug, Clone)]
pub struct Worksheet {
    name: String,
    cells: Range<Data>,
}

impl Worksheet {
    /// Wraps a grid read by `calamine` (or built in memory) as a worksheet.
    pub fn new(name: impl Into<String>, cells: Range<Data>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the cell at a 1-based `(row, column)`.
    ///
    /// Positions outside the used range, and row or column 0, are `Absent`.
    pub fn cell(&self, row: usize, column: usize) -> CellValue {
        let position = row
            .checked_sub(1)
            .zip(column.checked_sub(1))
            .and_then(|(r, c)| Some((u32::try_from(r).ok()?, u32::try_from(c).ok()?)));

        position
            .and_then(|position| self.cells.get_value(position))
            .map_or(CellValue::Absent, cell_value)
    }

    /// 1-based index of the last row in the used range, or 0 when empty.
    pub fn max_row(&self) -> usize {
        self.cells.end().map_or(0, |(row, _)| row as usize + 1)
    }

    /// 1-based index of the last column in the used range, or 0 when empty.
    pub fn max_column(&self) -> usize {
        self.cells.end().map_or(0, |(_, column)| column as usize + 1)
    }
}

/// Converts a `calamine` cell to a [`CellValue`].
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Absent,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::from(*i),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) if dt.is_duration() => CellValue::Number(dt.as_f64()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or(CellValue::Number(dt.as_f64()), CellValue::DateTime),
        Data::DateTimeIso(s) => {
            parse_iso_datetime(s).map_or_else(|| CellValue::Text(s.clone()), CellValue::DateTime)
        }
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
