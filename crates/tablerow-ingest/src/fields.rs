//! Field-name extraction from the header row.

use tablerow_model::FieldName;

use crate::header::HeaderStyle;
use crate::worksheet::Worksheet;

/// Parses snake_case field names from the first row of the worksheet.
///
/// Scans row 1 from column A and stops at the first blank cell; columns after
/// a gap in the header row are never reached.
pub fn get_fieldnames(worksheet: &Worksheet) -> Vec<FieldName> {
    get_fieldnames_with(worksheet, HeaderStyle::default())
}

/// Parses field names from the first row using an explicit header style.
pub fn get_fieldnames_with(worksheet: &Worksheet, style: HeaderStyle) -> Vec<FieldName> {
    let mut fieldnames = Vec::new();

    for column in 1.. {
        let value = worksheet.cell(1, column);
        if value.is_absent() {
            break;
        }
        fieldnames.push(style.apply(&value.to_string()));
    }

    tracing::debug!(
        worksheet = %worksheet.name(),
        fields = fieldnames.len(),
        "Extracted field names"
    );

    fieldnames
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Range};

    fn header_sheet(cells: &[Data]) -> Worksheet {
        let width = cells.len().max(1) as u32;
        let mut range = Range::new((0, 0), (1, width - 1));
        for (col, cell) in cells.iter().enumerate() {
            range.set_value((0, col as u32), cell.clone());
        }
        Worksheet::new("Sheet1", range)
    }

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    #[test]
    fn test_stops_at_first_blank_header() {
        let sheet = header_sheet(&[text("Name"), text("Age"), Data::Empty, text("Extra")]);
        assert_eq!(get_fieldnames(&sheet), vec!["name", "age"]);
    }

    #[test]
    fn test_reads_until_sheet_edge() {
        let sheet = header_sheet(&[text("  Order ID "), text("Unit Price ($)")]);
        assert_eq!(get_fieldnames(&sheet), vec!["order_id", "unit_price"]);
    }

    #[test]
    fn test_blank_first_header_yields_no_fields() {
        let sheet = header_sheet(&[Data::Empty, text("Ignored")]);
        assert!(get_fieldnames(&sheet).is_empty());

        let empty = Worksheet::new("Empty", Range::empty());
        assert!(get_fieldnames(&empty).is_empty());
    }

    #[test]
    fn test_non_text_headers_use_display_text() {
        let sheet = header_sheet(&[Data::Float(2024.0), Data::Bool(true), text("Q-1")]);
        assert_eq!(get_fieldnames(&sheet), vec!["2024", "true", "q_1"]);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let sheet = header_sheet(&[text("Total"), text("TOTAL ")]);
        assert_eq!(get_fieldnames(&sheet), vec!["total", "total"]);
    }

    #[test]
    fn test_legacy_style() {
        let sheet = header_sheet(&[text("Unit Price ($)")]);
        assert_eq!(
            get_fieldnames_with(&sheet, HeaderStyle::Legacy),
            vec!["unit_price_$"]
        );
    }
}
