//! Tabular adapters: CSV and XLSX flattened to whitespace-joined rows.

use calamine::{Reader, Xlsx};
use std::io::Cursor;
use tracing::debug;

use crate::error::ExtractError;

/// Flatten a CSV file into one line per record.
///
/// Headers are treated as data (they may carry numbers) and ragged rows are
/// tolerated.
pub fn extract_csv(data: &[u8]) -> Result<String, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut out = String::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::Parse(format!("csv: {e}")))?;
        let line = record.iter().collect::<Vec<_>>().join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Flatten every sheet of an XLSX workbook into one line per row.
pub fn extract_xlsx(data: &[u8]) -> Result<String, ExtractError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))
        .map_err(|e| ExtractError::Parse(format!("xlsx: {e}")))?;

    let sheet_names = workbook.sheet_names().to_vec();
    debug!("workbook has {} sheets", sheet_names.len());

    let mut out = String::new();
    for name in sheet_names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ExtractError::TextExtraction(format!("sheet {name}: {e}")))?;
        for row in range.rows() {
            let line = row
                .iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn csv_rows_become_lines() {
        let text = extract_csv(b"item,price\nwidget,12.50\ngadget,7\n").unwrap();
        assert_eq!(text, "item price\nwidget 12.50\ngadget 7\n");
    }

    #[test]
    fn ragged_csv_is_tolerated() {
        let text = extract_csv(b"a,b,c\n1\n2,3\n").unwrap();
        assert_eq!(text, "a b c\n1\n2 3\n");
    }

    #[test]
    fn empty_csv_yields_empty_string() {
        assert_eq!(extract_csv(b"").unwrap(), "");
    }

    #[test]
    fn garbage_xlsx_is_a_parse_error() {
        let err = extract_xlsx(b"not a zip archive").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }
}
