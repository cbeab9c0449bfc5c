//! Workbook decoding with `calamine`.
//!
//! Rows come out the way a header-row sheet export produces them: the first
//! non-empty row supplies column headers, blank headers become `__EMPTY`,
//! repeated headers are suffixed `_1`, `_2`, and so on, empty cells are left
//! out of each row, and rows without any value are skipped.

use std::collections::HashMap;
use std::io::Cursor;

use async_trait::async_trait;
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use crate::domain::ports::{SpreadsheetReader, SpreadsheetReaderError};
use crate::domain::{CellValue, TabularRow};

const EMPTY_HEADER: &str = "__EMPTY";

/// [`SpreadsheetReader`] for `.xlsx` and `.xls` workbooks.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalamineSpreadsheetReader;

#[async_trait]
impl SpreadsheetReader for CalamineSpreadsheetReader {
    async fn read_rows(
        &self,
        workbook: Vec<u8>,
    ) -> Result<Vec<TabularRow>, SpreadsheetReaderError> {
        tokio::task::spawn_blocking(move || decode_first_sheet(workbook))
            .await
            .map_err(|err| SpreadsheetReaderError::unreadable(err.to_string()))?
    }
}

fn decode_first_sheet(workbook: Vec<u8>) -> Result<Vec<TabularRow>, SpreadsheetReaderError> {
    let mut sheets = open_workbook_auto_from_rs(Cursor::new(workbook))
        .map_err(|err| SpreadsheetReaderError::unreadable(err.to_string()))?;
    let range = sheets
        .worksheet_range_at(0)
        .ok_or_else(SpreadsheetReaderError::no_worksheet)?
        .map_err(|err| SpreadsheetReaderError::unreadable(err.to_string()))?;
    Ok(rows_from_range(&range))
}

/// Convert a worksheet range into header-keyed rows.
pub fn rows_from_range(range: &Range<Data>) -> Vec<TabularRow> {
    let mut rows = range.rows().skip_while(|cells| is_blank_row(cells));
    let Some(header_cells) = rows.next() else {
        return Vec::new();
    };
    let headers = unique_headers(header_cells);

    rows.filter_map(|cells| {
        let row: TabularRow = headers
            .iter()
            .zip(cells)
            .filter_map(|(header, cell)| cell_value(cell).map(|value| (header.clone(), value)))
            .collect();
        (!row.is_empty()).then_some(row)
    })
    .collect()
}

fn is_blank_row(cells: &[Data]) -> bool {
    cells.iter().all(|cell| cell_value(cell).is_none())
}

fn unique_headers(cells: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    cells
        .iter()
        .map(|cell| {
            let text = cell.to_string();
            let base = if text.trim().is_empty() {
                EMPTY_HEADER.to_owned()
            } else {
                text
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let header = if *count == 0 {
                base
            } else {
                format!("{base}_{count}")
            };
            *count += 1;
            header
        })
        .collect()
}

fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            (!text.is_empty()).then(|| CellValue::Text(text.clone()))
        }
        Data::Float(number) => Some(CellValue::Number(*number)),
        Data::Int(number) => Some(CellValue::Number(*number as f64)),
        Data::DateTime(moment) => Some(CellValue::Number(moment.as_f64())),
        Data::Bool(flag) => Some(CellValue::Bool(*flag)),
        Data::Error(_) | Data::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn text(value: &str) -> Data {
        Data::String(value.to_owned())
    }

    fn sheet(rows: &[&[Data]]) -> Range<Data> {
        let height = u32::try_from(rows.len()).expect("row count fits");
        let width = rows
            .iter()
            .map(|row| row.len())
            .max()
            .and_then(|len| u32::try_from(len).ok())
            .expect("at least one column");
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let position = (
                    u32::try_from(row_index).expect("row fits"),
                    u32::try_from(col_index).expect("col fits"),
                );
                range.set_value(position, cell.clone());
            }
        }
        range
    }

    #[rstest]
    fn first_row_supplies_headers() {
        let range = sheet(&[
            &[text("번호"), text("이름")],
            &[Data::Float(1.0), text("Kim")],
            &[Data::Int(2), text("Lee")],
        ]);
        let rows = rows_from_range(&range);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["이름"], CellValue::Text("Kim".to_owned()));
        assert_eq!(rows[1]["번호"], CellValue::Number(2.0));
    }

    #[rstest]
    fn leading_blank_rows_are_skipped() {
        let range = sheet(&[
            &[Data::Empty, Data::Empty],
            &[text("name"), text("memo")],
            &[text("Park"), Data::Empty],
        ]);
        let rows = rows_from_range(&range);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0]["name"], CellValue::Text("Park".to_owned()));
    }

    #[rstest]
    fn blank_and_repeated_headers_get_suffixes() {
        let range = sheet(&[
            &[text("이름"), Data::Empty, text("이름"), Data::Empty, text("이름")],
            &[text("a"), text("b"), text("c"), text("d"), text("e")],
        ]);
        let rows = rows_from_range(&range);
        let headers: Vec<&str> = rows[0].keys().map(String::as_str).collect();

        assert_eq!(
            headers,
            ["__EMPTY", "__EMPTY_1", "이름", "이름_1", "이름_2"]
        );
        assert_eq!(rows[0]["이름_1"], CellValue::Text("c".to_owned()));
        assert_eq!(rows[0]["__EMPTY_1"], CellValue::Text("d".to_owned()));
    }

    #[rstest]
    fn rows_without_values_are_dropped() {
        let range = sheet(&[
            &[text("이름")],
            &[text("Kim")],
            &[Data::Empty],
            &[text("")],
            &[text("Lee")],
        ]);
        let rows = rows_from_range(&range);
        assert_eq!(rows.len(), 2);
    }

    #[rstest]
    fn empty_sheet_yields_no_rows() {
        let range = sheet(&[&[Data::Empty]]);
        assert!(rows_from_range(&range).is_empty());
    }

    #[rstest]
    fn header_only_sheet_yields_no_rows() {
        let range = sheet(&[&[text("이름")]]);
        assert!(rows_from_range(&range).is_empty());
    }

    #[tokio::test]
    async fn garbage_bytes_are_unreadable() {
        let err = CalamineSpreadsheetReader
            .read_rows(b"definitely not a workbook".to_vec())
            .await
            .expect_err("not a workbook");
        assert!(matches!(err, SpreadsheetReaderError::Unreadable { .. }));
    }
}
