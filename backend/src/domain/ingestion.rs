//! Name extraction from tabular uploads.
//!
//! The spreadsheet adapter hands over rows keyed by header text; this module
//! finds the name column and pulls out usable names.

use std::collections::BTreeMap;

use super::Error;

/// Header texts recognised as the name column, in priority order.
pub const NAME_COLUMN_CANDIDATES: [&str; 6] = ["이름", "name", "Name", "NAME", "성명", "학생명"];

/// Value of one non-empty spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// One data row keyed by column header. Empty cells are absent.
pub type TabularRow = BTreeMap<String, CellValue>;

/// Names pulled from an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedNames {
    /// Trimmed names in row order.
    pub names: Vec<String>,
    /// Header of the column the names came from.
    pub column_used: String,
}

/// Reasons an upload yields no names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestionError {
    /// The worksheet had no data rows.
    #[error("엑셀 파일에 데이터가 없습니다.")]
    EmptyWorkbook,
    /// None of [`NAME_COLUMN_CANDIDATES`] is a header of the first row.
    #[error("엑셀 파일에서 \"이름\" 열을 찾을 수 없습니다.")]
    NameColumnNotFound,
    /// The name column held no non-blank text.
    #[error("유효한 이름이 없습니다.")]
    NoValidNames,
}

impl From<IngestionError> for Error {
    fn from(value: IngestionError) -> Self {
        Self::invalid_request(value.to_string())
    }
}

/// Extract the name column from `rows`.
///
/// The column is chosen by looking at the first row only. Non-text and
/// blank cells are skipped; text cells are trimmed.
///
/// # Examples
/// ```
/// use roster::domain::{CellValue, TabularRow, extract_names};
///
/// let rows: Vec<TabularRow> = ["Kim", " ", "Lee"]
///     .into_iter()
///     .map(|name| TabularRow::from([("이름".to_owned(), CellValue::Text(name.to_owned()))]))
///     .collect();
/// let extracted = extract_names(&rows).unwrap();
/// assert_eq!(extracted.names, ["Kim", "Lee"]);
/// assert_eq!(extracted.column_used, "이름");
/// ```
pub fn extract_names(rows: &[TabularRow]) -> Result<ExtractedNames, IngestionError> {
    let first = rows.first().ok_or(IngestionError::EmptyWorkbook)?;
    let column = NAME_COLUMN_CANDIDATES
        .iter()
        .find(|candidate| first.contains_key(**candidate))
        .ok_or(IngestionError::NameColumnNotFound)?;

    let names: Vec<String> = rows
        .iter()
        .filter_map(|row| match row.get(*column) {
            Some(CellValue::Text(text)) => Some(text.trim()),
            _ => None,
        })
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect();

    if names.is_empty() {
        return Err(IngestionError::NoValidNames);
    }
    Ok(ExtractedNames {
        names,
        column_used: (*column).to_owned(),
    })
}
