//! Port for decoding uploaded spreadsheets.
//!
//! Adapters turn the first worksheet of a workbook into header-keyed rows.
//! Everything beyond that (which column holds names, what counts as a name)
//! is decided by the domain.

use async_trait::async_trait;

use crate::domain::TabularRow;

use super::define_port_error;

define_port_error! {
    /// Errors raised while decoding a workbook.
    pub enum SpreadsheetReaderError {
        /// The bytes are not a workbook the adapter understands.
        Unreadable { message: String } =>
            "workbook could not be read: {message}",
        /// The workbook contains no worksheet.
        NoWorksheet => "workbook has no worksheets",
    }
}

/// Port for reading rows from an uploaded workbook.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpreadsheetReader: Send + Sync {
    /// Decode the first worksheet of `workbook` into rows.
    async fn read_rows(&self, workbook: Vec<u8>)
    -> Result<Vec<TabularRow>, SpreadsheetReaderError>;
}

/// Fixture reader returning a fixed set of rows regardless of input.
#[derive(Debug, Default, Clone)]
pub struct FixtureSpreadsheetReader {
    rows: Vec<TabularRow>,
}

impl FixtureSpreadsheetReader {
    /// Reader that yields `rows` for every workbook.
    pub fn with_rows(rows: Vec<TabularRow>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl SpreadsheetReader for FixtureSpreadsheetReader {
    async fn read_rows(
        &self,
        _workbook: Vec<u8>,
    ) -> Result<Vec<TabularRow>, SpreadsheetReaderError> {
        Ok(self.rows.clone())
    }
}
