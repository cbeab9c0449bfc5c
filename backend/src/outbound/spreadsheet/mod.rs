//! Spreadsheet decoding adapters.

mod calamine_reader;

pub use calamine_reader::{CalamineSpreadsheetReader, rows_from_range};
