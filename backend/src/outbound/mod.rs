//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: JSON documents in the data directory
//! - **spreadsheet**: workbook decoding for roster uploads
//!
//! Adapters are thin translators between domain types and file formats.
//! They contain no business logic.

pub mod persistence;
pub mod spreadsheet;
