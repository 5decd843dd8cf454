//! CSV-Import der Kartenpunkte.
//!
//! Spalten: `lat, lng, title, description, type`. Felder dürfen in
//! doppelte Anführungszeichen gesetzt werden; escapte Anführungszeichen
//! werden nicht unterstützt.

pub mod document;
pub mod parser;

pub use document::{parse_csv_document, LineFailure, ParsedCsv, ParsedLine};
pub use parser::{parse_csv_line, split_csv_fields, CsvLineError};
