//! Parsen eines kompletten CSV-Dokuments mit Fehlersammlung pro Zeile.

use super::parser::{parse_csv_line, CsvLineError};
use crate::core::PointRecord;

/// Erfolgreich gelesene Datenzeile.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// Zeilennummer in der Quelldatei, 1-basiert
    pub line_number: usize,
    /// Gelesener Datensatz
    pub record: PointRecord,
}

/// Datenzeile, die nicht gelesen werden konnte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// Zeilennummer in der Quelldatei, 1-basiert
    pub line_number: usize,
    /// Ursache
    pub reason: CsvLineError,
}

impl std::fmt::Display for LineFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zeile {}: {}", self.line_number, self.reason)
    }
}

/// Ergebnis des Dokument-Parsings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCsv {
    /// Kopfzeile (wird nicht validiert)
    pub header: Option<String>,
    /// Gelesene Datensätze in Dokument-Reihenfolge
    pub records: Vec<ParsedLine>,
    /// Fehlerhafte Zeilen; das Parsen läuft danach weiter
    pub failures: Vec<LineFailure>,
}

/// Parsed den Text einer CSV-Datei.
///
/// Die erste nicht-leere Zeile ist die Kopfzeile und wird verworfen. Leere bzw.
/// nur aus Whitespace bestehende Zeilen werden übersprungen. Zeilennummern
/// zählen ab dem Dateianfang, führende Leerzeilen eingeschlossen.
pub fn parse_csv_document(text: &str) -> ParsedCsv {
    let mut parsed = ParsedCsv::default();
    let mut lines = text
        .split('\n')
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    parsed.header = lines.next().map(|(_, header)| header.trim().to_string());

    for (line_number, line) in lines {
        match parse_csv_line(line) {
            Ok(record) => parsed.records.push(ParsedLine {
                line_number,
                record,
            }),
            Err(reason) => parsed.failures.push(LineFailure {
                line_number,
                reason,
            }),
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    const SAMPLE: &str = "lat,lng,title,description,type\n\
        46.5197,6.6323,\"Place de la Riponne\",\"Rassemblement|13h00\",\"action\"\n\
        46.2044,6.1432,\"Siège SSP\",\"Bureau régional\",\"\"\n";

    #[test]
    fn header_is_dropped_and_rows_parsed() {
        let parsed = parse_csv_document(SAMPLE);

        assert_eq!(parsed.header.as_deref(), Some("lat,lng,title,description,type"));
        assert_eq!(parsed.records.len(), 2);
        assert!(parsed.failures.is_empty());
        assert_eq!(parsed.records[0].line_number, 2);
        assert_eq!(parsed.records[0].record.category, Category::Action);
        assert_eq!(parsed.records[1].record.category, Category::Lieu);
    }

    #[test]
    fn header_is_not_validated() {
        let parsed = parse_csv_document("46.0,6.0,Kein,Header\n46.5,6.6,A,B,action");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].record.title, "A");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "h\n\n46.5,6.6,A,B\n   \n\t\n46.6,6.7,C,D,action\n";
        let parsed = parse_csv_document(text);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1].line_number, 6);
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let text = "lat,lng,title,description,type\r\n46.5,6.6,A,B,action\r\n46.6,6.7,C,D,\r\n";
        let parsed = parse_csv_document(text);
        assert_eq!(parsed.header.as_deref(), Some("lat,lng,title,description,type"));
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].record.category, Category::Action);
        assert_eq!(parsed.records[1].record.category, Category::Lieu);
    }

    #[test]
    fn malformed_row_does_not_stop_following_rows() {
        let text = "h\n46.5,6.6,A,B\n46.5,6.6\n46.7,6.8,C,D,action\n";
        let parsed = parse_csv_document(text);

        assert_eq!(parsed.records.len(), 2);
        assert_eq!(
            parsed.failures,
            vec![LineFailure {
                line_number: 3,
                reason: CsvLineError::MalformedRow { columns: 2 },
            }]
        );
        assert_eq!(parsed.failures[0].to_string().split(':').next(), Some("Zeile 3"));
    }

    #[test]
    fn empty_or_header_only_document_has_no_records() {
        assert_eq!(parse_csv_document(""), ParsedCsv::default());
        let parsed = parse_csv_document("lat,lng,title,description,type\n");
        assert!(parsed.records.is_empty());
        assert!(parsed.failures.is_empty());
    }

    #[test]
    fn leading_blank_lines_count_towards_line_numbers() {
        let text = "\n\r\n  \nlat,lng,title,description,type\n46.5,6.6,A,B\nkaputt\n";
        let parsed = parse_csv_document(text);

        assert_eq!(parsed.header.as_deref(), Some("lat,lng,title,description,type"));
        assert_eq!(parsed.records[0].line_number, 5);
        assert_eq!(parsed.failures[0].line_number, 6);
    }
}
