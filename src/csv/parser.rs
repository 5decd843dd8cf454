//! Parser für einzelne CSV-Zeilen.

use crate::core::{Category, PointRecord};
use thiserror::Error;

/// Mindestanzahl an Spalten (lat, lng, title, description).
pub const MIN_COLUMNS: usize = 4;

/// Fehler beim Parsen einer einzelnen Datenzeile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvLineError {
    /// Zu wenige Spalten für einen Datensatz
    #[error("Zeile hat {columns} Spalte(n), erwartet werden mindestens 4")]
    MalformedRow {
        /// Gefundene Spaltenanzahl
        columns: usize,
    },
}

/// Zerlegt eine Zeile in getrimmte Felder.
///
/// Ein `"` schaltet den Quote-Modus um und wird selbst nicht übernommen;
/// ein `,` außerhalb von Quotes beendet das aktuelle Feld.
pub fn split_csv_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Parsed eine Datenzeile (ohne Zeilenumbruch) zu einem `PointRecord`.
///
/// Nicht-numerische Koordinaten ergeben `NaN`, kein Fehler. Eine fehlende
/// oder leere Typ-Spalte ergibt `Category::Lieu`.
pub fn parse_csv_line(line: &str) -> Result<PointRecord, CsvLineError> {
    let fields = split_csv_fields(line);
    if fields.len() < MIN_COLUMNS {
        return Err(CsvLineError::MalformedRow {
            columns: fields.len(),
        });
    }

    Ok(PointRecord {
        lat: parse_float_lenient(&fields[0]),
        lng: parse_float_lenient(&fields[1]),
        title: fields[2].clone(),
        description: strip_outer_quote(&fields[3]).to_string(),
        category: Category::parse(fields.get(4).map(String::as_str)),
    })
}

/// Entfernt je ein führendes und ein abschließendes `"`.
fn strip_outer_quote(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

/// Liest das längste Zahl-Präfix (`"46.5abc"` → 46.5); ohne Zahl → `NaN`.
///
/// `Infinity` mit optionalem Vorzeichen ergibt ±∞ (nicht platzierbar).
fn parse_float_lenient(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests;
