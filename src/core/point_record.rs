use super::Category;

/// Ein aus einer CSV-Zeile gelesener Kartenpunkt.
///
/// Koordinaten werden nicht validiert: nicht-numerische Eingaben
/// ergeben `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    /// Breitengrad in Dezimalgrad
    pub lat: f64,
    /// Längengrad in Dezimalgrad
    pub lng: f64,
    /// Anzeigename (darf leer sein)
    pub title: String,
    /// Freitext, `|` ist ein weicher Zeilenumbruch
    pub description: String,
    /// Kategorie (Lieu oder Action)
    pub category: Category,
}

impl PointRecord {
    /// Zerlegt die Beschreibung an `|` in Anzeigezeilen.
    pub fn description_lines(&self) -> Vec<String> {
        self.description.split('|').map(str::to_string).collect()
    }

    /// `true`, wenn beide Koordinaten endliche Zahlen sind.
    pub fn has_finite_position(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(description: &str) -> PointRecord {
        PointRecord {
            lat: 46.5,
            lng: 6.6,
            title: "A".into(),
            description: description.into(),
            category: Category::Lieu,
        }
    }

    #[test]
    fn pipes_become_lines() {
        assert_eq!(
            record("Rassemblement|13h00").description_lines(),
            vec!["Rassemblement", "13h00"]
        );
        assert_eq!(record("").description_lines(), vec![""]);
    }

    #[test]
    fn nan_position_is_not_finite() {
        let mut r = record("x");
        assert!(r.has_finite_position());
        r.lat = f64::NAN;
        assert!(!r.has_finite_position());
    }
}
