//! Zustandsautomat des Detail-Panels (Seitenleiste).

use crate::core::DetailContent;

/// Sichtbarkeit des Panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Panel ist ausgeblendet
    #[default]
    Closed,
    /// Panel ist sichtbar
    Open,
}

/// Detail-Panel: Inhalt plus Offen/Geschlossen-Zustand.
///
/// Nur `open_with` ändert den Inhalt; Schließen behält ihn bei.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPanel {
    state: PanelState,
    content: Option<DetailContent>,
}

impl DetailPanel {
    /// Erstellt ein geschlossenes, leeres Panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt den Inhalt und öffnet das Panel.
    pub fn open_with(&mut self, content: DetailContent) {
        self.content = Some(content);
        self.state = PanelState::Open;
    }

    /// Öffnet das Panel ohne Inhaltsänderung.
    pub fn reopen(&mut self) {
        self.state = PanelState::Open;
    }

    /// Schließt das Panel; der Inhalt bleibt erhalten.
    pub fn close(&mut self) {
        self.state = PanelState::Closed;
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// `true`, wenn das Panel offen ist.
    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// Zuletzt gesetzter Inhalt.
    pub fn content(&self) -> Option<&DetailContent> {
        self.content.as_ref()
    }
}
