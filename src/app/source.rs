//! CSV-Quelle (HTTP oder Datei), Abruf und Hintergrund-Ladejob.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Fehler, die einen kompletten Ladevorgang abbrechen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Server antwortete mit einem Nicht-Erfolgs-Status
    #[error("Erreur HTTP {status}")]
    Transport {
        /// HTTP-Statuscode
        status: u16,
    },
    /// Verbindung oder Übertragung fehlgeschlagen
    #[error("Anfrage an {url} fehlgeschlagen: {message}")]
    Request {
        /// Angefragte URL
        url: String,
        /// Fehlerbeschreibung
        message: String,
    },
    /// Lokale Datei nicht lesbar
    #[error("Datei {} konnte nicht gelesen werden: {message}", .path.display())]
    Io {
        /// Dateipfad
        path: PathBuf,
        /// Fehlerbeschreibung
        message: String,
    },
    /// Inhalt ist kein gültiger UTF-8-Text
    #[error("Inhalt ist kein gültiges UTF-8: {0}")]
    Decode(String),
    /// Ladejob wurde beendet, ohne ein Ergebnis zu liefern
    #[error("Ladevorgang ohne Ergebnis abgebrochen")]
    Interrupted,
}

/// Ort, von dem die CSV-Datei geladen wird.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    /// HTTP(S)-URL
    Http(String),
    /// Lokaler Dateipfad
    File(PathBuf),
}

impl CsvSource {
    /// Interpretiert einen Locator: `http://` / `https://` → URL, sonst Pfad.
    pub fn from_locator(locator: &str) -> Self {
        let trimmed = locator.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            CsvSource::Http(trimmed.to_string())
        } else {
            CsvSource::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for CsvSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvSource::Http(url) => f.write_str(url),
            CsvSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Lädt den Inhalt einer Quelle als Text (blockierend).
pub fn fetch_csv(source: &CsvSource) -> Result<String, LoadError> {
    let bytes = match source {
        CsvSource::Http(url) => fetch_http(url)?,
        CsvSource::File(path) => std::fs::read(path).map_err(|e| LoadError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?,
    };
    decode_text(bytes)
}

fn fetch_http(url: &str) -> Result<Vec<u8>, LoadError> {
    let request_error = |e: reqwest::Error| LoadError::Request {
        url: url.to_string(),
        message: e.to_string(),
    };

    let response = reqwest::blocking::get(url).map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Transport {
            status: status.as_u16(),
        });
    }
    let body = response.bytes().map_err(request_error)?;
    Ok(body.to_vec())
}

/// Dekodiert den Rohinhalt als UTF-8.
pub fn decode_text(bytes: Vec<u8>) -> Result<String, LoadError> {
    String::from_utf8(bytes).map_err(|e| LoadError::Decode(e.utf8_error().to_string()))
}

/// Hintergrund-Ladejob: holt eine Quelle in einem Worker-Thread.
///
/// Das Ergebnis wird über einen Kanal an den UI-Thread übergeben, der
/// allein Gruppen und Filterzustand verändert.
pub struct LoadJob {
    source: CsvSource,
    receiver: Receiver<Result<String, LoadError>>,
}

impl LoadJob {
    /// Startet den Abruf im Hintergrund.
    pub fn spawn(source: CsvSource) -> Self {
        let (sender, receiver) = mpsc::channel();
        let worker_source = source.clone();
        thread::spawn(move || {
            let result = fetch_csv(&worker_source);
            // Empfänger kann bereits verworfen sein (App beendet)
            let _ = sender.send(result);
        });
        Self { source, receiver }
    }

    /// Quelle des Jobs.
    pub fn source(&self) -> &CsvSource {
        &self.source
    }

    /// Liefert das Ergebnis, sobald es vorliegt (nicht blockierend).
    pub fn try_take(&self) -> Option<Result<String, LoadError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Interrupted)),
        }
    }

    /// Wartet höchstens `timeout` auf das Ergebnis.
    pub fn wait(&self, timeout: Duration) -> Option<Result<String, LoadError>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(mpsc::RecvTimeoutError::Timeout) => None,
            Err(mpsc::RecvTimeoutError::Disconnected) => Some(Err(LoadError::Interrupted)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Beantwortet genau eine HTTP-Anfrage auf Loopback mit der gegebenen Antwort.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Port binden");
        let port = listener.local_addr().expect("Lokale Adresse").port();
        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buffer) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buffer[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        });
        format!("http://127.0.0.1:{port}/markers.csv")
    }

    #[test]
    fn http_not_found_maps_to_transport_error() {
        let url = serve_once("404 Not Found", "");

        let err = fetch_csv(&CsvSource::from_locator(&url)).expect_err("404 erwartet");

        assert_eq!(err, LoadError::Transport { status: 404 });
    }

    #[test]
    fn http_success_returns_body_text() {
        let url = serve_once("200 OK", "lat,lng,title,description,type\n46.5,6.6,A,B,lieu\n");

        let text = fetch_csv(&CsvSource::from_locator(&url)).expect("Abruf sollte gelingen");

        assert!(text.ends_with("46.5,6.6,A,B,lieu\n"));
    }

    #[test]
    fn locator_detects_urls_and_paths() {
        assert_eq!(
            CsvSource::from_locator("https://example.org/markers.csv"),
            CsvSource::Http("https://example.org/markers.csv".into())
        );
        assert_eq!(
            CsvSource::from_locator("HTTP://example.org/a.csv"),
            CsvSource::Http("HTTP://example.org/a.csv".into())
        );
        assert_eq!(
            CsvSource::from_locator(" markers.csv "),
            CsvSource::File(PathBuf::from("markers.csv"))
        );
    }

    #[test]
    fn invalid_utf8_is_decode_error() {
        let err = decode_text(vec![0x66, 0xff, 0x6f]).expect_err("Dekodieren sollte fehlschlagen");
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("csv_marker_map_does_not_exist.csv");
        let err = fetch_csv(&CsvSource::File(path.clone())).expect_err("Datei fehlt");
        match err {
            LoadError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("Unerwarteter Fehler: {other:?}"),
        }
    }

    #[test]
    fn transport_error_message_carries_status() {
        assert_eq!(LoadError::Transport { status: 404 }.to_string(), "Erreur HTTP 404");
    }

    #[test]
    fn load_job_reads_file_in_background() {
        let path = std::env::temp_dir().join("csv_marker_map_load_job.csv");
        std::fs::write(&path, "lat,lng,title,description,type\n46.5,6.6,A,B,action\n")
            .expect("Testdatei schreiben");

        let job = LoadJob::spawn(CsvSource::File(path.clone()));
        let result = job
            .wait(Duration::from_secs(10))
            .expect("Job sollte ein Ergebnis liefern");
        assert!(result.expect("Laden sollte gelingen").contains("46.5,6.6"));

        let _ = std::fs::remove_file(path);
    }
}
