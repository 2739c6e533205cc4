//! Building and persisting one itinerary document per booking.

use crate::booking::Booking;
use crate::canvas::{Canvas, PdfCanvas};
use crate::config::Config;
use crate::font::Font;
use crate::format::itinerary_file_name;
use crate::info::Info;
use crate::itinerary::{AssemblyReport, Itinerary};
use crate::layout::PageGeometry;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Tells apart the temporary files of concurrent writes from one process
static PARTIAL_WRITES: AtomicUsize = AtomicUsize::new(0);

/// A document that was written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedItinerary {
    pub path: PathBuf,
    pub file_name: String,
    pub pages: usize,
    pub bytes: usize,
}

impl GeneratedItinerary {
    /// Where the document can be fetched from once `base` serves the output directory
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.file_name)
    }

    pub fn success_response(&self, base: &str) -> Value {
        json!({
            "message": "PDF generated successfully",
            "url": self.url(base),
        })
    }
}

/// The report for a request that didn't produce a document
pub fn error_response(err: &Error) -> Value {
    let message = match err {
        Error::InvalidInput(_) | Error::Json(_) => err.to_string(),
        _ => format!("Failed to generate PDF: {err}"),
    };
    json!({ "error": message })
}

/// Turns bookings into itinerary documents in the configured output directory
pub struct ItineraryGenerator {
    config: Config,
}

impl ItineraryGenerator {
    pub fn new(config: Config) -> ItineraryGenerator {
        ItineraryGenerator { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn canvas(&self) -> Result<PdfCanvas> {
        let geometry = PageGeometry::a4();
        match &self.config.fonts {
            Some(paths) => {
                let regular = Font::load(std::fs::read(&paths.regular)?)?;
                let bold = Font::load(std::fs::read(&paths.bold)?)?;
                Ok(PdfCanvas::with_fonts(geometry, regular, bold))
            }
            None => Ok(PdfCanvas::standard(geometry)),
        }
    }

    /// Lay out and serialise the document without touching the file system
    pub fn render(
        &self,
        booking: &Booking,
        created: DateTime<Utc>,
    ) -> Result<(Vec<u8>, AssemblyReport)> {
        booking.validate()?;

        let branding = &self.config.branding;
        let mut canvas = self.canvas()?;
        let mut info = Info::for_itinerary(
            &branding.company_name,
            &booking.customer_name,
            &booking.destination,
        );
        info.created(created.fixed_offset());
        canvas.surface_mut().set_info(info);

        let report = Itinerary::new(booking, branding).render(&mut canvas);
        let bytes = canvas.finish()?;
        Ok((bytes, report))
    }

    pub fn generate(&self, booking: &Booking) -> Result<GeneratedItinerary> {
        self.generate_at(booking, Utc::now())
    }

    /// Build the document as of `now`, which also names the file
    pub fn generate_at(
        &self,
        booking: &Booking,
        now: DateTime<Utc>,
    ) -> Result<GeneratedItinerary> {
        let started = Instant::now();
        let (bytes, report) = self.render(booking, now)?;
        let rendered = started.elapsed();

        let dir = &self.config.output.dir;
        std::fs::create_dir_all(dir).map_err(|source| Error::Output {
            path: dir.clone(),
            source,
        })?;
        if self.config.output.purge_existing {
            purge_documents(dir);
        }

        let file_name =
            itinerary_file_name(&booking.customer_name, &booking.destination, now.timestamp());
        let path = dir.join(&file_name);
        write_atomically(&path, &bytes)?;

        log::info!(
            "wrote {} ({} pages, {} bytes) in {:?}, layout took {:?}",
            path.display(),
            report.pages,
            bytes.len(),
            started.elapsed(),
            rendered
        );
        Ok(GeneratedItinerary {
            path,
            file_name,
            pages: report.pages,
            bytes: bytes.len(),
        })
    }
}

/// Write to a sibling temporary file and rename it into place. The temporary name is unique
/// per process and per write, and it is removed again whenever the write doesn't land.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let partial = path.with_extension(format!(
        "pdf.{}-{}.part",
        std::process::id(),
        PARTIAL_WRITES.fetch_add(1, Ordering::Relaxed)
    ));
    let result = std::fs::write(&partial, bytes).and_then(|()| std::fs::rename(&partial, path));
    if let Err(source) = result {
        if let Err(e) = std::fs::remove_file(&partial) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("couldn't remove {}: {e}", partial.display());
            }
        }
        return Err(Error::Output {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Remove earlier documents from the output directory. Failures are logged, not fatal.
fn purge_documents(dir: &Path) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("couldn't list {} for purging: {e}", dir.display());
            return;
        }
    };
    let mut removed = 0;
    for path in entries.filter_map(|entry| entry.ok()).map(|entry| entry.path()) {
        if path.extension().and_then(|ext| ext.to_str()) != Some("pdf") {
            continue;
        }
        match std::fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => log::warn!("couldn't remove {}: {e}", path.display()),
        }
    }
    log::debug!("purged {removed} earlier documents from {}", dir.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::tests::SAMPLE;
    use crate::config::OutputConfig;
    use pretty_assertions::assert_eq;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "itinerary-pdf-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn generator(dir: &Path, purge_existing: bool) -> ItineraryGenerator {
        ItineraryGenerator::new(Config {
            output: OutputConfig {
                dir: dir.to_path_buf(),
                purge_existing,
            },
            ..Config::default()
        })
    }

    fn at(unix: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(unix, 0).unwrap()
    }

    #[test]
    fn writes_a_named_pdf() {
        let dir = scratch_dir("named");
        let booking = Booking::from_json(SAMPLE).unwrap();
        let generated = generator(&dir, false)
            .generate_at(&booking, at(1748736000))
            .unwrap();
        assert_eq!(generated.file_name, "Rahul_Singapore_itinerary_1748736000.pdf");
        assert_eq!(generated.pages, 6);

        let bytes = std::fs::read(&generated.path).unwrap();
        assert_eq!(bytes.len(), generated.bytes);
        assert!(bytes.starts_with(b"%PDF"));
        assert!(partial_files(&dir).is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    fn partial_files(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.to_string_lossy().ends_with(".part"))
            .collect()
    }

    #[test]
    fn failed_renames_leave_no_partial_file() {
        let dir = scratch_dir("blocked");
        // a directory already sits where the document should go
        let blocker = dir.join("Rahul_Singapore_itinerary_1748736000.pdf");
        std::fs::create_dir_all(blocker.join("occupied")).unwrap();

        let booking = Booking::from_json(SAMPLE).unwrap();
        let err = generator(&dir, false)
            .generate_at(&booking, at(1748736000))
            .unwrap_err();
        match err {
            Error::Output { path, .. } => assert_eq!(path, blocker),
            other => panic!("expected an output error, got {other:?}"),
        }
        assert!(partial_files(&dir).is_empty());
        assert!(blocker.is_dir());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn concurrent_writes_use_their_own_partial_files() {
        let dir = scratch_dir("concurrent");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("shared.pdf");
        let writers: Vec<_> = (0..8u8)
            .map(|i| {
                let path = path.clone();
                std::thread::spawn(move || write_atomically(&path, &[i; 4096]))
            })
            .collect();
        for writer in writers {
            writer.join().unwrap().unwrap();
        }

        // whichever write landed last, the file holds one complete document
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 4096);
        assert!(bytes.iter().all(|&b| b == bytes[0]));
        assert!(partial_files(&dir).is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn purging_only_removes_documents() {
        let dir = scratch_dir("purge");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("old.pdf"), b"%PDF-old").unwrap();
        std::fs::write(dir.join("notes.txt"), b"keep me").unwrap();

        let booking = Booking::from_json(SAMPLE).unwrap();
        let generated = generator(&dir, true)
            .generate_at(&booking, at(1748736000))
            .unwrap();

        assert!(!dir.join("old.pdf").exists());
        assert!(dir.join("notes.txt").exists());
        assert!(generated.path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn invalid_bookings_write_nothing() {
        let dir = scratch_dir("invalid");
        let mut booking = Booking::from_json(SAMPLE).unwrap();
        booking.destination = String::new();
        let err = generator(&dir, false)
            .generate_at(&booking, at(0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(!dir.exists());
    }

    #[test]
    fn responses() {
        let generated = GeneratedItinerary {
            path: PathBuf::from("pdfs/a.pdf"),
            file_name: "a.pdf".to_string(),
            pages: 6,
            bytes: 100,
        };
        assert_eq!(
            generated.success_response("http://localhost:3002/pdfs/"),
            json!({
                "message": "PDF generated successfully",
                "url": "http://localhost:3002/pdfs/a.pdf",
            })
        );
        assert_eq!(
            error_response(&Error::InvalidInput("destination is empty".to_string())),
            json!({ "error": "Invalid input: destination is empty" })
        );
        assert_eq!(
            error_response(&Error::EmptyDocument),
            json!({ "error": "Failed to generate PDF: the document has no pages" })
        );
    }
}
