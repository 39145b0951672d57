//! Resume text extraction.
//!
//! Turns an uploaded file into the plain, whitespace-normalized text the scoring
//! engine consumes. PDF support is best effort: layout is discarded and only the
//! text stream is kept.

mod pdf;

pub use pdf::PdfTextExtractor;

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Default minimum number of non-whitespace-trimmed characters for usable text
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 50;
/// Default upload size limit in megabytes
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Unsupported file type: {0} (expected .pdf, .txt or .md)")]
    UnsupportedFormat(String),
    #[error("Failed to parse PDF: {0}. Please ensure the file is a valid PDF.")]
    Pdf(String),
    #[error("File size {size_mb:.2} MB exceeds the {limit_mb} MB limit")]
    FileTooLarge { size_mb: f64, limit_mb: u64 },
    #[error(
        "Unable to extract sufficient text ({found} characters, need {required}). \
         Please ensure the PDF contains selectable text (not scanned images)."
    )]
    InsufficientText { found: usize, required: usize },
}

/// Something that can turn raw file bytes into text
pub trait TextExtractor: Send + Sync {
    /// Short format name for logs
    fn name(&self) -> &'static str;

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// UTF-8 text files (invalid sequences are replaced)
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Limits applied when extracting a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractLimits {
    pub min_text_length: usize,
    pub max_file_size_mb: u64,
}

impl Default for ExtractLimits {
    fn default() -> Self {
        Self {
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
        }
    }
}

/// Pick an extractor by file extension; falls back to sniffing the PDF header.
pub fn extractor_for_path(path: &Path, bytes: &[u8]) -> Result<Box<dyn TextExtractor>, ExtractError> {
    if is_pdf(path, bytes) {
        return Ok(Box::new(PdfTextExtractor));
    }
    let ext = extension_lowercase(path);
    match ext.as_deref() {
        Some("txt") | Some("text") | Some("md") => Ok(Box::new(PlainTextExtractor)),
        _ => Err(ExtractError::UnsupportedFormat(path.display().to_string())),
    }
}

/// PDF by extension (any case) or by `%PDF` magic bytes
pub fn is_pdf(path: &Path, bytes: &[u8]) -> bool {
    extension_lowercase(path).as_deref() == Some("pdf") || bytes.starts_with(b"%PDF")
}

pub fn file_size_mb(len: u64) -> f64 {
    len as f64 / (1024.0 * 1024.0)
}

/// Read, extract and normalize a resume file, rejecting unusable results.
pub fn extract_file(path: &Path, limits: &ExtractLimits) -> Result<String, ExtractError> {
    let io_error = |source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    };

    // Size comes from metadata so oversized files are never read into memory
    let size_mb = file_size_mb(fs::metadata(path).map_err(io_error)?.len());
    if size_mb > limits.max_file_size_mb as f64 {
        return Err(ExtractError::FileTooLarge {
            size_mb,
            limit_mb: limits.max_file_size_mb,
        });
    }

    let bytes = fs::read(path).map_err(io_error)?;

    let extractor = extractor_for_path(path, &bytes)?;
    debug!(
        path = %path.display(),
        extractor = extractor.name(),
        bytes = bytes.len(),
        "extracting resume text"
    );
    let text = normalize_whitespace(&extractor.extract(&bytes)?);
    check_sufficient(&text, limits.min_text_length)?;
    Ok(text)
}

/// Reject text too short to be a resume (e.g. scanned image PDFs).
pub fn check_sufficient(text: &str, min_text_length: usize) -> Result<(), ExtractError> {
    let found = text.trim().chars().count();
    if found < min_text_length {
        return Err(ExtractError::InsufficientText {
            found,
            required: min_text_length,
        });
    }
    Ok(())
}

/// Normalize line endings and collapse runs of blank lines and spaces.
pub fn normalize_whitespace(text: &str) -> String {
    static BLANK_LINES: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();
    let blank_lines = BLANK_LINES.get_or_init(|| Regex::new(r"\n{3,}").unwrap());
    let spaces = SPACES.get_or_init(|| Regex::new(r" {2,}").unwrap());

    let text = text.replace("\r\n", "\n");
    let text = blank_lines.replace_all(&text, "\n\n");
    let text = spaces.replace_all(&text, " ");
    text.trim().to_string()
}

fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn normalize_collapses_whitespace() {
        let raw = "  Jane  Doe\r\n\r\n\r\n\r\nEngineer    at   Acme\n\n\nDone  ";
        assert_eq!(normalize_whitespace(raw), "Jane Doe\n\nEngineer at Acme\n\nDone");
    }

    #[test]
    fn normalize_keeps_single_blank_line() {
        assert_eq!(normalize_whitespace("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn is_pdf_by_extension_or_magic() {
        assert!(is_pdf(Path::new("resume.PDF"), b""));
        assert!(is_pdf(Path::new("resume.bin"), b"%PDF-1.7"));
        assert!(!is_pdf(Path::new("resume.txt"), b"hello"));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = extractor_for_path(Path::new("resume.docx"), b"PK").err().unwrap();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn file_size_in_megabytes() {
        assert_eq!(file_size_mb(1024 * 1024), 1.0);
        assert_eq!(file_size_mb(0), 0.0);
    }

    #[test]
    fn extract_text_file() {
        let body = "Jane Doe\n\n\n\nSenior Engineer with  ten years building payment systems.";
        let file = write_temp(".txt", body.as_bytes());
        let text = extract_file(file.path(), &ExtractLimits::default()).unwrap();
        assert_eq!(
            text,
            "Jane Doe\n\nSenior Engineer with ten years building payment systems."
        );
    }

    #[test]
    fn short_text_is_insufficient() {
        let file = write_temp(".txt", b"Jane Doe");
        let err = extract_file(file.path(), &ExtractLimits::default()).unwrap_err();
        match err {
            ExtractError::InsufficientText { found, required } => {
                assert_eq!(found, 8);
                assert_eq!(required, 50);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn oversized_file_is_rejected() {
        let file = write_temp(".txt", &vec![b'a'; 2 * 1024 * 1024]);
        let limits = ExtractLimits {
            min_text_length: 0,
            max_file_size_mb: 1,
        };
        let err = extract_file(file.path(), &limits).unwrap_err();
        assert!(matches!(err, ExtractError::FileTooLarge { limit_mb: 1, .. }));
        assert!(err.to_string().contains("2.00 MB"));
    }

    #[test]
    fn size_limit_uses_metadata_before_reading() {
        // Sparse file: metadata reports 512 MB without the bytes ever being written
        let file = NamedTempFile::with_suffix(".pdf").unwrap();
        file.as_file().set_len(512 * 1024 * 1024).unwrap();
        let err = extract_file(file.path(), &ExtractLimits::default()).unwrap_err();
        match err {
            ExtractError::FileTooLarge { size_mb, limit_mb } => {
                assert_eq!(size_mb, 512.0);
                assert_eq!(limit_mb, DEFAULT_MAX_FILE_SIZE_MB);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = extract_file(Path::new("/definitely/not/here.txt"), &ExtractLimits::default())
            .unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
        assert!(err.to_string().contains("Failed to read"));
    }
}
