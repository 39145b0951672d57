//! PDF text extraction backed by `pdf-extract`

use super::{ExtractError, TextExtractor};
use regex::Regex;
use std::panic;
use std::sync::OnceLock;

/// Extracts the text stream of a PDF, appending any link targets found in the raw bytes
/// (profile URLs often live only in link annotations).
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        // pdf-extract panics on some malformed documents
        let result = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|_| ExtractError::Pdf("malformed document".to_string()))?;
        let mut text = result.map_err(|e| ExtractError::Pdf(e.to_string()))?;

        let links = extract_hyperlinks(bytes);
        if !links.is_empty() {
            text.push('\n');
            text.push_str(&links.join("\n"));
        }
        Ok(text)
    }
}

/// Unique (case-insensitive) http(s) URLs appearing in the raw document bytes
fn extract_hyperlinks(data: &[u8]) -> Vec<String> {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    let url_re = URL_RE.get_or_init(|| Regex::new(r#"https?://[^\s<>'"\)]+"#).unwrap());

    let raw = String::from_utf8_lossy(data);
    let mut links: Vec<String> = Vec::new();
    for m in url_re.find_iter(&raw) {
        let value = m.as_str().to_string();
        if !links.iter().any(|existing| existing.eq_ignore_ascii_case(&value)) {
            links.push(value);
        }
    }
    links
}
