//! Parsing of free-form model responses

use std::collections::BTreeMap;

/// Section name used for content preceding the first header
pub const GENERAL_SECTION: &str = "general";

/// Split a response into sections opened by `**Header**` lines.
///
/// Header names are lowercased with the asterisks removed. A repeated header
/// keeps the last section's content.
pub fn parse_sections(response: &str) -> BTreeMap<String, String> {
    let mut sections = BTreeMap::new();
    let mut current = GENERAL_SECTION.to_string();
    let mut buffer: Vec<&str> = Vec::new();

    for line in response.split('\n') {
        let trimmed = line.trim();
        if is_header(trimmed) {
            if !buffer.is_empty() {
                sections.insert(current, buffer.join("\n").trim().to_string());
            }
            current = trimmed.replace("**", "").trim().to_lowercase();
            buffer = Vec::new();
        } else {
            buffer.push(line);
        }
    }

    if !buffer.is_empty() {
        sections.insert(current, buffer.join("\n").trim().to_string());
    }

    sections
}

fn is_header(trimmed: &str) -> bool {
    trimmed.starts_with("**") && trimmed.ends_with("**")
}

/// Bullet lines of a suggestions response, with the marker stripped
pub fn parse_suggestions(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| line.contains(['•', '-', '*']))
        .map(|line| {
            line.strip_prefix(['•', '-', '*'])
                .unwrap_or(line)
                .trim()
                .to_string()
        })
        .collect()
}
