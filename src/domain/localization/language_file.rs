//! Language file value object
//!
//! Language files are INI-like:
//!
//! ```text
//! ; comment
//! [strings]
//! 0x0001=Error
//! [savetracks]
//! 1=OK
//! ```
//!
//! Section names are case-insensitive. Ids are decimal or `0x` hex.
//! Values support `\n`, `\t` and `\\` escapes.

use std::collections::HashMap;
use std::str::FromStr;

use crate::domain::error::LanguageFileError;

/// Parsed language file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageFile {
    sections: HashMap<String, HashMap<u32, String>>,
}

impl LanguageFile {
    /// Create an empty language file (every lookup misses)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a string by section and id
    pub fn get(&self, section: &str, id: u32) -> Option<&str> {
        self.sections
            .get(&section.to_lowercase())
            .and_then(|entries| entries.get(&id))
            .map(String::as_str)
    }

    /// Parse language file content
    pub fn parse(content: &str) -> Result<Self, LanguageFileError> {
        let mut sections: HashMap<String, HashMap<u32, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_start_matches('\u{feff}').trim();

            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or(LanguageFileError::UnterminatedSection { line: line_no })?;
                let name = name.trim().to_lowercase();
                sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let section = current
                .as_ref()
                .ok_or(LanguageFileError::EntryOutsideSection { line: line_no })?;

            let (id, value) = line
                .split_once('=')
                .ok_or(LanguageFileError::MissingSeparator { line: line_no })?;
            let id = parse_id(id.trim()).ok_or_else(|| LanguageFileError::InvalidId {
                line: line_no,
                id: id.trim().to_string(),
            })?;

            sections
                .entry(section.clone())
                .or_default()
                .insert(id, unescape(value.trim()));
        }

        Ok(Self { sections })
    }
}

impl FromStr for LanguageFile {
    type Err = LanguageFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_id(text: &str) -> Option<u32> {
    match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
