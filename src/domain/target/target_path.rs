//! Target folder value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::TargetPathError;
use crate::domain::text::truncate_chars;

/// Platform path limit minus the terminator
pub const MAX_TARGET_LEN: usize = 259;

/// Minimum length of a drive-qualified path ("C:\")
const MIN_TARGET_LEN: usize = 3;

/// A drive-qualified target folder, e.g. `C:\Music`.
///
/// Only the shape is checked: at least three characters with a colon as
/// the second one. The text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPath(String);

impl TargetPath {
    /// Apply the edit-field length bound to raw user input
    pub fn bound_input(input: &str) -> String {
        truncate_chars(input, MAX_TARGET_LEN)
    }

    /// Whether `input` has the drive-qualified shape
    pub fn is_drive_qualified(input: &str) -> bool {
        let mut chars = input.chars();
        let _drive = chars.next();
        let colon = chars.next();
        colon == Some(':') && input.chars().count() >= MIN_TARGET_LEN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The drive letter, upper-cased
    pub fn drive_letter(&self) -> char {
        self.0
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or_default()
    }

    /// Everything after the `X:` prefix
    pub fn rest(&self) -> &str {
        let prefix_len: usize = self.0.chars().take(2).map(char::len_utf8).sum();
        &self.0[prefix_len..]
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for TargetPath {
    type Err = TargetPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_drive_qualified(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(TargetPathError {
                input: s.to_string(),
            })
        }
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TargetPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
