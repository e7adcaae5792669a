//! Origin content handling
//!
//! The subject of a search or validation is read once and kept immutable for
//! the whole run. A token is always digested after exactly one newline; when
//! the origin lacks a trailing terminator the separator is synthesized, and
//! that fact is remembered so the persisted artifact matches the origin's
//! convention.

use crate::core::error::{Result, SealError};
use std::borrow::Cow;
use std::path::Path;

/// Immutable origin bytes plus their terminator convention
#[derive(Clone, Debug)]
pub struct Content {
    bytes: Vec<u8>,
    had_trailing_newline: bool,
}

impl Content {
    pub fn new(bytes: Vec<u8>) -> Self {
        // A CRLF terminator also ends in b'\n', so one check covers both.
        let had_trailing_newline = bytes.last() == Some(&b'\n');
        Self {
            bytes,
            had_trailing_newline,
        }
    }

    /// Read a file's bytes once, failing fast when the path is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(SealError::input_not_found(path));
        }
        Ok(Self::new(std::fs::read(path)?))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn had_trailing_newline(&self) -> bool {
        self.had_trailing_newline
    }

    /// Bytes a candidate token is appended to: the origin terminated by
    /// exactly one newline
    pub fn stamped_base(&self) -> Cow<'_, [u8]> {
        if self.had_trailing_newline {
            Cow::Borrowed(&self.bytes[..])
        } else {
            let mut base = self.bytes.clone();
            base.push(b'\n');
            Cow::Owned(base)
        }
    }

    /// Separator written before an appended line, empty when the origin
    /// already ends in a newline
    pub fn separator(&self) -> &'static str {
        if self.had_trailing_newline {
            ""
        } else {
            "\n"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminated_content_keeps_base() {
        let content = Content::new(b"abc\n".to_vec());
        assert!(content.had_trailing_newline());
        assert_eq!(content.stamped_base().as_ref(), b"abc\n");
        assert_eq!(content.separator(), "");
    }

    #[test]
    fn test_unterminated_content_synthesizes_newline() {
        let content = Content::new(b"abc".to_vec());
        assert!(!content.had_trailing_newline());
        assert_eq!(content.stamped_base().as_ref(), b"abc\n");
        assert_eq!(content.separator(), "\n");
    }

    #[test]
    fn test_crlf_terminator_counts() {
        let content = Content::new(b"abc\r\n".to_vec());
        assert!(content.had_trailing_newline());
        assert_eq!(content.stamped_base().as_ref(), b"abc\r\n");
    }

    #[test]
    fn test_empty_content() {
        let content = Content::new(Vec::new());
        assert!(!content.had_trailing_newline());
        assert_eq!(content.stamped_base().as_ref(), b"\n");
    }
}
