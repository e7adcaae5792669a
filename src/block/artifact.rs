//! Derived-file naming and persistence
//!
//! A derived artifact is a byte-for-byte copy of the origin with one line
//! appended: the winning token (or a plain digest), preceded by a newline iff
//! the origin lacked a trailing terminator. The copy happens first and the
//! append second; a failure in between can leave a partial copy behind, no
//! rollback is attempted.

use crate::core::content::Content;
use crate::core::digest::Algorithm;
use crate::core::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Which derived artifact a path suffix names
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DerivedKind {
    /// `<path>.<algorithm>`: plain digest append
    Digest,
    /// `<path>.<algorithm>.mined`: best-effort mining output
    Mined,
    /// `<path>.<algorithm>.<"0" x N>`: target-prefix search output
    Zeroes(usize),
}

/// Derived-file path for an origin and artifact kind
pub fn derived_path(origin: &Path, algorithm: Algorithm, kind: &DerivedKind) -> PathBuf {
    let mut name = origin.as_os_str().to_os_string();
    match kind {
        DerivedKind::Digest => name.push(format!(".{algorithm}")),
        DerivedKind::Mined => name.push(format!(".{algorithm}.mined")),
        DerivedKind::Zeroes(count) => name.push(format!(".{algorithm}.{}", "0".repeat(*count))),
    }
    PathBuf::from(name)
}

/// Copy the origin file and append one line to the copy.
///
/// `content` must be the origin's bytes, read before the search started; it
/// decides whether a separator newline is written before the line.
pub fn write_derived(origin: &Path, derived: &Path, content: &Content, line: &str) -> Result<()> {
    fs::copy(origin, derived)?;

    let mut file = OpenOptions::new().append(true).open(derived)?;
    file.write_all(content.separator().as_bytes())?;
    file.write_all(line.as_bytes())?;
    file.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::TempDir;

    #[test]
    fn test_derived_naming() {
        let origin = Path::new("report.txt");
        assert_eq!(
            derived_path(origin, Algorithm::Sha256, &DerivedKind::Digest),
            Path::new("report.txt.sha256")
        );
        assert_eq!(
            derived_path(origin, Algorithm::Sha256, &DerivedKind::Mined),
            Path::new("report.txt.sha256.mined")
        );
        assert_eq!(
            derived_path(origin, Algorithm::Md5, &DerivedKind::Zeroes(3)),
            Path::new("report.txt.md5.000")
        );
    }

    #[test]
    fn test_append_after_terminated_origin() -> crate::core::error::Result<()> {
        let dir = TempDir::new()?;
        let origin = dir.path().join("block.txt");
        let mut file = std::fs::File::create(&origin)?;
        file.write_all(b"abc\n")?;
        drop(file);

        let content = Content::load(&origin)?;
        let derived = derived_path(&origin, Algorithm::Sha256, &DerivedKind::Mined);
        write_derived(&origin, &derived, &content, "00000002 G040612")?;

        assert_eq!(std::fs::read(&derived)?, b"abc\n00000002 G040612");
        Ok(())
    }

    #[test]
    fn test_append_synthesizes_separator() -> crate::core::error::Result<()> {
        let dir = TempDir::new()?;
        let origin = dir.path().join("block.txt");
        std::fs::write(&origin, b"abc")?;

        let content = Content::load(&origin)?;
        let derived = derived_path(&origin, Algorithm::Sha256, &DerivedKind::Mined);
        write_derived(&origin, &derived, &content, "00000002 G040612")?;

        assert_eq!(std::fs::read(&derived)?, b"abc\n00000002 G040612");
        Ok(())
    }
}
