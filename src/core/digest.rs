//! Digest algorithm registry and hashing utilities
//!
//! Every supported algorithm is a RustCrypto `digest` 0.10 implementation
//! behind a name-indexed registry. Unknown names are rejected before any
//! search work begins; output is always lowercase hex.

use crate::core::error::{Result, SealError};
use digest::DynDigest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// A digest algorithm supported by the host primitives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// All supported algorithms, in listing order
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::Md5,
            Algorithm::Sha1,
            Algorithm::Sha224,
            Algorithm::Sha256,
            Algorithm::Sha384,
            Algorithm::Sha512,
        ]
    }

    /// Resolve an algorithm identifier, failing fast on unknown names
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha224" => Ok(Algorithm::Sha224),
            "sha256" => Ok(Algorithm::Sha256),
            "sha384" => Ok(Algorithm::Sha384),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(SealError::unsupported_algorithm(name)),
        }
    }

    /// Canonical identifier, as used in derived-file suffixes
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Fresh boxed hasher; reusable across iterations via `finalize_reset`
    pub fn hasher(&self) -> Box<dyn DynDigest> {
        match self {
            Algorithm::Md5 => Box::new(Md5::default()),
            Algorithm::Sha1 => Box::new(Sha1::default()),
            Algorithm::Sha224 => Box::new(Sha224::default()),
            Algorithm::Sha256 => Box::new(Sha256::default()),
            Algorithm::Sha384 => Box::new(Sha384::default()),
            Algorithm::Sha512 => Box::new(Sha512::default()),
        }
    }

    /// Compute the digest of an in-memory byte sequence
    pub fn digest_bytes(&self, data: &[u8]) -> String {
        let mut hasher = self.hasher();
        hasher.update(data);
        hex::encode(hasher.finalize())
    }

    /// Compute the digest of a file, streaming through a buffered reader
    pub fn digest_file(&self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(SealError::input_not_found(path));
        }

        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let mut hasher = self.hasher();
        let mut buffer = [0u8; 8192];

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(hex::encode(hasher.finalize()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SealError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            Algorithm::Sha256.digest_bytes(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            Algorithm::Sha1.digest_bytes(b"abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            Algorithm::Md5.digest_bytes(b"abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let digest = Algorithm::Sha512.digest_bytes(b"Hello, Hashseal!");
        assert_eq!(digest.len(), 128);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_from_name_roundtrip() {
        for algorithm in Algorithm::all() {
            assert_eq!(Algorithm::from_name(algorithm.name()).unwrap(), *algorithm);
        }
        // Case-insensitive lookup
        assert_eq!(Algorithm::from_name("SHA256").unwrap(), Algorithm::Sha256);
    }

    #[test]
    fn test_unknown_name_fails_fast() {
        let err = Algorithm::from_name("blake3").unwrap_err();
        assert!(matches!(err, SealError::UnsupportedAlgorithm { .. }));
    }

    #[test]
    fn test_file_digest_matches_bytes() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        let test_data = b"Test file content for hashing";
        temp_file.write_all(test_data)?;
        temp_file.flush()?;

        let file_digest = Algorithm::Sha256.digest_file(temp_file.path())?;
        assert_eq!(file_digest, Algorithm::Sha256.digest_bytes(test_data));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_input_not_found() {
        let err = Algorithm::Sha256
            .digest_file(Path::new("/nonexistent/hashseal-test"))
            .unwrap_err();
        assert!(matches!(err, SealError::InputNotFound { .. }));
    }
}
