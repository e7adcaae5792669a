//! Nonce token encoding

/// Largest counter that still fits the fixed token width
pub const MAX_NONCE: u64 = 0xFFFF_FFFF;

/// Fixed width of the hex portion of a token
pub const NONCE_HEX_CHARS: usize = 8;

/// Encode a counter as a zero-padded lowercase hex token, optionally
/// suffixed with a space-prefixed signature.
///
/// Pure and total over `[0, MAX_NONCE]`; callers must stop the search before
/// the counter would need more than eight hex digits.
pub fn encode(counter: u64, signature: Option<&str>) -> String {
    debug_assert!(counter <= MAX_NONCE);
    match signature {
        Some(sig) => format!("{counter:08x} {sig}"),
        None => format!("{counter:08x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padded_width() {
        assert_eq!(encode(0, None), "00000000");
        assert_eq!(encode(0x2a, None), "0000002a");
        assert_eq!(encode(MAX_NONCE, None), "ffffffff");
    }

    #[test]
    fn test_lowercase_hex() {
        assert_eq!(encode(0xDEADBEEF, None), "deadbeef");
    }

    #[test]
    fn test_signature_is_space_prefixed() {
        assert_eq!(encode(2, Some("G040612")), "00000002 G040612");
    }
}
