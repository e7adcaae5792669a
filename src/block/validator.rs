//! Mined-block validation
//!
//! A deterministic decision procedure over the origin bytes and a mined
//! artifact: containment, exactly one trailing signature line, line grammar,
//! and the proof-of-work property on the artifact's own digest. Checks run in
//! order and the first failure wins; nothing is mutated.

use crate::core::content::Content;
use crate::core::digest::Algorithm;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Default trailing-line grammar: token hex plus a group-code signature
static GROUP_CODE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-f]{8} G([0-3][0-9]){1,4}$").expect("valid grammar regex"));

/// Grammar applied to the trailing signature line.
///
/// The shipped default expects the group-code shape; a caller that mined with
/// a custom signature swaps in a literal match instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureRule {
    /// `^[0-9a-f]{8} G([0-3][0-9]){1,4}$`
    GroupCode,
    /// `^[0-9a-f]{8} <literal>$` (bare `^[0-9a-f]{8}$` for an empty literal)
    Literal(String),
}

impl Default for SignatureRule {
    fn default() -> Self {
        SignatureRule::GroupCode
    }
}

impl SignatureRule {
    fn matches(&self, line: &str) -> bool {
        match self {
            SignatureRule::GroupCode => GROUP_CODE_LINE.is_match(line),
            SignatureRule::Literal(signature) => {
                let hex = match line.get(..8) {
                    Some(prefix) => prefix,
                    None => return false,
                };
                if !hex
                    .chars()
                    .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
                {
                    return false;
                }
                let rest = &line[8..];
                if signature.is_empty() {
                    rest.is_empty()
                } else {
                    rest.strip_prefix(' ') == Some(signature.as_str())
                }
            },
        }
    }
}

/// Why a mined artifact was rejected
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The artifact does not start with the origin bytes
    OriginMismatch,
    /// No trailing signature line after the origin prefix
    MissingSignature,
    /// More than one line follows the origin prefix
    ExtraLines,
    /// The trailing line does not match the signature grammar
    GrammarMismatch,
    /// The artifact's digest lacks the required leading zero
    WeakDigest { algorithm: Algorithm },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::OriginMismatch => {
                write!(f, "mined file does not start with the origin file")
            },
            Rejection::MissingSignature => {
                write!(f, "mined file is missing the signature line")
            },
            Rejection::ExtraLines => write!(f, "mined file contains extra lines"),
            Rejection::GrammarMismatch => {
                write!(f, "signature line does not match the token grammar")
            },
            Rejection::WeakDigest { algorithm } => {
                write!(f, "{algorithm} digest does not start with 0")
            },
        }
    }
}

/// Check that `mined` is a correctly derived artifact of `origin`.
pub fn validate(
    origin: &Content,
    mined: &[u8],
    algorithm: Algorithm,
    rule: &SignatureRule,
) -> Result<(), Rejection> {
    // 1. Byte-for-byte containment of the origin prefix.
    if !mined.starts_with(origin.bytes()) {
        return Err(Rejection::OriginMismatch);
    }

    // 2. Exactly one non-empty trailing line. The remainder is normalized to
    //    LF; the separator newline is part of the derived format only when
    //    the origin had no trailing terminator, and is dropped before the
    //    line count.
    let remainder = &mined[origin.bytes().len()..];
    let remainder = String::from_utf8_lossy(remainder).replace("\r\n", "\n");
    let mut lines: Vec<&str> = remainder.split('\n').collect();
    if !origin.had_trailing_newline() && lines.first() == Some(&"") {
        lines.remove(0);
    }
    let last = match lines.pop() {
        Some(line) if !line.is_empty() => line,
        _ => return Err(Rejection::MissingSignature),
    };
    if !lines.is_empty() {
        return Err(Rejection::ExtraLines);
    }

    // 3. Trailing-line grammar.
    if !rule.matches(last) {
        return Err(Rejection::GrammarMismatch);
    }

    // 4. Proof-of-work property on the whole artifact.
    if !algorithm.digest_bytes(mined).starts_with('0') {
        return Err(Rejection::WeakDigest { algorithm });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Content {
        Content::new(b"abc\n".to_vec())
    }

    // sha256("abc\n00000002 G040612") = 0aaee1a9...
    const GOOD_ARTIFACT: &[u8] = b"abc\n00000002 G040612";

    #[test]
    fn test_accepts_correctly_mined_artifact() {
        assert_eq!(
            validate(
                &origin(),
                GOOD_ARTIFACT,
                Algorithm::Sha256,
                &SignatureRule::GroupCode
            ),
            Ok(())
        );
    }

    #[test]
    fn test_origin_mismatch() {
        // One altered byte inside the copied origin prefix
        assert_eq!(
            validate(
                &origin(),
                b"abd\n00000002 G040612",
                Algorithm::Sha256,
                &SignatureRule::GroupCode
            ),
            Err(Rejection::OriginMismatch)
        );
    }

    #[test]
    fn test_missing_signature() {
        assert_eq!(
            validate(
                &origin(),
                b"abc\n",
                Algorithm::Sha256,
                &SignatureRule::GroupCode
            ),
            Err(Rejection::MissingSignature)
        );
    }

    #[test]
    fn test_trailing_newline_after_token_is_missing_signature() {
        assert_eq!(
            validate(
                &origin(),
                b"abc\n00000002 G040612\n",
                Algorithm::Sha256,
                &SignatureRule::GroupCode
            ),
            Err(Rejection::MissingSignature)
        );
    }

    #[test]
    fn test_extra_lines() {
        assert_eq!(
            validate(
                &origin(),
                b"abc\ndeadbeef G040612\n00000002 G040612",
                Algorithm::Sha256,
                &SignatureRule::GroupCode
            ),
            Err(Rejection::ExtraLines)
        );
    }

    #[test]
    fn test_grammar_rejects_group_out_of_range() {
        // Group 99 is outside [0-3][0-9]
        assert_eq!(
            validate(
                &origin(),
                b"abc\n1234abcd G99",
                Algorithm::Sha256,
                &SignatureRule::GroupCode
            ),
            Err(Rejection::GrammarMismatch)
        );
    }

    #[test]
    fn test_grammar_rejects_uppercase_hex() {
        assert_eq!(
            validate(
                &origin(),
                b"abc\n0000000A G040612",
                Algorithm::Sha256,
                &SignatureRule::GroupCode
            ),
            Err(Rejection::GrammarMismatch)
        );
    }

    #[test]
    fn test_synthesized_separator_is_not_an_extra_line() {
        // Origin without trailing terminator; the derived file gains one
        // newline before the token, which must not count as a line.
        let origin = Content::new(b"abc".to_vec());
        let outcome = validate(
            &origin,
            b"abc\n00000002 G040612",
            Algorithm::Sha256,
            &SignatureRule::GroupCode,
        );
        // Digest differs from the terminated-origin case, so only the
        // containment/line/grammar steps are exercised here.
        assert_ne!(outcome, Err(Rejection::MissingSignature));
        assert_ne!(outcome, Err(Rejection::ExtraLines));
        assert_ne!(outcome, Err(Rejection::GrammarMismatch));
    }

    #[test]
    fn test_literal_rule() {
        let rule = SignatureRule::Literal("team-seven".to_string());
        assert!(rule.matches("0000002a team-seven"));
        assert!(!rule.matches("0000002a G040612"));
        assert!(!rule.matches("0000002ateam-seven"));

        let bare = SignatureRule::Literal(String::new());
        assert!(bare.matches("0000002a"));
        assert!(!bare.matches("0000002a "));
    }

    #[test]
    fn test_weak_digest() {
        // sha256("abc\n00000000 G040612") does not start with 0; the line is
        // grammatical, so the digest step must be the one that fires.
        let artifact = b"abc\n00000000 G040612";
        assert_eq!(
            validate(
                &origin(),
                artifact,
                Algorithm::Sha256,
                &SignatureRule::GroupCode
            ),
            Err(Rejection::WeakDigest {
                algorithm: Algorithm::Sha256
            })
        );
    }
}
