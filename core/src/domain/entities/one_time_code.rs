//! One-time codes for email-based verification flows.
//!
//! Codes are short random strings delivered out-of-band. Only a SHA-256
//! digest is ever persisted; comparison happens digest-to-digest in
//! constant time.

use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use sha2::{Digest, Sha256};

/// Length of a one-time code
pub const CODE_LENGTH: usize = 6;

/// Code alphabet: 32 symbols, visually ambiguous characters excluded (no 0/O/1/I)
pub const CODE_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Maximum number of verification attempts per issued code
pub const MAX_ATTEMPTS: i32 = 5;

/// Minutes until an issued code expires
pub const CODE_TTL_MINUTES: i64 = 10;

/// Minimum seconds between successive code sends for the same email
pub const RESEND_COOLDOWN_SECONDS: i64 = 30;

/// A freshly generated one-time code
///
/// The plaintext only exists between generation and dispatch; storage layers
/// receive the digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeCode(String);

impl OneTimeCode {
    /// Generate a new code with the OS CSPRNG
    ///
    /// Each character is drawn independently and uniformly from the
    /// 32-symbol alphabet, giving 32^6 possible codes.
    pub fn generate() -> Self {
        let mut rng = OsRng;
        let code: String = (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// The plaintext code, for dispatch to the recipient
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex-encoded SHA-256 digest of the code, for storage
    pub fn digest(&self) -> String {
        digest_code(&self.0)
    }
}

/// Canonical form of user-supplied code input (trimmed, uppercased)
pub fn normalize_code(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Whether a normalized code has the expected shape
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH
}

/// Hex-encoded SHA-256 digest of an arbitrary code string
pub fn digest_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hex::encode(hasher.finalize())
}

/// Constant-time comparison of two hex digests
pub fn digest_matches(candidate_digest: &str, stored_digest: &str) -> bool {
    if candidate_digest.len() != stored_digest.len() {
        return false;
    }
    constant_time_eq(candidate_digest.as_bytes(), stored_digest.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_code_shape() {
        for _ in 0..100 {
            let code = OneTimeCode::generate();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code
                .as_str()
                .bytes()
                .all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_no_ambiguous_characters() {
        for forbidden in [b'0', b'O', b'1', b'I'] {
            assert!(!CODE_ALPHABET.contains(&forbidden));
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: HashSet<String> = (0..100)
            .map(|_| OneTimeCode::generate().as_str().to_string())
            .collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_digest_matches_own_code() {
        let code = OneTimeCode::generate();
        assert!(digest_matches(
            &digest_code(code.as_str()),
            &code.digest()
        ));
    }

    #[test]
    fn test_digest_rejects_other_codes() {
        let code = OneTimeCode::generate();
        let stored = code.digest();
        // Random negative samples from the code space
        let mut rejected = 0;
        for _ in 0..20 {
            let other = OneTimeCode::generate();
            if other.as_str() != code.as_str() {
                assert!(!digest_matches(&other.digest(), &stored));
                rejected += 1;
            }
        }
        assert!(rejected > 0);
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("  a7k2p9 "), "A7K2P9");
        assert_eq!(normalize_code("A7K2P9"), "A7K2P9");
    }

    #[test]
    fn test_normalized_input_digests_identically() {
        let entered = normalize_code(" a7k2p9\n");
        assert_eq!(digest_code(&entered), digest_code("A7K2P9"));
    }

    #[test]
    fn test_well_formed() {
        assert!(is_well_formed("A7K2P9"));
        assert!(!is_well_formed("A7K2P"));
        assert!(!is_well_formed("A7K2P9X"));
        assert!(!is_well_formed(""));
    }
}
