//! Hash functions used by the protocol.
//!
//! - Transaction ids and merkle nodes: double SHA-256.
//! - Block header (proof-of-work) hash: scrypt with N=1024, r=1, p=1 and a
//!   32-byte output, using the serialized header as both password and salt.

use sha2::{Digest, Sha256};
use std::sync::LazyLock;

use crate::types::Hash256;

/// scrypt cost parameter as log2(N).
pub const SCRYPT_LOG_N: u8 = 10;
/// scrypt block size parameter.
pub const SCRYPT_R: u32 = 1;
/// scrypt parallelization parameter.
pub const SCRYPT_P: u32 = 1;

static POW_PARAMS: LazyLock<scrypt::Params> = LazyLock::new(|| {
    scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, 32)
        .expect("scrypt(1024, 1, 1) parameters are valid")
});

/// Double SHA-256.
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    Hash256(Sha256::digest(first).into())
}

/// Proof-of-work hash of a serialized header.
pub fn pow_hash(header_bytes: &[u8]) -> Hash256 {
    let mut out = [0u8; 32];
    scrypt::scrypt(header_bytes, header_bytes, &POW_PARAMS, &mut out)
        .expect("output length matches scrypt params");
    Hash256(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256d_empty_matches_known_vector() {
        // SHA256(SHA256("")), displayed in internal byte order.
        let h = sha256d(b"");
        assert_eq!(
            hex::encode(h.as_bytes()),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn sha256d_deterministic() {
        assert_eq!(sha256d(b"dmb"), sha256d(b"dmb"));
        assert_ne!(sha256d(b"dmb"), sha256d(b"dmc"));
    }

    #[test]
    fn pow_hash_differs_from_sha256d() {
        let data = [0u8; 80];
        assert_ne!(pow_hash(&data), sha256d(&data));
    }

    #[test]
    fn pow_hash_deterministic() {
        let data = [7u8; 80];
        assert_eq!(pow_hash(&data), pow_hash(&data));
        assert!(!pow_hash(&data).is_zero());
    }
}
