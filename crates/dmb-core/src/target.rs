//! Compact difficulty targets.
//!
//! A header's `bits` field packs a 256-bit target as an 8-bit base-256
//! exponent and a 23-bit mantissa with a sign bit:
//! `target = mantissa * 256^(exponent - 3)`.
//!
//! A hash meets the target when, read as a little-endian 256-bit integer,
//! it is no greater than the target. Higher targets are easier.

use primitive_types::U256;

use crate::error::TargetError;
use crate::types::Hash256;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Decode a compact target.
///
/// Rejects negative encodings and encodings whose value does not fit in
/// 256 bits. A zero mantissa decodes to zero.
pub fn decode_compact(bits: u32) -> Result<U256, TargetError> {
    let size = bits >> 24;
    let word = bits & MANTISSA_MASK;

    if word != 0 && bits & SIGN_BIT != 0 {
        return Err(TargetError::Negative(bits));
    }
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    if overflow {
        return Err(TargetError::Overflow(bits));
    }

    if size <= 3 {
        Ok(U256::from(word >> (8 * (3 - size))))
    } else {
        Ok(U256::from(word) << (8 * (size - 3)))
    }
}

/// Encode a target in canonical compact form. Lossy below the top three
/// significant bytes.
pub fn encode_compact(target: U256) -> u32 {
    let mut size = target.bits().div_ceil(8) as u32;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size - 3))).low_u32()
    };
    // Keep the mantissa positive by moving its high byte into the exponent.
    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | (size << 24)
}

/// Interpret a hash as a 256-bit integer for target comparison.
pub fn hash_to_u256(hash: &Hash256) -> U256 {
    U256::from_little_endian(hash.as_bytes())
}

/// Decode `bits` and check it is a usable target no easier than `limit`.
pub fn target_within_limit(bits: u32, limit: U256) -> Result<U256, TargetError> {
    let target = decode_compact(bits)?;
    if target.is_zero() {
        return Err(TargetError::Zero);
    }
    if target > limit {
        return Err(TargetError::AboveLimit);
    }
    Ok(target)
}

/// Check that `hash` satisfies the compact target `bits` under `limit`.
pub fn check_proof_of_work(hash: &Hash256, bits: u32, limit: U256) -> Result<(), TargetError> {
    let target = target_within_limit(bits, limit)?;
    if hash_to_u256(hash) > target {
        return Err(TargetError::HashAboveTarget);
    }
    Ok(())
}
