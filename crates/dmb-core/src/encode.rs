//! Consensus serialization.
//!
//! Integers are little-endian. Variable-length fields carry a CompactSize
//! length prefix: one byte below `0xFD`, otherwise a marker byte followed by
//! a 2, 4, or 8 byte little-endian length.

/// Types with a canonical consensus byte encoding.
pub trait Encodable {
    /// Append the consensus encoding of `self` to `out`.
    fn consensus_encode(&self, out: &mut Vec<u8>);

    /// Consensus encoding as a fresh buffer.
    fn encoded(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.consensus_encode(&mut out);
        out
    }
}

/// Append a CompactSize length prefix.
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xFC => out.push(n as u8),
        0xFD..=0xFFFF => {
            out.push(0xFD);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xFFFF_FFFF => {
            out.push(0xFE);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xFF);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Append a length-prefixed byte string.
pub fn write_var_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

/// Append a length-prefixed sequence of encodable items.
pub fn write_vec<T: Encodable>(out: &mut Vec<u8>, items: &[T]) {
    write_compact_size(out, items.len() as u64);
    for item in items {
        item.consensus_encode(out);
    }
}
