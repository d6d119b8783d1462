//! Minimal script builder for coinbase and output scripts.

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;

/// Append-only script builder.
///
/// # Examples
///
/// ```
/// use dmb_core::script::ScriptBuilder;
/// let script = ScriptBuilder::new().push_int(0).push_num(42).push_slice(b"hi").into_bytes();
/// assert_eq!(script, vec![0x00, 0x01, 0x2a, 0x02, b'h', b'i']);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptBuilder(Vec<u8>);

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a small integer using the dedicated opcodes where one exists
    /// (`OP_0`, `OP_1NEGATE`, `OP_1`..`OP_16`), otherwise as a number push.
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.0.push(OP_0),
            -1 => self.0.push(OP_1NEGATE),
            1..=16 => self.0.push(OP_1 + (n as u8 - 1)),
            _ => return self.push_num(n),
        }
        self
    }

    /// Push `n` as minimally encoded script-number bytes.
    pub fn push_num(self, n: i64) -> Self {
        let bytes = encode_num(n);
        self.push_slice(&bytes)
    }

    /// Push raw data with the smallest length prefix that fits.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= u8::MAX as usize {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= u16::MAX as usize {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Little-endian sign-magnitude encoding with no redundant bytes.
/// Zero encodes as the empty vector.
pub fn encode_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    // The top bit carries the sign; add a byte if the magnitude already uses it.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_num_small_values() {
        assert_eq!(encode_num(0), Vec::<u8>::new());
        assert_eq!(encode_num(42), vec![0x2a]);
        assert_eq!(encode_num(-1), vec![0x81]);
    }

    #[test]
    fn encode_num_adds_sign_byte() {
        assert_eq!(encode_num(128), vec![0x80, 0x00]);
        assert_eq!(encode_num(-128), vec![0x80, 0x80]);
        assert_eq!(encode_num(255), vec![0xff, 0x00]);
        assert_eq!(encode_num(256), vec![0x00, 0x01]);
    }

    #[test]
    fn push_int_uses_small_opcodes() {
        assert_eq!(ScriptBuilder::new().push_int(0).into_bytes(), vec![OP_0]);
        assert_eq!(ScriptBuilder::new().push_int(-1).into_bytes(), vec![OP_1NEGATE]);
        assert_eq!(ScriptBuilder::new().push_int(1).into_bytes(), vec![0x51]);
        assert_eq!(ScriptBuilder::new().push_int(16).into_bytes(), vec![0x60]);
        assert_eq!(ScriptBuilder::new().push_int(17).into_bytes(), vec![0x01, 0x11]);
    }

    #[test]
    fn push_num_never_uses_small_opcodes() {
        assert_eq!(ScriptBuilder::new().push_num(5).into_bytes(), vec![0x01, 0x05]);
        assert_eq!(ScriptBuilder::new().push_num(0).into_bytes(), vec![0x00]);
    }

    #[test]
    fn push_slice_prefixes() {
        let short = ScriptBuilder::new().push_slice(&[1; 75]).into_bytes();
        assert_eq!(short[0], 75);
        assert_eq!(short.len(), 76);

        let one = ScriptBuilder::new().push_slice(&[1; 76]).into_bytes();
        assert_eq!(&one[..2], &[OP_PUSHDATA1, 76]);

        let two = ScriptBuilder::new().push_slice(&[1; 256]).into_bytes();
        assert_eq!(&two[..3], &[OP_PUSHDATA2, 0x00, 0x01]);
    }
}
