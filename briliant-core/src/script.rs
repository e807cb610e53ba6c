use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use std::fmt;

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_CHECKSIG: u8 = 0xac;

/// Raw script bytes with a builder that follows the reference client's
/// stream-operator rules, so the genesis coinbase serializes bit-exactly.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Script(#[serde_as(as = "Hex")] Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Script(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// Pushes a small integer as an opcode where one exists (`OP_0`,
    /// `OP_1NEGATE`, `OP_1`..`OP_16`), otherwise as a script number.
    pub fn push_int(self, n: i64) -> Self {
        match n {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (n as u8 - 1)),
            _ => self.push_script_num(n),
        }
    }

    /// Always pushes `n` as minimally encoded script-number data, even when
    /// a dedicated opcode exists.
    pub fn push_script_num(self, n: i64) -> Self {
        let bytes = script_num_bytes(n);
        self.push_slice(&bytes)
    }

    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }
}

/// Little-endian sign-magnitude encoding used for numbers inside scripts.
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut magnitude = n.unsigned_abs();
    let mut bytes = Vec::new();
    while magnitude > 0 {
        bytes.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }

    // The top bit carries the sign, so add a byte if it is already taken.
    let last = bytes.len() - 1;
    if bytes[last] & 0x80 != 0 {
        bytes.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        bytes[last] |= 0x80;
    }
    bytes
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_int_uses_small_opcodes() {
        let script = Script::new().push_int(0).push_int(-1).push_int(1).push_int(16);
        assert_eq!(script.as_bytes(), &[OP_0, OP_1NEGATE, 0x51, 0x60]);
    }

    #[test]
    fn test_push_int_encodes_large_numbers_as_data() {
        // 486604799 == 0x1d00ffff
        let script = Script::new().push_int(486604799);
        assert_eq!(hex::encode(script.as_bytes()), "04ffff001d");
    }

    #[test]
    fn test_push_script_num_never_uses_opcodes() {
        let script = Script::new().push_script_num(4);
        assert_eq!(script.as_bytes(), &[0x01, 0x04]);
    }

    #[test]
    fn test_script_num_sign_handling() {
        assert_eq!(script_num_bytes(0x80), vec![0x80, 0x00]);
        assert_eq!(script_num_bytes(-0x80), vec![0x80, 0x80]);
        assert_eq!(script_num_bytes(-1), vec![0x81]);
        assert!(script_num_bytes(0).is_empty());
    }

    #[test]
    fn test_push_slice_length_prefixes() {
        assert_eq!(Script::new().push_slice(&[0u8; 75]).len(), 76);
        let pushdata1 = Script::new().push_slice(&[0u8; 76]);
        assert_eq!(&pushdata1.as_bytes()[..2], &[OP_PUSHDATA1, 76]);
        let pushdata2 = Script::new().push_slice(&[0u8; 256]);
        assert_eq!(&pushdata2.as_bytes()[..3], &[OP_PUSHDATA2, 0x00, 0x01]);
    }
}
