//! Consensus serialization.
//!
//! Integers are little-endian and variable-length collections are prefixed
//! with a CompactSize count, exactly as block and transaction hashes expect.

use std::io::{Result as IoResult, Write};

use crate::sha256::Hash;

pub trait Encodable {
    /// Writes the consensus encoding and returns the number of bytes written.
    fn consensus_encode<W: Write>(&self, writer: &mut W) -> IoResult<usize>;

    fn consensus_serialize(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.consensus_encode(&mut buffer);
        buffer
    }
}

macro_rules! impl_int_encodable {
    ($($ty:ty),*) => {
        $(
            impl Encodable for $ty {
                fn consensus_encode<W: Write>(&self, writer: &mut W) -> IoResult<usize> {
                    let bytes = self.to_le_bytes();
                    writer.write_all(&bytes)?;
                    Ok(bytes.len())
                }
            }
        )*
    };
}

impl_int_encodable!(u8, u16, u32, u64, i32, i64);

impl Encodable for Hash {
    fn consensus_encode<W: Write>(&self, writer: &mut W) -> IoResult<usize> {
        writer.write_all(&self.to_le_bytes())?;
        Ok(32)
    }
}

/// Length prefix used for vectors and byte strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactSize(pub u64);

impl Encodable for CompactSize {
    fn consensus_encode<W: Write>(&self, writer: &mut W) -> IoResult<usize> {
        match self.0 {
            n @ 0..=0xfc => (n as u8).consensus_encode(writer),
            n @ 0xfd..=0xffff => {
                writer.write_all(&[0xfd])?;
                Ok(1 + (n as u16).consensus_encode(writer)?)
            }
            n @ 0x1_0000..=0xffff_ffff => {
                writer.write_all(&[0xfe])?;
                Ok(1 + (n as u32).consensus_encode(writer)?)
            }
            n => {
                writer.write_all(&[0xff])?;
                Ok(1 + n.consensus_encode(writer)?)
            }
        }
    }
}

/// Writes `bytes` with its CompactSize length prefix.
pub fn encode_bytes<W: Write>(bytes: &[u8], writer: &mut W) -> IoResult<usize> {
    let len = CompactSize(bytes.len() as u64).consensus_encode(writer)?;
    writer.write_all(bytes)?;
    Ok(len + bytes.len())
}

impl<T: Encodable> Encodable for Vec<T> {
    fn consensus_encode<W: Write>(&self, writer: &mut W) -> IoResult<usize> {
        let mut written = CompactSize(self.len() as u64).consensus_encode(writer)?;
        for item in self {
            written += item.consensus_encode(writer)?;
        }
        Ok(written)
    }
}
