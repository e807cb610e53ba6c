use crate::U256;
use anyhow::{anyhow, Result};
use hex;
use sha2::{Digest, Sha256};
use std::{convert::TryFrom, fmt};

/// A double-SHA256 digest.
///
/// The digest bytes are read as a little-endian 256-bit integer, so the hex
/// form produced by `Display` is the familiar reversed block-hash notation
/// (`04578e13...`) rather than the raw digest order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Hash(crate::U256);

impl serde::Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = self.to_string();
        serializer.serialize_str(&s)
    }
}

impl<'de> serde::Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Hash::try_from(s.as_str()).map_err(|e| {
            serde::de::Error::custom(format!("Failed to deserialize Hash from hex string: {}", e))
        })
    }
}

impl Hash {
    pub fn double_sha256(data: &[u8]) -> Self {
        let first = Sha256::digest(data);
        let second = Sha256::digest(first);
        let digest: [u8; 32] = second.into();
        Hash(U256::from_little_endian(&digest))
    }

    pub fn zero() -> Self {
        Hash(U256::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Raw digest bytes, in the order they appear on the wire.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        self.0.to_little_endian()
    }

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Hash(U256::from_little_endian(&bytes))
    }
}

impl TryFrom<&str> for Hash {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| anyhow!("Invalid hash hex '{}': {}", s, e))?;

        if bytes.len() != 32 {
            return Err(anyhow!(
                "Invalid hex string length: expected 64 chars (32 bytes), found {} bytes",
                bytes.len()
            ));
        }

        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);

        Ok(Hash(U256::from_big_endian(&array)))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0.to_big_endian()))
    }
}
