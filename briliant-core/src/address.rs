use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};

/// Kinds of base58-encoded payloads, each with its own leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    #[serde_as(as = "Hex")]
    pub pubkey_address: Vec<u8>,
    #[serde_as(as = "Hex")]
    pub script_address: Vec<u8>,
    #[serde_as(as = "Hex")]
    pub secret_key: Vec<u8>,
    #[serde_as(as = "Hex")]
    pub ext_public_key: Vec<u8>,
    #[serde_as(as = "Hex")]
    pub ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}
