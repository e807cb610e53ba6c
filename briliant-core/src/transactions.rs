use serde::{Deserialize, Serialize};
use std::io::{Result as IoResult, Write};

use crate::encoding::{encode_bytes, Encodable};
use crate::script::Script;
use crate::sha256::Hash;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutPoint {
    pub txid: Hash,
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs.
    pub fn null() -> Self {
        OutPoint {
            txid: Hash::zero(),
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TxOut {
    /// Value in the smallest unit (1 coin = `COIN` units).
    pub value: i64,
    pub script_pubkey: Script,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn new(inputs: Vec<TxIn>, outputs: Vec<TxOut>) -> Self {
        Transaction {
            version: 1,
            inputs,
            outputs,
            lock_time: 0,
        }
    }

    /// A transaction with a single input spending the null outpoint.
    pub fn new_coinbase(script_sig: Script, outputs: Vec<TxOut>) -> Self {
        Transaction::new(
            vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig,
                sequence: u32::MAX,
            }],
            outputs,
        )
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }

    pub fn txid(&self) -> Hash {
        Hash::double_sha256(&self.consensus_serialize())
    }
}

impl Encodable for OutPoint {
    fn consensus_encode<W: Write>(&self, writer: &mut W) -> IoResult<usize> {
        Ok(self.txid.consensus_encode(writer)? + self.vout.consensus_encode(writer)?)
    }
}

impl Encodable for Script {
    fn consensus_encode<W: Write>(&self, writer: &mut W) -> IoResult<usize> {
        encode_bytes(self.as_bytes(), writer)
    }
}

impl Encodable for TxIn {
    fn consensus_encode<W: Write>(&self, writer: &mut W) -> IoResult<usize> {
        let mut written = self.previous_output.consensus_encode(writer)?;
        written += self.script_sig.consensus_encode(writer)?;
        written += self.sequence.consensus_encode(writer)?;
        Ok(written)
    }
}

impl Encodable for TxOut {
    fn consensus_encode<W: Write>(&self, writer: &mut W) -> IoResult<usize> {
        Ok(self.value.consensus_encode(writer)? + self.script_pubkey.consensus_encode(writer)?)
    }
}

impl Encodable for Transaction {
    fn consensus_encode<W: Write>(&self, writer: &mut W) -> IoResult<usize> {
        let mut written = self.version.consensus_encode(writer)?;
        written += self.inputs.consensus_encode(writer)?;
        written += self.outputs.consensus_encode(writer)?;
        written += self.lock_time.consensus_encode(writer)?;
        Ok(written)
    }
}
