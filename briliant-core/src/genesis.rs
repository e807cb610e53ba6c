//! Genesis block construction.
//!
//! Every network shares the same coinbase transaction; only the header's
//! time, bits and nonce differ. The computed hash and merkle root are checked
//! against compiled-in constants when a parameter set is built, and a
//! mismatch aborts startup.

use log::debug;

use crate::{
    block::Block,
    script::{Script, OP_CHECKSIG},
    sha256::Hash,
    transactions::{Transaction, TxOut},
    COIN,
};

pub const GENESIS_TIMESTAMP_MESSAGE: &str = "Brilliant day Wednesday, 15-Feb-17 00:00:00 UTC";

pub const GENESIS_OUTPUT_PUBKEY: &str = "04398760c178db985a4e4c99da16aaea05d438ab5cfd3876db07ebba822ff755a531bcee08a927dd2131571cf75970ae6298f50989b0c51ca9242357cf64e3f265";

/// Coins paid by the genesis coinbase (210000 * 60 * 10).
pub const GENESIS_SUBSIDY: i64 = 210_000 * 60 * 10;

pub const GENESIS_MERKLE_ROOT: &str =
    "465cb641998e0a58361d48d1f9809857e05e609aa05919466e7a91a72f7bd499";
pub const MAIN_GENESIS_HASH: &str =
    "04578e13aa752f24c4396823febf8a6762416d6e088010a320e95771c5aa0c42";
pub const REGTEST_GENESIS_HASH: &str =
    "a2d875cf8a6aba0718f9224ebda9bc5c97dbce25363ae9b7279aa7cad51e03b8";

/// The header fields that vary between networks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisSpec {
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

pub const MAIN_GENESIS: GenesisSpec = GenesisSpec {
    time: 1487116800,
    bits: 0x1e0ffff0,
    nonce: 110133,
};

/// The testnet genesis re-states the mainnet literals; the resulting block is
/// identical to mainnet's.
pub const TEST_GENESIS: GenesisSpec = GenesisSpec {
    time: 1487116800,
    bits: 0x1e0ffff0,
    nonce: 110133,
};

pub const REGTEST_GENESIS: GenesisSpec = GenesisSpec {
    time: 1487116200,
    bits: 0x207fffff,
    nonce: 2,
};

pub fn genesis_coinbase() -> Transaction {
    let script_sig = Script::new()
        .push_int(486604799)
        .push_script_num(4)
        .push_slice(GENESIS_TIMESTAMP_MESSAGE.as_bytes());

    // The key is a compile-time constant; a decode failure cannot happen.
    let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY).unwrap_or_default();
    let script_pubkey = Script::new().push_slice(&pubkey).push_opcode(OP_CHECKSIG);

    Transaction::new_coinbase(
        script_sig,
        vec![TxOut {
            value: GENESIS_SUBSIDY * COIN,
            script_pubkey,
        }],
    )
}

pub fn build_genesis(spec: GenesisSpec) -> Block {
    Block::new(
        1,
        Hash::zero(),
        spec.time,
        spec.bits,
        spec.nonce,
        vec![genesis_coinbase()],
    )
}

/// Builds the genesis block for `spec` and asserts that its hash and merkle
/// root equal the expected constants.
///
/// # Panics
///
/// On any mismatch. A wrong genesis is a build defect, never a runtime
/// condition.
pub fn verified_genesis(
    spec: GenesisSpec,
    expected_hash: &str,
    expected_merkle: &str,
) -> (Block, Hash) {
    let block = build_genesis(spec);
    let hash = block.hash();

    assert_eq!(
        hash.to_string(),
        expected_hash,
        "genesis hash mismatch for {:?}",
        spec
    );
    assert_eq!(
        block.merkle_root().to_string(),
        expected_merkle,
        "genesis merkle root mismatch for {:?}",
        spec
    );

    debug!("Verified genesis block {} (time {})", hash, spec.time);
    (block, hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encodable;

    #[test]
    fn test_coinbase_script_sig_is_bit_exact() {
        let coinbase = genesis_coinbase();
        assert_eq!(
            hex::encode(coinbase.inputs[0].script_sig.as_bytes()),
            "04ffff001d01042f4272696c6c69616e7420646179205765646e65736461792c2031352d4665622d31372030303a30303a303020555443"
        );
        assert_eq!(coinbase.outputs[0].value, 12_600_000_000_000_000);
        assert_eq!(coinbase.outputs[0].script_pubkey.len(), 67);
    }

    #[test]
    fn test_main_genesis_matches_constants() {
        let (block, hash) =
            verified_genesis(MAIN_GENESIS, MAIN_GENESIS_HASH, GENESIS_MERKLE_ROOT);
        assert_eq!(block.hash(), hash);
        assert_eq!(block.transactions.len(), 1);
        assert!(block.header.prev_block_hash.is_zero());
    }

    #[test]
    fn test_regtest_genesis_matches_constants() {
        let (_, hash) =
            verified_genesis(REGTEST_GENESIS, REGTEST_GENESIS_HASH, GENESIS_MERKLE_ROOT);
        assert_eq!(hash.to_string(), REGTEST_GENESIS_HASH);
    }

    #[test]
    fn test_testnet_genesis_equals_mainnet() {
        assert_eq!(build_genesis(TEST_GENESIS), build_genesis(MAIN_GENESIS));
    }

    #[test]
    fn test_genesis_construction_is_idempotent() {
        let first = build_genesis(MAIN_GENESIS);
        let second = build_genesis(MAIN_GENESIS);
        assert_eq!(first.consensus_serialize(), second.consensus_serialize());
        assert_eq!(first.hash(), second.hash());
    }

    #[test]
    #[should_panic(expected = "genesis hash mismatch")]
    fn test_wrong_nonce_is_fatal() {
        let spec = GenesisSpec {
            nonce: 110134,
            ..MAIN_GENESIS
        };
        verified_genesis(spec, MAIN_GENESIS_HASH, GENESIS_MERKLE_ROOT);
    }
}
