//! Per-network parameter sets.
//!
//! Mainnet is written out in full. Every other network starts from a copy of
//! its base set and lists its overrides explicitly:
//!
//! * testnet: mainnet + identity, port, address prefixes, seeds
//! * regtest: testnet + identity, trivial proof-of-work, own genesis, no
//!   seeds, permissive flags
//! * unittest: mainnet + identity, port, no seeds, permissive flags

use log::debug;
use serde::Serialize;
use serde_with::{hex::Hex, serde_as};

use crate::{
    address::{Base58Prefixes, Base58Type},
    block::Block,
    checkpoints::{CheckpointData, MAIN_CHECKPOINTS, REGTEST_CHECKPOINTS, TEST_CHECKPOINTS},
    genesis::{
        verified_genesis, GENESIS_MERKLE_ROOT, GENESIS_SUBSIDY, MAIN_GENESIS, MAIN_GENESIS_HASH,
        REGTEST_GENESIS, REGTEST_GENESIS_HASH, TEST_GENESIS,
    },
    network::Network,
    seed_tables::{MAIN_SEEDS, TEST_SEEDS},
    seeds::{convert_seed6, DnsSeed, SeedAddress},
    sha256::Hash,
    U256,
};

const ALERT_PUB_KEY: &str = "04ab1877684062954fc451f0d0910f825b599dc07e22260555b679a2848330c749bd96ad79460b1116db20ad50ebf35572aea93be4506011ff42145ca34b859b29";

const DNS_SEEDS: [&str; 19] = [
    "king.odj.ru",
    "king1.odj.ru",
    "king2.odj.ru",
    "king3.odj.ru",
    "king4.odj.ru",
    "king5.odj.ru",
    "nodea.exip.net",
    "nodeb.exip.net",
    "nodec.exip.net",
    "nodes.exip.net",
    "node1.exip.net",
    "node2.exip.net",
    "node3.exip.net",
    "node4.exip.net",
    "node5.exip.net",
    "node.briliantcoin.info",
    "node1.briliantcoin.info",
    "node2.briliantcoin.info",
    "node3.briliantcoin.info",
];

/// Block-version supermajority rules, counted over the last
/// `to_check_block_upgrade` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MajorityThresholds {
    /// Blocks of the new version needed before its rules are enforced on it.
    pub enforce_block_upgrade: u32,
    /// Blocks of the new version needed before older versions are rejected.
    pub reject_block_outdated: u32,
    pub to_check_block_upgrade: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainFlags {
    pub require_rpc_password: bool,
    /// Refuse to mine without connected peers.
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    /// Only relay and mine standard transactions.
    pub require_standard: bool,
    /// Blocks are produced on request (`generate`) rather than by a miner.
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    /// Report the deprecated `testnet` field over RPC.
    pub testnet_to_be_deprecated_field_rpc: bool,
}

#[serde_as]
#[derive(Debug, Clone, Serialize)]
pub struct ChainParams {
    pub network: Network,
    pub network_id: String,
    /// Magic bytes that open every P2P message.
    #[serde_as(as = "Hex")]
    pub message_start: [u8; 4],
    #[serde_as(as = "Hex")]
    pub alert_pub_key: Vec<u8>,
    pub default_port: u16,
    /// Easiest allowed target.
    pub proof_of_work_limit: U256,
    pub subsidy_halving_interval: u32,
    /// Coins paid by the genesis coinbase.
    pub genesis_subsidy: i64,
    pub majority: MajorityThresholds,
    /// 0 lets the miner pick one thread per core.
    pub miner_threads: u32,
    pub target_timespan: i64,
    pub short_target_timespan: i64,
    pub shortest_target_timespan: i64,
    pub target_spacing: i64,
    /// A tip older than this (seconds) means the node is still syncing.
    pub max_tip_age: i64,
    pub genesis: Block,
    pub genesis_hash: Hash,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SeedAddress>,
    pub base58_prefixes: Base58Prefixes,
    pub flags: ChainFlags,
    /// Height from which version-2 blocks are mandatory. `None` falls back
    /// to the supermajority rule.
    pub enforce_v2_after_height: Option<u64>,
}

impl ChainParams {
    pub fn checkpoints(&self) -> &'static CheckpointData {
        match self.network {
            // unit tests share mainnet's checkpoints
            Network::Main | Network::UnitTest => &*MAIN_CHECKPOINTS,
            Network::Test => &*TEST_CHECKPOINTS,
            Network::Regtest => &*REGTEST_CHECKPOINTS,
        }
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// Blocks between difficulty retargets.
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    pub fn require_rpc_password(&self) -> bool {
        self.flags.require_rpc_password
    }

    pub fn mining_requires_peers(&self) -> bool {
        self.flags.mining_requires_peers
    }

    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.flags.allow_min_difficulty_blocks
    }

    pub fn default_consistency_checks(&self) -> bool {
        self.flags.default_consistency_checks
    }

    pub fn require_standard(&self) -> bool {
        self.flags.require_standard
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.flags.mine_blocks_on_demand
    }

    pub fn skip_proof_of_work_check(&self) -> bool {
        self.flags.skip_proof_of_work_check
    }

    pub fn testnet_to_be_deprecated_field_rpc(&self) -> bool {
        self.flags.testnet_to_be_deprecated_field_rpc
    }
}

fn dns_seeds() -> Vec<DnsSeed> {
    DNS_SEEDS.iter().map(|host| DnsSeed::new(host, host)).collect()
}

pub fn main_params() -> ChainParams {
    let (genesis, genesis_hash) =
        verified_genesis(MAIN_GENESIS, MAIN_GENESIS_HASH, GENESIS_MERKLE_ROOT);

    let params = ChainParams {
        network: Network::Main,
        network_id: "main".to_string(),
        message_start: [0xfb, 0xc0, 0xb6, 0xdb],
        alert_pub_key: hex::decode(ALERT_PUB_KEY).unwrap_or_default(),
        default_port: 8544,
        proof_of_work_limit: U256::MAX >> 20u32,
        subsidy_halving_interval: 210_000,
        genesis_subsidy: GENESIS_SUBSIDY,
        majority: MajorityThresholds {
            enforce_block_upgrade: 750,
            reject_block_outdated: 950,
            to_check_block_upgrade: 1000,
        },
        miner_threads: 0,
        target_timespan: 7 * 24 * 60 * 60 / 2, // 3.5 days
        short_target_timespan: 10 * 60,
        shortest_target_timespan: 5 * 60,
        target_spacing: 5 * 60 / 2, // 2.5 minutes
        max_tip_age: 24 * 60 * 60,
        genesis,
        genesis_hash,
        dns_seeds: dns_seeds(),
        fixed_seeds: convert_seed6(MAIN_SEEDS),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![0],
            script_address: vec![5],
            secret_key: vec![128],
            ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4],
        },
        flags: ChainFlags {
            require_rpc_password: true,
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
        },
        enforce_v2_after_height: Some(710_000),
    };

    debug!("Built {} parameters, genesis {}", params.network, params.genesis_hash);
    params
}

pub fn testnet_params() -> ChainParams {
    let base = main_params();
    let (genesis, genesis_hash) =
        verified_genesis(TEST_GENESIS, MAIN_GENESIS_HASH, GENESIS_MERKLE_ROOT);

    let params = ChainParams {
        network: Network::Test,
        network_id: "test".to_string(),
        default_port: 9333,
        genesis,
        genesis_hash,
        // same hosts as mainnet, rebuilt rather than inherited
        dns_seeds: dns_seeds(),
        fixed_seeds: convert_seed6(TEST_SEEDS),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![48],
            secret_key: vec![176],
            ..base.base58_prefixes.clone()
        },
        ..base
    };

    debug!("Built {} parameters, genesis {}", params.network, params.genesis_hash);
    params
}

pub fn regtest_params() -> ChainParams {
    let base = testnet_params();
    let (genesis, genesis_hash) =
        verified_genesis(REGTEST_GENESIS, REGTEST_GENESIS_HASH, GENESIS_MERKLE_ROOT);

    let params = ChainParams {
        network: Network::Regtest,
        network_id: "regtest".to_string(),
        message_start: [0xfa, 0xbf, 0xb5, 0xda],
        default_port: 19444,
        proof_of_work_limit: U256::MAX >> 1u32,
        subsidy_halving_interval: 150,
        miner_threads: 1,
        genesis,
        genesis_hash,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        flags: ChainFlags {
            require_rpc_password: false,
            mining_requires_peers: false,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
            ..base.flags
        },
        enforce_v2_after_height: None,
        ..base
    };

    debug!("Built {} parameters, genesis {}", params.network, params.genesis_hash);
    params
}

pub fn unit_test_params() -> ChainParams {
    let base = main_params();

    let params = ChainParams {
        network: Network::UnitTest,
        network_id: "unittest".to_string(),
        default_port: 18445,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        flags: ChainFlags {
            require_rpc_password: false,
            mining_requires_peers: false,
            default_consistency_checks: true,
            allow_min_difficulty_blocks: false,
            mine_blocks_on_demand: true,
            ..base.flags
        },
        enforce_v2_after_height: None,
        ..base
    };

    debug!("Built {} parameters, genesis {}", params.network, params.genesis_hash);
    params
}

/// Builds a fresh parameter set for `network`.
pub fn build_params(network: Network) -> ChainParams {
    match network {
        Network::Main => main_params(),
        Network::Test => testnet_params(),
        Network::Regtest => regtest_params(),
        Network::UnitTest => unit_test_params(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::BTreeSet;

    /// Top-level fields whose values differ between two parameter sets.
    fn changed_fields(base: &ChainParams, derived: &ChainParams) -> BTreeSet<String> {
        let base = serde_json::to_value(base).unwrap();
        let derived = serde_json::to_value(derived).unwrap();
        let (Value::Object(base), Value::Object(derived)) = (base, derived) else {
            panic!("parameters must serialize to objects");
        };
        assert_eq!(
            base.keys().collect::<Vec<_>>(),
            derived.keys().collect::<Vec<_>>()
        );
        base.iter()
            .filter(|(key, value)| derived.get(*key) != Some(*value))
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn fields(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    /// Serialized parameters minus the randomized seed timestamps.
    fn deterministic_view(params: &ChainParams) -> Value {
        let mut value = serde_json::to_value(params).unwrap();
        if let Some(Value::Array(seeds)) = value.get_mut("fixed_seeds") {
            for seed in seeds {
                if let Value::Object(seed) = seed {
                    seed.remove("last_seen");
                }
            }
        }
        value
    }

    #[test]
    fn test_main_values() {
        let params = main_params();
        assert_eq!(params.network_id, "main");
        assert_eq!(params.default_port, 8544);
        assert_eq!(params.message_start, [0xfb, 0xc0, 0xb6, 0xdb]);
        assert_eq!(params.alert_pub_key.len(), 65);
        assert_eq!(params.proof_of_work_limit, U256::MAX >> 20u32);
        assert_eq!(params.subsidy_halving_interval, 210_000);
        assert_eq!(params.genesis_subsidy, 126_000_000);
        assert_eq!(params.target_timespan, 302_400);
        assert_eq!(params.target_spacing, 150);
        assert_eq!(params.difficulty_adjustment_interval(), 2016);
        assert_eq!(params.max_tip_age, 86_400);
        assert_eq!(params.genesis_hash.to_string(), MAIN_GENESIS_HASH);
        assert_eq!(params.genesis.merkle_root().to_string(), GENESIS_MERKLE_ROOT);
        assert_eq!(params.dns_seeds.len(), 19);
        assert_eq!(params.dns_seeds[0], DnsSeed::new("king.odj.ru", "king.odj.ru"));
        assert_eq!(params.fixed_seeds.len(), MAIN_SEEDS.len());
        assert!(!params.fixed_seeds.is_empty());
        assert!(params.require_rpc_password());
        assert!(params.require_standard());
        assert!(!params.skip_proof_of_work_check());
        assert_eq!(params.enforce_v2_after_height, Some(710_000));
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[0]);
        assert_eq!(
            params.base58_prefix(Base58Type::ExtSecretKey),
            &[0x04, 0x88, 0xAD, 0xE4]
        );
    }

    #[test]
    fn test_pow_limit_leading_zero_bits() {
        assert_eq!(main_params().proof_of_work_limit.leading_zeros(), 20);
        assert_eq!(regtest_params().proof_of_work_limit.leading_zeros(), 1);
    }

    #[test]
    fn test_genesis_bits_within_pow_limit() {
        for params in [main_params(), regtest_params()] {
            assert!(params.genesis.header.target() <= params.proof_of_work_limit);
        }
    }

    #[test]
    fn test_testnet_overrides_are_exactly_documented() {
        assert_eq!(
            changed_fields(&main_params(), &testnet_params()),
            fields(&[
                "base58_prefixes",
                "default_port",
                "fixed_seeds",
                "network",
                "network_id",
            ])
        );
    }

    #[test]
    fn test_regtest_overrides_are_exactly_documented() {
        assert_eq!(
            changed_fields(&testnet_params(), &regtest_params()),
            fields(&[
                "default_port",
                "dns_seeds",
                "enforce_v2_after_height",
                "fixed_seeds",
                "flags",
                "genesis",
                "genesis_hash",
                "message_start",
                "miner_threads",
                "network",
                "network_id",
                "proof_of_work_limit",
                "subsidy_halving_interval",
            ])
        );
    }

    #[test]
    fn test_unit_test_overrides_are_exactly_documented() {
        assert_eq!(
            changed_fields(&main_params(), &unit_test_params()),
            fields(&[
                "default_port",
                "dns_seeds",
                "enforce_v2_after_height",
                "fixed_seeds",
                "flags",
                "network",
                "network_id",
            ])
        );
    }

    #[test]
    fn test_testnet_values() {
        let params = testnet_params();
        assert_eq!(params.default_port, 9333);
        assert_eq!(params.genesis_hash.to_string(), MAIN_GENESIS_HASH);
        assert_eq!(params.message_start, main_params().message_start);
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[48]);
        assert_eq!(params.base58_prefix(Base58Type::ScriptAddress), &[5]);
        assert_eq!(params.base58_prefix(Base58Type::SecretKey), &[176]);
        assert_eq!(params.fixed_seeds.len(), TEST_SEEDS.len());
        assert_eq!(params.dns_seeds, main_params().dns_seeds);
        assert_eq!(params.flags, main_params().flags);
        assert_eq!(params.enforce_v2_after_height, Some(710_000));
    }

    #[test]
    fn test_regtest_values() {
        let params = regtest_params();
        assert_eq!(params.default_port, 19444);
        assert_eq!(params.subsidy_halving_interval, 150);
        assert_eq!(params.miner_threads, 1);
        assert_eq!(params.genesis_hash.to_string(), REGTEST_GENESIS_HASH);
        assert_eq!(params.genesis.header.bits, 0x207fffff);
        assert!(params.dns_seeds.is_empty());
        assert!(params.fixed_seeds.is_empty());
        assert!(!params.require_rpc_password());
        assert!(!params.mining_requires_peers());
        assert!(params.allow_min_difficulty_blocks());
        assert!(params.default_consistency_checks());
        assert!(!params.require_standard());
        assert!(params.mine_blocks_on_demand());
        assert!(!params.skip_proof_of_work_check());
        assert_eq!(params.enforce_v2_after_height, None);
        // inherited from testnet
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[48]);
    }

    #[test]
    fn test_unit_test_values() {
        let params = unit_test_params();
        assert_eq!(params.default_port, 18445);
        assert_eq!(params.genesis_hash.to_string(), MAIN_GENESIS_HASH);
        assert!(params.dns_seeds.is_empty());
        assert!(params.fixed_seeds.is_empty());
        assert!(params.default_consistency_checks());
        assert!(params.mine_blocks_on_demand());
        assert!(!params.allow_min_difficulty_blocks());
        assert!(params.require_standard());
    }

    #[test]
    fn test_checkpoints_follow_network() {
        assert_eq!(main_params().checkpoints().total_blocks_estimate(), 380000);
        assert_eq!(testnet_params().checkpoints().total_blocks_estimate(), 68885);
        assert_eq!(regtest_params().checkpoints().total_blocks_estimate(), 0);
        assert!(std::ptr::eq(
            unit_test_params().checkpoints(),
            main_params().checkpoints()
        ));
    }

    #[test]
    fn test_construction_is_deterministic() {
        for network in Network::ALL {
            let first = build_params(network);
            let second = build_params(network);
            assert_eq!(first.network, network);
            assert_eq!(first.genesis_hash, second.genesis_hash);
            assert_eq!(first.genesis.merkle_root(), second.genesis.merkle_root());
            assert_eq!(deterministic_view(&first), deterministic_view(&second));
        }
    }
}
