//! Selection of the active parameter set.
//!
//! Each network's set is built once, on first use, and never changes
//! afterwards. Components either receive a `ParamsRegistry` (or a plain
//! `&ChainParams`) from whoever selected the network, or use the process-wide
//! handle, which can be assigned exactly once.
//!
//! Asking for parameters before a network was selected, re-selecting a
//! different network globally, or mutating anything but the unit-test set
//! are caller bugs and panic.

use std::sync::OnceLock;

use lazy_static::lazy_static;
use log::{debug, info};

use crate::{
    network::Network,
    params::{main_params, regtest_params, testnet_params, unit_test_params, ChainParams},
};

lazy_static! {
    static ref MAIN_PARAMS: ChainParams = main_params();
    static ref TESTNET_PARAMS: ChainParams = testnet_params();
    static ref REGTEST_PARAMS: ChainParams = regtest_params();
    static ref UNIT_TEST_PARAMS: ChainParams = unit_test_params();
}

/// The immutable parameter set for `network`. Does not change any selection.
pub fn params_for(network: Network) -> &'static ChainParams {
    match network {
        Network::Main => &MAIN_PARAMS,
        Network::Test => &TESTNET_PARAMS,
        Network::Regtest => &REGTEST_PARAMS,
        Network::UnitTest => &UNIT_TEST_PARAMS,
    }
}

enum ActiveParams {
    Shared(&'static ChainParams),
    /// Private copy of the unit-test set, so mutations stay local.
    Owned(Box<ChainParams>),
}

impl ActiveParams {
    fn get(&self) -> &ChainParams {
        match self {
            ActiveParams::Shared(params) => params,
            ActiveParams::Owned(params) => params,
        }
    }
}

/// Tracks which network is active for one node instance.
#[derive(Default)]
pub struct ParamsRegistry {
    active: Option<ActiveParams>,
}

impl ParamsRegistry {
    pub fn new() -> Self {
        ParamsRegistry::default()
    }

    /// Activates `network` and returns its parameters.
    pub fn select(&mut self, network: Network) -> &ChainParams {
        let active = match network {
            Network::UnitTest => ActiveParams::Owned(Box::new(UNIT_TEST_PARAMS.clone())),
            other => ActiveParams::Shared(params_for(other)),
        };
        info!("Selected {} chain parameters", network);
        self.active.insert(active).get()
    }

    /// Resolves the `-testnet` / `-regtest` switches and selects the result.
    /// Returns false, leaving the selection untouched, when they conflict.
    pub fn select_from_flags(&mut self, testnet: bool, regtest: bool) -> bool {
        match Network::from_flags(testnet, regtest) {
            Some(network) => {
                self.select(network);
                true
            }
            None => {
                debug!("Conflicting network flags: testnet and regtest both set");
                false
            }
        }
    }

    pub fn is_selected(&self) -> bool {
        self.active.is_some()
    }

    /// The active parameters.
    ///
    /// # Panics
    ///
    /// If no network has been selected.
    pub fn current(&self) -> &ChainParams {
        match &self.active {
            Some(active) => active.get(),
            None => panic!("chain parameters requested before a network was selected"),
        }
    }

    /// Parameters for `network`. For the active network this is the same set
    /// `current` returns, including any unit-test modifications.
    pub fn params_for(&self, network: Network) -> &ChainParams {
        match &self.active {
            Some(active) if active.get().network == network => active.get(),
            _ => params_for(network),
        }
    }

    /// Setters for the unit-test parameters.
    ///
    /// # Panics
    ///
    /// Unless the unit-test network is the active selection.
    #[cfg(any(test, feature = "unit-test-params"))]
    pub fn modifiable(&mut self) -> ModifiableParams<'_> {
        let network = self.active.as_ref().map(|active| active.get().network);
        match (network, &mut self.active) {
            (Some(Network::UnitTest), Some(ActiveParams::Owned(params))) => {
                ModifiableParams { params }
            }
            (Some(network), _) => {
                panic!("modifiable parameters requested while {} is active", network)
            }
            (None, _) => panic!("modifiable parameters requested before a network was selected"),
        }
    }
}

/// Mutable view of the unit-test parameters, for tests that need to run
/// under alternate consensus settings without rebuilding a parameter set.
#[cfg(any(test, feature = "unit-test-params"))]
pub struct ModifiableParams<'a> {
    params: &'a mut ChainParams,
}

#[cfg(any(test, feature = "unit-test-params"))]
impl ModifiableParams<'_> {
    pub fn set_subsidy_halving_interval(&mut self, interval: u32) {
        self.params.subsidy_halving_interval = interval;
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, majority: u32) {
        self.params.majority.enforce_block_upgrade = majority;
    }

    pub fn set_reject_block_outdated_majority(&mut self, majority: u32) {
        self.params.majority.reject_block_outdated = majority;
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, window: u32) {
        self.params.majority.to_check_block_upgrade = window;
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) {
        self.params.flags.default_consistency_checks = enabled;
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) {
        self.params.flags.allow_min_difficulty_blocks = allowed;
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) {
        self.params.flags.skip_proof_of_work_check = skip;
    }
}

static SELECTED: OnceLock<Network> = OnceLock::new();

/// Selects the process-wide network. Selecting the same network again is a
/// no-op.
///
/// # Panics
///
/// If a different network was already selected.
pub fn select_params(network: Network) -> &'static ChainParams {
    let selected = *SELECTED.get_or_init(|| network);
    assert_eq!(
        selected, network,
        "process-wide network already selected as {}",
        selected
    );
    let params = params_for(network);
    info!(
        "Active network {} (genesis {})",
        network, params.genesis_hash
    );
    params
}

/// Process-wide variant of [`ParamsRegistry::select_from_flags`].
pub fn select_params_from_flags(testnet: bool, regtest: bool) -> bool {
    match Network::from_flags(testnet, regtest) {
        Some(network) => {
            select_params(network);
            true
        }
        None => false,
    }
}

/// The process-wide parameters.
///
/// # Panics
///
/// If [`select_params`] has not been called.
pub fn params() -> &'static ChainParams {
    match SELECTED.get() {
        Some(network) => params_for(*network),
        None => panic!("chain parameters requested before a network was selected"),
    }
}

pub fn selected_network() -> Option<Network> {
    SELECTED.get().copied()
}
