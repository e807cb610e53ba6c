pub mod address;
pub mod block;
pub mod checkpoints;
pub mod encoding;
pub mod genesis;
pub mod network;
pub mod params;
pub mod registry;
pub mod script;
#[rustfmt::skip]
pub mod seed_tables;
pub mod seeds;
pub mod sha256;
pub mod transactions;
pub mod utils;

use serde::{Deserialize, Serialize};
use uint::construct_uint;

construct_uint! {
   #[derive(Serialize, Deserialize)]
   pub struct U256(4);
}

pub use network::Network;
pub use params::ChainParams;
pub use registry::{params, params_for, select_params, select_params_from_flags, ParamsRegistry};

/// Smallest units per coin.
pub const COIN: i64 = 100_000_000;
