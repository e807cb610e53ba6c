//! Hard-coded `(height, hash)` anchors per network.
//!
//! A good checkpoint block is surrounded by blocks with sane timestamps (no
//! earlier block with a later timestamp, no later block with an earlier one)
//! and carries no unusual transactions.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::sha256::Hash;

/// Verifying signatures costs roughly this much more than the cheap checks
/// done below the last checkpoint.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Serialize)]
pub struct CheckpointData {
    pub checkpoints: BTreeMap<u64, Hash>,
    /// UNIX timestamp of the last checkpoint block.
    pub last_checkpoint_time: i64,
    /// Total number of transactions between genesis and the last checkpoint.
    pub transactions_last_checkpoint: u64,
    /// Estimated number of transactions per day after the last checkpoint.
    pub transactions_per_day: f64,
}

impl CheckpointData {
    fn from_entries(
        entries: &[(u64, &str)],
        last_checkpoint_time: i64,
        transactions_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Self {
        let checkpoints = entries
            .iter()
            .map(|(height, hash)| {
                let hash = Hash::try_from(*hash).expect("checkpoint hash");
                (*height, hash)
            })
            .collect();

        CheckpointData {
            checkpoints,
            last_checkpoint_time,
            transactions_last_checkpoint,
            transactions_per_day,
        }
    }

    /// Returns false only when a checkpoint exists at `height` and disagrees
    /// with `hash`.
    pub fn check_block(&self, height: u64, hash: &Hash) -> bool {
        match self.checkpoints.get(&height) {
            Some(expected) => expected == hash,
            None => true,
        }
    }

    /// Height of the highest checkpoint, a lower bound for the chain length.
    pub fn total_blocks_estimate(&self) -> u64 {
        self.checkpoints
            .keys()
            .next_back()
            .copied()
            .unwrap_or_default()
    }

    pub fn last_checkpoint_at_or_below(&self, height: u64) -> Option<(u64, Hash)> {
        self.checkpoints
            .range(..=height)
            .next_back()
            .map(|(height, hash)| (*height, *hash))
    }

    /// Estimates how far verification has progressed, in `[0, 1]`.
    ///
    /// `chain_tx` and `block_time` describe the current tip; `now` is the
    /// current UNIX time. Work below the last checkpoint is counted as cheap,
    /// everything after it as expensive when `sigchecks` is set.
    pub fn guess_verification_progress(
        &self,
        chain_tx: u64,
        block_time: i64,
        now: i64,
        sigchecks: bool,
    ) -> f64 {
        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };

        let (work_before, work_after) = if chain_tx <= self.transactions_last_checkpoint {
            let cheap_before = chain_tx as f64;
            let cheap_after = (self.transactions_last_checkpoint - chain_tx) as f64;
            let expensive_after = (now - self.last_checkpoint_time) as f64 / SECONDS_PER_DAY
                * self.transactions_per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = self.transactions_last_checkpoint as f64;
            let expensive_before = (chain_tx - self.transactions_last_checkpoint) as f64;
            let expensive_after =
                (now - block_time) as f64 / SECONDS_PER_DAY * self.transactions_per_day;
            (
                cheap_before + expensive_before * factor,
                expensive_after * factor,
            )
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 0.0;
        }
        work_before / total
    }
}

lazy_static! {
    pub static ref MAIN_CHECKPOINTS: CheckpointData = CheckpointData::from_entries(
        &[
            (0, "04578e13aa752f24c4396823febf8a6762416d6e088010a320e95771c5aa0c42"),
            (1000, "a62de049949277496487a7cf2d1f2fe8d21acb5e007051ffc5d05015d8abfffa"),
            (32000, "b5cd6e6b08cddca51593d2f15a4578efbbe4c6ae2d472010a961fe8c2ad7ea64"),
            (64000, "d444affd0bca745bcb28bffea34f9521a9f4225b202aaccdd7e85c220021992f"),
            (68886, "09cb7123227f99b175fe40bee596191045bdb78591094de518bc57034c5160ef"),
            (68911, "3484b1975ce95f8e8ec75b95767d947435855c61a0cfb75197d47141f51d9c05"),
            (68912, "c1e07231530f16428ae3daad97901d9ad430ec50e2678527cb176331c014abf6"),
            (82333, "48a63d48372c96432547bd40eb912bc95c990ec44cdf20e05bc1a622f9ac872f"),
            (82334, "5a2456bf4f18b0257ed294a237f36196485252402a019bd2f7ec2d9222f0c604"),
            (96544, "0ebc20cc206e119ed53f6f0130badebdaa07d75114e91a8e8911a34cd4b25f0d"),
            (96837, "05a60a9cff06d177fdc0c63cae9a64bbc776fb7c3ebcf6319dcf61e76e267aba"),
            (98000, "0fee2b491f069da2865cdecd4cef6e0eafed7882b1bb0e0d89dc8e6e91820c65"),
            (99000, "0480f1e884cf7495f4fafe4a992e5e1dfc0011293e36181c909dc8dc3b7488e6"),
            (110000, "06a9bc974358ed5b2c0751723559921d512c85aa6c2da1e73cd4b7091573f613"),
            (111401, "639dd70470c381d361ea32fe354ab867e28de6b623f91e35c873c07c7dfd9593"),
            (111500, "9351fe538afe6cf3e880680233732e9f6d579dea6c6ed144362eaf8f1dff4808"),
            (120000, "7d64c0de4b8f54fe31b5f913c73788a4a84f3e7c390bdf70115e94b8c2497f22"),
            (140000, "4248dead9734e93cb3582b9a229150d82e336a5c38aff6f7790f6ea86cd2681e"),
            (160000, "cb9cc825dc3ae201ae6b49db8b576ec435aa051f85ca91eda7300621ce1faa6f"),
            (180000, "152f175a22a803b1e8ef675827a218ec1bf1cc8ea614ba0a251132489e409f1a"),
            (200000, "9b3b68c58e36e41efd6a257483b8b38fe2fa81e3f8303ae04c9f5af9b988f03a"),
            (210000, "fbfa7ad296970e87f501675240de21d5ff419848c29158a579960f98cba839b5"),
            (240000, "5f583e57c283d7852069d61f8eafcccc0aab94ecfeb0fab540e3a20201559eff"),
            (260000, "b7680a04d81bcccb4bf6e698bdb73f502b0ab174c53076ddef506ef32c5261fd"),
            (280000, "47ddb900e7d4b0bd9182d87cae4d94db6f216ba2db66ce938be3edf2e5d934da"),
            (300000, "2e93e2f919aea103cb586f2a82460848418665b1ebc0c78beca37577f1189540"),
            (320000, "b083361d5443f2ced71aa49eb19fffb4956b148cb978d4cc7e70f5fe9b2c2ee2"),
            (340000, "7198fa8c9ac668837676b81f7c39aa12f9f087a798eb3f18807b5152afb517f9"),
            (360000, "6fe10bed686606c0f74bbf43321146a8f495e34b58d2f2847611b48b068816a4"),
            (380000, "9a92724b64f3f08ec789b22214f7a4803464fae14bb8eb48e8fcd0e5cb04a9f3"),
        ],
        // d77cb63a40042d73a83142383c7872c123cda7253db1d9c0effc8a029ca857b2
        1562239916,
        381591,
        1152.0,
    );

    pub static ref TEST_CHECKPOINTS: CheckpointData = CheckpointData::from_entries(
        &[
            (0, "04578e13aa752f24c4396823febf8a6762416d6e088010a320e95771c5aa0c42"),
            (1000, "a62de049949277496487a7cf2d1f2fe8d21acb5e007051ffc5d05015d8abfffa"),
            (32000, "b5cd6e6b08cddca51593d2f15a4578efbbe4c6ae2d472010a961fe8c2ad7ea64"),
            (64000, "d444affd0bca745bcb28bffea34f9521a9f4225b202aaccdd7e85c220021992f"),
            (68885, "3b818d0f9313b3400c8b79365f692733bf3996264b1d593acfd307e08838889f"),
        ],
        1498286764, // block 68885
        69358,
        630.0,
    );

    pub static ref REGTEST_CHECKPOINTS: CheckpointData = CheckpointData::from_entries(
        &[(0, "a2d875cf8a6aba0718f9224ebda9bc5c97dbce25363ae9b7279aa7cad51e03b8")],
        0,
        0,
        0.0,
    );
}
