// briliant-node/src/report.rs
use briliant_core::{address::Base58Type, ChainParams};
use std::fmt;

/// Human-readable summary of the active parameters and the peer-discovery
/// plan a node would follow.
pub struct Summary<'a> {
    pub params: &'a ChainParams,
    pub show_fixed_seeds: bool,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.params;
        let checkpoints = params.checkpoints();

        writeln!(f, "Network:            {}", params.network_id)?;
        writeln!(f, "Message start:      {}", hex::encode(params.message_start))?;
        writeln!(f, "Default port:       {}", params.default_port)?;
        writeln!(f, "Genesis hash:       {}", params.genesis_hash)?;
        writeln!(f, "Genesis merkle:     {}", params.genesis.merkle_root())?;
        writeln!(f, "Genesis time:       {}", params.genesis.header.time)?;
        writeln!(f, "PoW limit:          {:#x}", params.proof_of_work_limit)?;
        writeln!(f, "Halving interval:   {}", params.subsidy_halving_interval)?;
        writeln!(
            f,
            "Retarget interval:  {} blocks",
            params.difficulty_adjustment_interval()
        )?;
        writeln!(
            f,
            "Address prefix:     {}",
            hex::encode(params.base58_prefix(Base58Type::PubkeyAddress))
        )?;
        match params.enforce_v2_after_height {
            Some(height) => writeln!(f, "V2 enforced after:  {}", height)?,
            None => writeln!(f, "V2 enforced after:  never")?,
        }
        writeln!(
            f,
            "Checkpoints:        {} (last at height {})",
            checkpoints.checkpoints.len(),
            checkpoints.total_blocks_estimate()
        )?;

        writeln!(f, "DNS seeds:          {}", params.dns_seeds.len())?;
        for seed in &params.dns_seeds {
            writeln!(f, "  {}", seed.host)?;
        }

        writeln!(f, "Fixed seeds:        {}", params.fixed_seeds.len())?;
        if self.show_fixed_seeds {
            for seed in &params.fixed_seeds {
                writeln!(
                    f,
                    "  {} (last seen {})",
                    seed.addr,
                    seed.last_seen.format("%Y-%m-%d")
                )?;
            }
        }
        Ok(())
    }
}

pub fn summary(params: &ChainParams, show_fixed_seeds: bool) -> String {
    Summary {
        params,
        show_fixed_seeds,
    }
    .to_string()
}
