// briliant-node main.rs
mod config;
mod report;

use anyhow::{bail, Context, Result};
use argh::FromArgs;
use briliant_core::{select_params, Network};
use log::{info, warn};
use std::path::PathBuf;

use crate::config::NodeConfig;

#[derive(FromArgs)]
/// Briliantcoin node bootstrap: selects a network and reports its parameters
struct Args {
    #[argh(option, default = "PathBuf::from(\"briliant.toml\")")]
    /// configuration file location
    config: PathBuf,

    #[argh(option)]
    /// network name (main, test, regtest, unittest)
    network: Option<String>,

    #[argh(switch)]
    /// use the test network
    testnet: bool,

    #[argh(switch)]
    /// use the regression test network
    regtest: bool,

    #[argh(switch)]
    /// list every fixed seed address
    show_fixed_seeds: bool,

    #[argh(switch)]
    /// print the full parameter set as JSON
    json: bool,
}

/// Command-line choices override the config file. An explicit name beats the
/// switches; switches given on the command line replace the file's switches.
fn resolve_network(args: &Args, config: &NodeConfig) -> Result<Network> {
    if let Some(name) = &args.network {
        return name.parse();
    }
    if args.testnet || args.regtest {
        return match Network::from_flags(args.testnet, args.regtest) {
            Some(network) => Ok(network),
            None => bail!("Invalid combination of -testnet and -regtest"),
        };
    }
    config.network()
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Args = argh::from_env();
    let config = NodeConfig::load(&args.config)?;

    let network = match resolve_network(&args, &config) {
        Ok(network) => network,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            eprintln!("Run with --help for usage.");
            std::process::exit(1);
        }
    };

    let params = select_params(network);
    info!("Starting Briliantcoin node on {}", network);
    if params.fixed_seeds.is_empty() && params.dns_seeds.is_empty() {
        warn!("No seeds configured for {}; peers must be added manually", network);
    }

    if args.json {
        let json = serde_json::to_string_pretty(params)
            .context("Failed to serialize chain parameters")?;
        println!("{}", json);
    } else {
        print!(
            "{}",
            report::summary(params, args.show_fixed_seeds || config.show_fixed_seeds)
        );
    }
    Ok(())
}
