// briliant-node/src/config.rs
use anyhow::{bail, Context, Result};
use briliant_core::Network;
use log::info;
use serde::{Deserialize, Serialize};
use std::{fs, io::ErrorKind, path::Path};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NodeConfig {
    /// Explicit network name. Takes precedence over the two switches below.
    #[serde(default)]
    pub network: Option<String>,

    #[serde(default)]
    pub testnet: bool,

    #[serde(default)]
    pub regtest: bool,

    #[serde(default = "default_show_fixed_seeds")]
    pub show_fixed_seeds: bool,
}

fn default_show_fixed_seeds() -> bool {
    false
}

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig {
            network: None,
            testnet: false,
            regtest: false,
            show_fixed_seeds: default_show_fixed_seeds(),
        }
    }
}

impl NodeConfig {
    /// Reads the config file. A missing file yields the defaults; a file that
    /// exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No config file at {}, using defaults.", path.display());
                Ok(NodeConfig::default())
            }
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Resolves the network this config asks for.
    pub fn network(&self) -> Result<Network> {
        if let Some(name) = &self.network {
            return name.parse();
        }
        match Network::from_flags(self.testnet, self.regtest) {
            Some(network) => Ok(network),
            None => bail!("Invalid combination of testnet and regtest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: NodeConfig = toml::from_str("").unwrap();
        assert_eq!(config, NodeConfig::default());
        assert_eq!(config.network().unwrap(), Network::Main);
    }

    #[test]
    fn test_switches() {
        let config: NodeConfig = toml::from_str("regtest = true").unwrap();
        assert_eq!(config.network().unwrap(), Network::Regtest);

        let config: NodeConfig = toml::from_str("testnet = true\nregtest = true").unwrap();
        assert!(config.network().is_err());
    }

    #[test]
    fn test_named_network_wins() {
        let config: NodeConfig =
            toml::from_str("network = \"unittest\"\ntestnet = true\nshow_fixed_seeds = true")
                .unwrap();
        assert_eq!(config.network().unwrap(), Network::UnitTest);
        assert!(config.show_fixed_seeds);

        let config: NodeConfig = toml::from_str("network = \"signet\"").unwrap();
        assert!(config.network().is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("briliant-node-no-such-config.toml");
        let config = NodeConfig::load(&path).unwrap();
        assert_eq!(config, NodeConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "briliant-node-malformed-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "testnet = \"yes\"").unwrap();
        let err = NodeConfig::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
