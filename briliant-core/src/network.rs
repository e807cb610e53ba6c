use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The networks a node can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    Test,
    Regtest,
    /// Mainnet rules with mutable consensus knobs, for automated tests.
    UnitTest,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Main,
        Network::Test,
        Network::Regtest,
        Network::UnitTest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
            Network::UnitTest => "unittest",
        }
    }

    /// Resolves the `-testnet` / `-regtest` switches. Asking for both is
    /// invalid and yields `None`; asking for neither selects mainnet.
    pub fn from_flags(testnet: bool, regtest: bool) -> Option<Network> {
        match (testnet, regtest) {
            (true, true) => None,
            (true, false) => Some(Network::Test),
            (false, true) => Some(Network::Regtest),
            (false, false) => Some(Network::Main),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            "unittest" => Ok(Network::UnitTest),
            other => Err(anyhow!(
                "Unknown network '{}', expected one of: main, test, regtest, unittest",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for network in Network::ALL {
            assert_eq!(network.name().parse::<Network>().unwrap(), network);
            assert_eq!(network.to_string(), network.name());
        }
        assert_eq!("TestNet".parse::<Network>().unwrap(), Network::Test);
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "signet".parse::<Network>().unwrap_err();
        assert!(err.to_string().contains("signet"));
    }

    #[test]
    fn test_flag_resolution() {
        assert_eq!(Network::from_flags(false, false), Some(Network::Main));
        assert_eq!(Network::from_flags(true, false), Some(Network::Test));
        assert_eq!(Network::from_flags(false, true), Some(Network::Regtest));
        assert_eq!(Network::from_flags(true, true), None);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Network::UnitTest).unwrap(),
            "\"unittest\""
        );
        let network: Network = serde_json::from_str("\"regtest\"").unwrap();
        assert_eq!(network, Network::Regtest);
    }
}
