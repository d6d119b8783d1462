//! Protocol constants and network identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NetworkIdError;

/// Serialized block header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Seconds in one week. Fixed seeds are aged between one and two of these.
pub const ONE_WEEK_SECS: i64 = 7 * 24 * 60 * 60;

/// Network identity: Main or Testnet.
///
/// Every per-network constant lives in a parameter set keyed by this id;
/// the id itself carries no parameters.
///
/// # Examples
///
/// ```
/// use dmb_core::constants::NetworkId;
/// let net: NetworkId = "testnet".parse().unwrap();
/// assert_eq!(net, NetworkId::Testnet);
/// assert_eq!(NetworkId::default(), NetworkId::Main);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Production network.
    #[default]
    Main,
    /// Public test network.
    Testnet,
}

impl NetworkId {
    /// All known networks, mainnet first.
    pub const ALL: [NetworkId; 2] = [NetworkId::Main, NetworkId::Testnet];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = NetworkIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Self::Main),
            "test" | "testnet" => Ok(Self::Testnet),
            _ => Err(NetworkIdError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_main() {
        assert_eq!(NetworkId::default(), NetworkId::Main);
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("main".parse::<NetworkId>().unwrap(), NetworkId::Main);
        assert_eq!("MAINNET".parse::<NetworkId>().unwrap(), NetworkId::Main);
        assert_eq!("test".parse::<NetworkId>().unwrap(), NetworkId::Testnet);
        assert_eq!("testnet".parse::<NetworkId>().unwrap(), NetworkId::Testnet);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "regtest".parse::<NetworkId>().unwrap_err();
        assert_eq!(err, NetworkIdError::Unknown("regtest".into()));
    }

    #[test]
    fn display_round_trips() {
        for net in NetworkId::ALL {
            assert_eq!(net.to_string().parse::<NetworkId>().unwrap(), net);
        }
    }

    #[test]
    fn one_week_in_seconds() {
        assert_eq!(ONE_WEEK_SECS, 604_800);
    }
}
