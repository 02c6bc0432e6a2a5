pub mod feeds;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chain presets for feedlink.
/// Available networks:
/// - Ethereum (chain id: 1)
/// - ArbitrumOne (chain id: 42161)
/// - Optimism (chain id: 10)
/// - Polygon (chain id: 137)
/// - Avalanche (chain id: 43114)
/// - Sepolia (chain id: 11155111)
///
/// Usage:
///
/// ```rust
/// use feedlink::chains::Chain;
///
/// assert_eq!(Chain::from_id(1), Some(Chain::Ethereum));
/// assert_eq!(Chain::from_id(5), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    Ethereum,
    ArbitrumOne,
    Optimism,
    Polygon,
    Avalanche,
    Sepolia,
}

impl Chain {
    /// Every network the registry knows about, in a fixed order.
    pub const ALL: [Chain; 6] = [
        Chain::Ethereum,
        Chain::ArbitrumOne,
        Chain::Optimism,
        Chain::Polygon,
        Chain::Avalanche,
        Chain::Sepolia,
    ];

    /// Resolve a numeric chain id to its enumerated network.
    /// Returns `None` for any id outside the supported set.
    pub fn from_id(chain_id: u64) -> Option<Chain> {
        match chain_id {
            1 => Some(Chain::Ethereum),
            42161 => Some(Chain::ArbitrumOne),
            10 => Some(Chain::Optimism),
            137 => Some(Chain::Polygon),
            43114 => Some(Chain::Avalanche),
            11155111 => Some(Chain::Sepolia),
            _ => None,
        }
    }

    /// The canonical numeric chain id of this network.
    pub fn id(&self) -> u64 {
        match self {
            Chain::Ethereum => 1,
            Chain::ArbitrumOne => 42161,
            Chain::Optimism => 10,
            Chain::Polygon => 137,
            Chain::Avalanche => 43114,
            Chain::Sepolia => 11155111,
        }
    }

    /// Human-readable network name.
    pub fn name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::ArbitrumOne => "Arbitrum One",
            Chain::Optimism => "Optimism",
            Chain::Polygon => "Polygon",
            Chain::Avalanche => "Avalanche",
            Chain::Sepolia => "Sepolia",
        }
    }

    /// Return a public fallback RPC url for this chain.
    /// Nothing in this crate dials it; it is carried as a preset for
    /// consumers that go on to query the feed contracts.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Chain::Ethereum => "https://1rpc.io/eth",
            Chain::ArbitrumOne => "https://1rpc.io/arb",
            Chain::Optimism => "https://1rpc.io/op",
            Chain::Polygon => "https://1rpc.io/matic",
            Chain::Avalanche => "https://1rpc.io/avax",
            Chain::Sepolia => "https://1rpc.io/sepolia",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use crate::chains::Chain;

    #[test]
    fn valid_networks() {
        assert!(Chain::Ethereum.rpc_url().contains("https://"));
        assert!(Chain::ArbitrumOne.rpc_url().contains("https://"));
        assert!(Chain::Sepolia.rpc_url().contains("https://"));
    }

    #[test]
    fn chain_id_round_trip() {
        for chain in Chain::ALL {
            assert_eq!(Chain::from_id(chain.id()), Some(chain));
        }
    }

    #[test]
    fn unknown_chain_id() {
        assert_eq!(Chain::from_id(0), None);
        assert_eq!(Chain::from_id(56), None);
        assert_eq!(Chain::from_id(u64::MAX), None);
    }
}
