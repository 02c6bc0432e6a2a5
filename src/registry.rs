use alloy::primitives::Address;
use std::collections::HashMap;

use crate::{
    chains::{feeds, Chain},
    error::Error,
    pairs::Pair,
};

/// ## FeedRegistry
///
/// An in-memory, read-only table mapping (network, pair) to the Chainlink
/// aggregator proxy address deployed on that network. The table is built
/// once from the compiled-in presets in [`crate::chains::feeds`] and never
/// mutated, so lookups are pure and safe under any number of concurrent
/// readers.
///
/// Example:
///
/// ```rust
/// use feedlink::{pairs::Pair, registry::FeedRegistry};
///
/// let registry = FeedRegistry::new();
/// let feed = registry.feed_address(1, Pair::EthUsd).unwrap();
/// println!("mainnet ETH/USD aggregator: {feed}");
/// ```
#[derive(Clone, Debug)]
pub struct FeedRegistry {
    feeds: HashMap<Chain, HashMap<Pair, Address>>,
}

impl FeedRegistry {
    /// Builds the registry from the per-network presets.
    pub fn new() -> FeedRegistry {
        let feeds = HashMap::from([
            (Chain::Ethereum, feeds::ethereum_feeds()),
            (Chain::ArbitrumOne, feeds::arbitrum_feeds()),
            (Chain::Optimism, feeds::optimism_feeds()),
            (Chain::Polygon, feeds::polygon_feeds()),
            (Chain::Avalanche, feeds::avalanche_feeds()),
            (Chain::Sepolia, feeds::sepolia_feeds()),
        ]);
        let entries: usize = feeds.values().map(HashMap::len).sum();
        log::debug!(
            "feed registry loaded: {} networks, {} feeds",
            feeds.len(),
            entries
        );
        FeedRegistry { feeds }
    }

    /// Looks up the feed address for a numeric chain id and pair.
    ///
    /// Fails with [`Error::UnsupportedNetwork`] when the id is not one of
    /// the enumerated networks, and with [`Error::UnsupportedPair`] when
    /// the network is known but carries no feed for the pair.
    pub fn feed_address(&self, chain_id: u64, pair: Pair) -> Result<Address, Error> {
        let chain = Chain::from_id(chain_id).ok_or(Error::UnsupportedNetwork(chain_id))?;
        self.feed_for(chain, pair)
    }

    /// Typed variant of [`FeedRegistry::feed_address`]; the network is
    /// already resolved, so only [`Error::UnsupportedPair`] can occur.
    pub fn feed_for(&self, chain: Chain, pair: Pair) -> Result<Address, Error> {
        self.feeds
            .get(&chain)
            .and_then(|table| table.get(&pair))
            .copied()
            .ok_or(Error::UnsupportedPair { chain, pair })
    }

    /// Reports whether a concrete feed entry exists, without failing.
    /// `is_supported(id, pair)` is true exactly when
    /// [`FeedRegistry::feed_address`] would return an address.
    pub fn is_supported(&self, chain_id: u64, pair: Pair) -> bool {
        self.feed_address(chain_id, pair).is_ok()
    }

    /// The pairs registered on a network, in [`Pair::ALL`] order.
    pub fn supported_pairs(&self, chain: Chain) -> Vec<Pair> {
        let table = match self.feeds.get(&chain) {
            Some(table) => table,
            None => return Vec::new(),
        };
        Pair::ALL
            .into_iter()
            .filter(|pair| table.contains_key(pair))
            .collect()
    }
}

impl Default for FeedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use crate::{chains::Chain, error::Error, pairs::Pair, registry::FeedRegistry};

    #[test]
    fn mainnet_eth_usd_literal() {
        let registry = FeedRegistry::new();
        assert_eq!(
            registry.feed_address(1, Pair::EthUsd).unwrap(),
            address!("5f4eC3Df9cbd43714FE2740f5E3616155c5b8419")
        );
    }

    #[test]
    fn avax_usd_only_on_avalanche() {
        let registry = FeedRegistry::new();
        assert_eq!(
            registry.feed_address(43114, Pair::AvaxUsd).unwrap(),
            address!("0A77230d17318075983913bC2145DB16C7366156")
        );
        assert_eq!(
            registry.feed_address(1, Pair::AvaxUsd),
            Err(Error::UnsupportedPair {
                chain: Chain::Ethereum,
                pair: Pair::AvaxUsd
            })
        );
    }

    #[test]
    fn unknown_network_fails_without_panicking() {
        let registry = FeedRegistry::new();
        assert_eq!(
            registry.feed_address(5, Pair::EthUsd),
            Err(Error::UnsupportedNetwork(5))
        );
        assert!(!registry.is_supported(5, Pair::EthUsd));
    }

    #[test]
    fn common_pairs_supported_everywhere() {
        let registry = FeedRegistry::new();
        for chain in Chain::ALL {
            for pair in [Pair::EthUsd, Pair::BtcUsd, Pair::LinkUsd] {
                assert!(
                    registry.is_supported(chain.id(), pair),
                    "{pair} missing on {chain}"
                );
            }
        }
    }

    #[test]
    fn support_predicate_matches_lookup() {
        // is_supported(n, p) must agree with feed_address(n, p) across the
        // whole product, including ids outside the enumerated set.
        let registry = FeedRegistry::new();
        let chain_ids = Chain::ALL.iter().map(|chain| chain.id()).chain([0, 5, 56]);
        for chain_id in chain_ids {
            for pair in Pair::ALL {
                assert_eq!(
                    registry.is_supported(chain_id, pair),
                    registry.feed_address(chain_id, pair).is_ok(),
                );
            }
        }
    }

    #[test]
    fn repeated_lookups_are_identical() {
        let registry = FeedRegistry::new();
        let first = registry.feed_address(42161, Pair::ArbUsd);
        for _ in 0..10 {
            assert_eq!(registry.feed_address(42161, Pair::ArbUsd), first);
        }
    }

    #[test]
    fn supported_pairs_listing() {
        let registry = FeedRegistry::new();
        assert_eq!(
            registry.supported_pairs(Chain::Sepolia),
            vec![Pair::EthUsd, Pair::BtcUsd, Pair::LinkUsd]
        );
        for chain in Chain::ALL {
            let pairs = registry.supported_pairs(chain);
            assert!(!pairs.is_empty());
            assert!(pairs.len() < Pair::ALL.len());
            for pair in pairs {
                assert!(registry.is_supported(chain.id(), pair));
            }
        }
    }
}
