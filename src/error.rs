use thiserror::Error;

use crate::{chains::Chain, pairs::Pair};

/// Lookup failures surfaced by the feed registry.
///
/// Both variants are terminal at this layer. Callers that want to stay off
/// the error path can probe with `FeedRegistry::is_supported` first.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The numeric chain id does not name a supported network.
    #[error("unsupported network: chain id {0}")]
    UnsupportedNetwork(u64),
    /// The network is known but has no feed registered for this pair.
    #[error("no {pair} feed registered on {chain}")]
    UnsupportedPair { chain: Chain, pair: Pair },
}
