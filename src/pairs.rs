use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A base/quote asset pair tracked by a Chainlink aggregator.
///
/// The set is fixed at build time. ETH/USD, BTC/USD and LINK/USD are
/// registered on every supported network; the remaining pairs exist only
/// on the networks where Chainlink deployed a feed for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pair {
    EthUsd,
    BtcUsd,
    LinkUsd,
    DaiUsd,
    UsdcUsd,
    UsdtUsd,
    MaticUsd,
    AvaxUsd,
    OpUsd,
    ArbUsd,
}

impl Pair {
    /// Every pair in the global enumeration, in a fixed order.
    pub const ALL: [Pair; 10] = [
        Pair::EthUsd,
        Pair::BtcUsd,
        Pair::LinkUsd,
        Pair::DaiUsd,
        Pair::UsdcUsd,
        Pair::UsdtUsd,
        Pair::MaticUsd,
        Pair::AvaxUsd,
        Pair::OpUsd,
        Pair::ArbUsd,
    ];

    /// The ticker symbol in "BASE/QUOTE" form, as listed on
    /// https://data.chain.link/feeds.
    pub fn symbol(&self) -> &'static str {
        match self {
            Pair::EthUsd => "ETH/USD",
            Pair::BtcUsd => "BTC/USD",
            Pair::LinkUsd => "LINK/USD",
            Pair::DaiUsd => "DAI/USD",
            Pair::UsdcUsd => "USDC/USD",
            Pair::UsdtUsd => "USDT/USD",
            Pair::MaticUsd => "MATIC/USD",
            Pair::AvaxUsd => "AVAX/USD",
            Pair::OpUsd => "OP/USD",
            Pair::ArbUsd => "ARB/USD",
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown pair symbol: {0}")]
pub struct ParsePairError(String);

impl FromStr for Pair {
    type Err = ParsePairError;

    /// Exact-match parse of a "BASE/QUOTE" symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pair::ALL
            .into_iter()
            .find(|pair| pair.symbol() == s)
            .ok_or_else(|| ParsePairError(s.to_string()))
    }
}
