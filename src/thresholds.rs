use serde::{Deserialize, Serialize};

/// Operational guardrails for consumers that poll the registered feeds.
///
/// Nothing in this crate reads these values: lookups never check staleness,
/// deviation or gas price. They are packaged here so that pollers, keepers
/// and alerting jobs share one set of named constants instead of scattering
/// magic numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedThresholds {
    /// Maximum age of an answer before it should be treated as stale.
    pub staleness_seconds: u64,
    /// Price deviation, in basis points, that should trigger a refresh.
    pub deviation_bps: u32,
    /// Expected interval between aggregator updates.
    pub heartbeat_seconds: u64,
    /// Minimum number of oracle answers behind an accepted round.
    pub min_answers: u32,
    /// Gas price ceiling, in wei, for transactions that act on feed data.
    pub max_gas_price_wei: u128,
}

impl FeedThresholds {
    /// Defaults matching the common Chainlink USD-feed configuration:
    /// 1 hour heartbeat with a 0.5% deviation trigger.
    pub const DEFAULT: FeedThresholds = FeedThresholds {
        staleness_seconds: 3 * 3600,
        deviation_bps: 50,
        heartbeat_seconds: 3600,
        min_answers: 3,
        max_gas_price_wei: 200_000_000_000,
    };
}

impl Default for FeedThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::FeedThresholds;

    #[test]
    fn default_matches_const() {
        assert_eq!(FeedThresholds::default(), FeedThresholds::DEFAULT);
    }

    #[test]
    fn staleness_window_covers_heartbeat() {
        let thresholds = FeedThresholds::default();
        assert!(thresholds.staleness_seconds >= thresholds.heartbeat_seconds);
    }
}
