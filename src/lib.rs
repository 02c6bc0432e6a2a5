//! ## Feedlink
//!
//! Feedlink is a lightweight Rust library that tells your application where
//! the Chainlink decentralized price feeds live. It compiles in the
//! aggregator proxy addresses listed on https://data.chain.link/feeds for a
//! fixed set of EVM networks and exposes a pure lookup over them: give it a
//! chain id and a pair, get back the feed contract address.
//!
//! The crate performs no network I/O and holds no mutable state; every
//! lookup reads the same immutable table, so a single [`FeedRegistry`] can
//! be shared freely across threads.
//!
//! ```rust
//! use feedlink::{FeedRegistry, Pair};
//!
//! let registry = FeedRegistry::new();
//! if registry.is_supported(1, Pair::EthUsd) {
//!     let feed = registry.feed_address(1, Pair::EthUsd).unwrap();
//!     println!("ETH/USD on mainnet: {feed}");
//! }
//! ```

pub mod chains;
pub mod error;
pub mod pairs;
pub mod registry;
pub mod thresholds;

pub use chains::Chain;
pub use error::Error;
pub use pairs::Pair;
pub use registry::FeedRegistry;
pub use thresholds::FeedThresholds;
