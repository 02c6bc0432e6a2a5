//! Per-network Chainlink aggregator address tables.
//!
//! Each function returns the feed map for one network. The addresses are
//! the proxy contracts listed on https://data.chain.link/feeds and are
//! compiled into the crate; nothing mutates them at runtime.

use alloy::primitives::{address, Address};
use std::collections::HashMap;

use crate::pairs::Pair;

pub fn ethereum_feeds() -> HashMap<Pair, Address> {
    HashMap::from([
        (
            Pair::EthUsd,
            address!("5f4eC3Df9cbd43714FE2740f5E3616155c5b8419"),
        ),
        (
            Pair::BtcUsd,
            address!("F4030086522a5bEEa4988F8cA5B36dbC97BeE88c"),
        ),
        (
            Pair::LinkUsd,
            address!("2c1d072e956AFFC0D435Cb7AC38EF18d24d9127c"),
        ),
        (
            Pair::DaiUsd,
            address!("Aed0c38402a5d19df6E4c03F4E2DceD6e29c1ee9"),
        ),
        (
            Pair::UsdcUsd,
            address!("8fFfFfd4AfB6115b954Bd326cbe7B4BA576818f6"),
        ),
    ])
}

pub fn arbitrum_feeds() -> HashMap<Pair, Address> {
    HashMap::from([
        (
            Pair::EthUsd,
            address!("639Fe6ab55C921f74e7fac1ee960C0B6293ba612"),
        ),
        (
            Pair::BtcUsd,
            address!("6ce185860a4963106506C203335A2910413708e9"),
        ),
        (
            Pair::LinkUsd,
            address!("86E53CF1B870786351Da77A57575e79CB55812CB"),
        ),
        (
            Pair::UsdtUsd,
            address!("3f3f5dF88dC9F13eac63DF89EC16ef6e7E25DdE7"),
        ),
        (
            Pair::ArbUsd,
            address!("b2A824043730FE05F3DA2efaFa1CBbe83fa548D6"),
        ),
    ])
}

pub fn optimism_feeds() -> HashMap<Pair, Address> {
    HashMap::from([
        (
            Pair::EthUsd,
            address!("13e3Ee699D1909E989722E753853AE30b17e08c5"),
        ),
        (
            Pair::BtcUsd,
            address!("D702DD976Fb76Fffc2D3963D037dfDae5b04E593"),
        ),
        (
            Pair::LinkUsd,
            address!("Cc232dcFAAE6354cE191Bd574108c1aD03f86450"),
        ),
        (
            Pair::OpUsd,
            address!("0D276FC14719f9292D5C1eA2198673d1f4269246"),
        ),
    ])
}

pub fn polygon_feeds() -> HashMap<Pair, Address> {
    HashMap::from([
        (
            Pair::EthUsd,
            address!("F9680D99D6C9589e2a93a78A04A279e509205945"),
        ),
        (
            Pair::BtcUsd,
            address!("c907E116054Ad103354f2D350FD2514433D57F6f"),
        ),
        (
            Pair::LinkUsd,
            address!("d9FFdb71EbE7496cC440152d43986Aae0AB76665"),
        ),
        (
            Pair::MaticUsd,
            address!("AB594600376Ec9fD91F8e885dADF0CE036862dE0"),
        ),
        (
            Pair::UsdtUsd,
            address!("0A6513e40db6EB1b165753AD52E80663aeA50545"),
        ),
    ])
}

pub fn avalanche_feeds() -> HashMap<Pair, Address> {
    HashMap::from([
        (
            Pair::EthUsd,
            address!("976B3D034E162d8bD72D6b9C989d545b839003b0"),
        ),
        (
            Pair::BtcUsd,
            address!("2779D32d5166BAaa2B2b658333bA7e6Ec0C65743"),
        ),
        (
            Pair::LinkUsd,
            address!("49ccd9ca821EfEab2b98c60dC60F518E765EDe9a"),
        ),
        (
            Pair::AvaxUsd,
            address!("0A77230d17318075983913bC2145DB16C7366156"),
        ),
    ])
}

pub fn sepolia_feeds() -> HashMap<Pair, Address> {
    HashMap::from([
        (
            Pair::EthUsd,
            address!("694AA1769357215DE4FAC081bf1f309aDC325306"),
        ),
        (
            Pair::BtcUsd,
            address!("1b44F3514812d835EB1BDB0acB33d3fA3351Ee43"),
        ),
        (
            Pair::LinkUsd,
            address!("c59E3633BAAC79493d908e63626716e204A45EdF"),
        ),
    ])
}
