//! Static table of supported chains and their icon sources.
//!
//! Each chain lists several candidate URLs in priority order; the fetcher
//! tries them first to last and keeps the first image that downloads
//! cleanly. Colors are the brand hex colors the frontend uses for
//! placeholders and accents.

use std::path::{Path, PathBuf};

/// One supported blockchain and where to find its icon.
#[derive(Debug, Clone, Copy)]
pub struct ChainEntry {
    /// Short uppercase identifier (e.g. `ETH`).
    pub code: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Candidate icon URLs, highest priority first.
    pub urls: &'static [&'static str],
    /// Brand color as a `#rrggbb` hex string.
    pub color: &'static str,
}

impl ChainEntry {
    /// Filename the icon is stored under, always `.png` regardless of the
    /// format the source actually served.
    pub fn icon_filename(&self) -> String {
        format!("{}.png", self.code.to_lowercase())
    }

    /// Destination path for this chain's icon under `output_dir`.
    pub fn icon_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.icon_filename())
    }

    /// Web path the frontend loads the icon from.
    pub fn icon_web_path(&self) -> String {
        format!("/icons/{}", self.icon_filename())
    }
}

/// The full chain table. Iteration order is the order chains are fetched in.
pub const CHAINS: &[ChainEntry] = &[
    ChainEntry {
        code: "ETH",
        name: "Ethereum",
        urls: &[
            "https://cryptologos.cc/logos/ethereum-eth-logo.png",
            "https://assets.coingecko.com/coins/images/279/small/ethereum.png",
            "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/info/logo.png",
        ],
        color: "#627EEA",
    },
    ChainEntry {
        code: "BTC",
        name: "Bitcoin",
        urls: &[
            "https://cryptologos.cc/logos/bitcoin-btc-logo.png",
            "https://assets.coingecko.com/coins/images/coins/images/1/small/bitcoin.png",
            "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/bitcoin/info/logo.png",
        ],
        color: "#F7931A",
    },
    ChainEntry {
        code: "BNB",
        name: "BNB Chain",
        urls: &[
            "https://cryptologos.cc/logos/bnb-bnb-logo.png",
            "https://assets.coingecko.com/coins/images/825/small/bnb-icon2_2x.png",
            "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/binance/info/logo.png",
        ],
        color: "#F3BA2F",
    },
    ChainEntry {
        code: "SOL",
        name: "Solana",
        urls: &[
            "https://cryptologos.cc/logos/solana-sol-logo.png",
            "https://assets.coingecko.com/coins/images/4128/small/solana.png",
            "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/solana/info/logo.png",
        ],
        color: "#9945FF",
    },
    ChainEntry {
        code: "TRON",
        name: "Tron",
        urls: &[
            "https://cryptologos.cc/logos/tron-trx-logo.png",
            "https://assets.coingecko.com/coins/images/1094/small/tron-logo.png",
            "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/tron/info/logo.png",
        ],
        color: "#FF0018",
    },
];
