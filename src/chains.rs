// src/chains.rs
//! Static registry of the networks the wallet modal is allowed to offer.

use serde::Serialize;

/// Metadata for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainInfo {
    pub chain_id: u64,
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    pub explorer: &'static str,
}

pub const BASE: ChainInfo = ChainInfo {
    chain_id: 8453,
    name: "Base",
    symbol: "ETH",
    decimals: 18,
    explorer: "https://basescan.org",
};

pub const BASE_SEPOLIA: ChainInfo = ChainInfo {
    chain_id: 84532,
    name: "Base Sepolia",
    symbol: "ETH",
    decimals: 18,
    explorer: "https://sepolia.basescan.org",
};

pub const SUPPORTED_CHAINS: [ChainInfo; 2] = [BASE, BASE_SEPOLIA];

/// Registry entry for a supported chain, `None` otherwise.
pub fn supported_chain(chain_id: u64) -> Option<&'static ChainInfo> {
    SUPPORTED_CHAINS.iter().find(|chain| chain.chain_id == chain_id)
}

pub fn supported_chain_ids() -> Vec<u64> {
    SUPPORTED_CHAINS.iter().map(|chain| chain.chain_id).collect()
}

pub fn is_chain_supported(chain_id: u64) -> bool {
    supported_chain(chain_id).is_some()
}

/// Chain metadata with the generic fallback for unknown ids.
pub fn chain_info(chain_id: u64) -> ChainInfo {
    supported_chain(chain_id).copied().unwrap_or(ChainInfo {
        chain_id,
        name: "Unknown",
        symbol: "ETH",
        decimals: 18,
        explorer: "",
    })
}

pub fn chain_name(chain_id: u64) -> &'static str {
    chain_info(chain_id).name
}

/// Block-explorer URL for a transaction hash.
pub fn explorer_tx_url(chain_id: u64, tx_hash: &str) -> String {
    match supported_chain(chain_id) {
        Some(chain) => format!("{}/tx/{}", chain.explorer, tx_hash),
        None => format!("https://etherscan.io/tx/{}", tx_hash),
    }
}

/// Block-explorer URL for an account address.
pub fn explorer_address_url(chain_id: u64, address: &str) -> String {
    match supported_chain(chain_id) {
        Some(chain) => format!("{}/address/{}", chain.explorer, address),
        None => format!("https://etherscan.io/address/{}", address),
    }
}
