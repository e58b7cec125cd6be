//! Boundary to the external wallet modal.
//!
//! The modal is an opaque collaborator: it owns session negotiation, chain
//! switching, and signing UX. This crate only consumes its three subscription
//! channels and a handful of imperative operations, so the whole surface is a
//! trait the host wires to whatever SDK it embeds.

pub mod adapter;

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::chains::ChainInfo;

/// Payload delivered on the account subscription channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub address: Option<String>,
    #[serde(default)]
    pub is_connected: bool,
    /// CAIP-10 chain-qualified address, e.g. `eip155:84532:0xabc...`.
    pub caip_address: Option<String>,
}

/// Chain id as delivered on the wire. Some wallets send numbers, some send
/// decimal or 0x-prefixed strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainIdValue {
    Number(u64),
    Text(String),
}

impl ChainIdValue {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ChainIdValue::Number(n) => Some(*n),
            ChainIdValue::Text(raw) => {
                if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
                    u64::from_str_radix(hex, 16).ok()
                } else {
                    raw.parse().ok()
                }
            }
        }
    }
}

/// Payload delivered on the network subscription channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkUpdate {
    pub chain_id: Option<ChainIdValue>,
    /// CAIP-2 network identifier, e.g. `eip155:8453`.
    pub caip_network_id: Option<String>,
}

/// Payload delivered on the theme subscription channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeUpdate {
    pub theme_mode: Option<String>,
    pub theme_variables: Option<HashMap<String, String>>,
}

/// Raw connection handle the modal exposes for read access to the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawConnection {
    pub rpc_url: String,
    pub chain_id: Option<u64>,
}

pub type AccountCallback = Box<dyn Fn(AccountUpdate) + Send + Sync>;
pub type NetworkCallback = Box<dyn Fn(NetworkUpdate) + Send + Sync>;
pub type ThemeCallback = Box<dyn Fn(ThemeUpdate) + Send + Sync>;

/// Operations this crate needs from a wallet modal. Callback timing and
/// ordering are the modal's business; the only assumption made downstream is
/// that one callback body runs to completion before the next begins.
#[async_trait]
pub trait WalletModal: Send + Sync {
    fn subscribe_account(&self, callback: AccountCallback);
    fn subscribe_network(&self, callback: NetworkCallback);
    fn subscribe_theme(&self, callback: ThemeCallback);

    /// Present the modal UI.
    fn open(&self);

    /// Dismiss the modal UI.
    fn close(&self);

    /// Ask the wallet to move the session to another supported network.
    fn switch_network(&self, chain: &ChainInfo);

    /// Tear down the current session.
    async fn disconnect(&self) -> Result<()>;

    /// Current raw connection handle, if a session exists.
    fn wallet_provider(&self) -> Option<RawConnection>;
}

/// Extract the numeric chain id from a CAIP-style chain-qualified address
/// (the second `:`-separated segment).
pub fn chain_id_from_caip(caip_address: &str) -> Option<u64> {
    caip_address.split(':').nth(1)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_from_caip() {
        assert_eq!(chain_id_from_caip("eip155:84532:0xabc"), Some(84532));
        assert_eq!(chain_id_from_caip("eip155:8453:0xDEADbeef"), Some(8453));
    }

    #[test]
    fn test_chain_id_from_caip_malformed() {
        assert_eq!(chain_id_from_caip("0xabc"), None);
        assert_eq!(chain_id_from_caip("eip155"), None);
        assert_eq!(chain_id_from_caip("eip155:not-a-number:0xabc"), None);
        assert_eq!(chain_id_from_caip(""), None);
    }

    #[test]
    fn test_chain_id_value_forms() {
        assert_eq!(ChainIdValue::Number(8453).as_u64(), Some(8453));
        assert_eq!(ChainIdValue::Text("84532".to_string()).as_u64(), Some(84532));
        assert_eq!(ChainIdValue::Text("0x2105".to_string()).as_u64(), Some(8453));
        assert_eq!(ChainIdValue::Text("mainnet".to_string()).as_u64(), None);
    }

    #[test]
    fn test_chain_id_value_untagged_deserialize() {
        let numeric: NetworkUpdate = serde_json::from_str(r#"{"chain_id": 8453}"#).unwrap();
        assert_eq!(numeric.chain_id.unwrap().as_u64(), Some(8453));

        let text: NetworkUpdate = serde_json::from_str(r#"{"chain_id": "84532"}"#).unwrap();
        assert_eq!(text.chain_id.unwrap().as_u64(), Some(84532));
    }
}
