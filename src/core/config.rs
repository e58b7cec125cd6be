use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

use crate::chains;
use crate::core::errors::ConnectError;

/// Environment variable carrying the wallet-modal project credential.
pub const PROJECT_ID_VAR: &str = "WALLET_PROJECT_ID";

/// Feature switches forwarded to the wallet modal verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalFeatures {
    #[serde(default = "ModalFeatures::default_on")]
    pub swaps: bool,
    #[serde(default = "ModalFeatures::default_on")]
    pub onramp: bool,
    #[serde(default = "ModalFeatures::default_on")]
    pub receive: bool,
    #[serde(default = "ModalFeatures::default_on")]
    pub send: bool,
    #[serde(default = "ModalFeatures::default_on")]
    pub email: bool,
    #[serde(default = "ModalFeatures::default_on")]
    pub email_show_wallets: bool,
    #[serde(default = "ModalFeatures::default_socials")]
    pub socials: Vec<String>,
    #[serde(default = "ModalFeatures::default_on")]
    pub history: bool,
    #[serde(default = "ModalFeatures::default_on")]
    pub analytics: bool,
    #[serde(default = "ModalFeatures::default_on")]
    pub all_wallets: bool,
    #[serde(default = "ModalFeatures::default_on")]
    pub smart_sessions: bool,
    #[serde(default = "ModalFeatures::default_on")]
    pub legal_checkbox: bool,
    #[serde(default = "ModalFeatures::default_connector_order")]
    pub connector_type_order: Vec<String>,
    #[serde(default = "ModalFeatures::default_on")]
    pub collapse_wallets: bool,
    #[serde(default = "ModalFeatures::default_on")]
    pub pay: bool,
}

impl ModalFeatures {
    fn default_on() -> bool {
        true
    }

    fn default_socials() -> Vec<String> {
        ["apple", "discord", "facebook", "farcaster", "github", "google", "x"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn default_connector_order() -> Vec<String> {
        ["recent", "recommended", "walletConnect"].iter().map(|s| s.to_string()).collect()
    }
}

impl Default for ModalFeatures {
    fn default() -> Self {
        Self {
            swaps: true,
            onramp: true,
            receive: true,
            send: true,
            email: true,
            email_show_wallets: true,
            socials: Self::default_socials(),
            history: true,
            analytics: true,
            all_wallets: true,
            smart_sessions: true,
            legal_checkbox: true,
            connector_type_order: Self::default_connector_order(),
            collapse_wallets: true,
            pay: true,
        }
    }
}

/// Application identity shown inside the modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    pub icons: Vec<String>,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "Base Connect".to_string(),
            description: "A template for building dapps on Base with a wallet modal".to_string(),
            url: "https://localhost".to_string(),
            icons: vec![],
        }
    }
}

/// Wallet-modal configuration.
///
/// The project credential is required; everything else carries a default so a
/// host application can start from `ConnectConfig::from_env()` unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Project credential issued by the modal provider.
    pub project_id: String,

    /// Network pre-selected before the user connects.
    #[serde(default = "ConnectConfig::default_chain_id")]
    pub default_chain_id: u64,

    #[serde(default)]
    pub features: ModalFeatures,

    #[serde(default)]
    pub metadata: AppMetadata,

    #[serde(default = "ConnectConfig::default_theme_mode")]
    pub theme_mode: String,

    #[serde(default = "ConnectConfig::default_theme_variables")]
    pub theme_variables: HashMap<String, String>,
}

impl ConnectConfig {
    fn default_chain_id() -> u64 {
        chains::BASE_SEPOLIA.chain_id
    }

    fn default_theme_mode() -> String {
        "dark".to_string()
    }

    fn default_theme_variables() -> HashMap<String, String> {
        let mut vars = HashMap::with_capacity(2);
        vars.insert("--w3m-accent".to_string(), "#66e985".to_string());
        vars.insert("--w3m-border-radius-master".to_string(), "8px".to_string());
        vars
    }

    /// Build a configuration from the process environment.
    ///
    /// A missing or empty project credential is fatal: without it the modal
    /// cannot be constructed at all.
    pub fn from_env() -> Result<Self, ConnectError> {
        let project_id = env::var(PROJECT_ID_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                ConnectError::config(format!(
                    "{} is not set. Please set it in your environment",
                    PROJECT_ID_VAR
                ))
            })?;

        Ok(Self::new(project_id))
    }

    /// Build a configuration with defaults around an already-known credential.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            default_chain_id: Self::default_chain_id(),
            features: ModalFeatures::default(),
            metadata: AppMetadata::default(),
            theme_mode: Self::default_theme_mode(),
            theme_variables: Self::default_theme_variables(),
        }
    }
}
