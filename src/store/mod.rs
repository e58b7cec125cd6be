//! Reactive mirror of the wallet session.
//!
//! One snapshot, mutated only by whole-state replacement: a handler or action
//! receives the previous state, builds the next one, and publishes it through
//! a `tokio::sync::watch` channel. The watch sender serializes replacements,
//! so one callback's update is fully published before the next is applied.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::watch;

/// Connected-account slice of the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountState {
    pub address: Option<String>,
    pub is_connected: bool,
    pub chain_id: Option<u64>,
}

/// Active-network slice of the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkState {
    pub chain_id: Option<u64>,
    pub name: Option<String>,
}

/// Presentation slice of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    pub theme_mode: String,
    pub theme_variables: HashMap<String, String>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { theme_mode: "dark".to_string(), theme_variables: HashMap::new() }
    }
}

/// The full wallet-session snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletState {
    pub account: AccountState,
    pub network: NetworkState,
    pub theme: ThemeState,
    pub is_initialized: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Shared handle to the snapshot. Cheap to clone; all clones observe the same
/// state.
#[derive(Clone)]
pub struct WalletStore {
    tx: watch::Sender<WalletState>,
}

impl WalletStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(WalletState::default());
        Self { tx }
    }

    /// Replace the snapshot. `f` receives a copy of the current state and
    /// returns the next one; the replacement is atomic with respect to other
    /// callers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(WalletState) -> WalletState,
    {
        self.tx.send_modify(|state| {
            let next = f(state.clone());
            *state = next;
        });
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> WalletState {
        self.tx.borrow().clone()
    }

    /// Change-notified receiver over the snapshot.
    pub fn subscribe(&self) -> watch::Receiver<WalletState> {
        self.tx.subscribe()
    }

    // Derived views. Pure projections of the snapshot; none hold state of
    // their own.

    pub fn account(&self) -> AccountState {
        self.tx.borrow().account.clone()
    }

    pub fn network(&self) -> NetworkState {
        self.tx.borrow().network.clone()
    }

    pub fn theme(&self) -> ThemeState {
        self.tx.borrow().theme.clone()
    }

    pub fn is_wallet_connected(&self) -> bool {
        self.tx.borrow().account.is_connected
    }

    pub fn is_initialized(&self) -> bool {
        self.tx.borrow().is_initialized
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.tx.borrow().error.clone()
    }
}

impl Default for WalletStore {
    fn default() -> Self {
        Self::new()
    }
}
