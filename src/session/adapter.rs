//! Bridges the wallet modal's event channels into the reactive store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::chains;
use crate::session::{
    AccountUpdate, ChainIdValue, NetworkUpdate, RawConnection, ThemeUpdate, WalletModal,
    chain_id_from_caip,
};
use crate::store::{AccountState, NetworkState, ThemeState, WalletStore};
use crate::theme::ThemeSink;

/// Session context object.
///
/// Constructed once at application startup and passed by reference (or `Arc`)
/// to every consumer. All reads go through [`WalletStore`]; nothing outside
/// this type talks to the modal directly.
pub struct SessionAdapter {
    modal: Option<Arc<dyn WalletModal>>,
    store: WalletStore,
    theme_sink: Option<Arc<dyn ThemeSink>>,
    initialized: AtomicBool,
}

impl SessionAdapter {
    /// `modal` is `None` when the modal could not be constructed — missing
    /// project credential, or a headless embed. The adapter then stays inert:
    /// no subscriptions, every action a no-op, the store frozen at its
    /// initial values.
    pub fn new(modal: Option<Arc<dyn WalletModal>>) -> Self {
        Self {
            modal,
            store: WalletStore::new(),
            theme_sink: None,
            initialized: AtomicBool::new(false),
        }
    }

    /// Attach a hook that receives the theme mode whenever a theme event
    /// lands, so the host presentation layer can follow the modal's theme.
    pub fn with_theme_sink(mut self, sink: Arc<dyn ThemeSink>) -> Self {
        self.theme_sink = Some(sink);
        self
    }

    pub fn store(&self) -> &WalletStore {
        &self.store
    }

    /// Register the three modal subscriptions and mark the store initialized.
    ///
    /// Idempotent: the first call wins, later calls return immediately. The
    /// store's `is_initialized` flips false→true here exactly once and never
    /// reverts.
    pub fn initialize(&self) {
        let Some(modal) = &self.modal else {
            warn!("wallet modal unavailable, session adapter stays inert");
            return;
        };
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }

        let store = self.store.clone();
        modal.subscribe_account(Box::new(move |update: AccountUpdate| {
            debug!(?update, "account event");
            let chain_id = update.caip_address.as_deref().and_then(chain_id_from_caip);
            let account = AccountState {
                address: update.address,
                is_connected: update.is_connected,
                chain_id,
            };
            store.update(|mut state| {
                state.account = account;
                state.is_loading = false;
                state.error = None;
                state
            });
        }));

        let store = self.store.clone();
        modal.subscribe_network(Box::new(move |update: NetworkUpdate| {
            debug!(?update, "network event");
            let network = NetworkState {
                chain_id: update.chain_id.as_ref().and_then(ChainIdValue::as_u64),
                name: Some(update.caip_network_id.unwrap_or_else(|| "Unknown".to_string())),
            };
            store.update(|mut state| {
                state.network = network;
                state
            });
        }));

        let store = self.store.clone();
        let sink = self.theme_sink.clone();
        modal.subscribe_theme(Box::new(move |update: ThemeUpdate| {
            debug!(?update, "theme event");
            let theme = ThemeState {
                theme_mode: update.theme_mode.unwrap_or_else(|| "dark".to_string()),
                theme_variables: update.theme_variables.unwrap_or_default(),
            };
            let mode = theme.theme_mode.clone();
            store.update(|mut state| {
                state.theme = theme;
                state
            });
            if let Some(sink) = &sink {
                sink.apply_mode(&mode);
            }
        }));

        self.store.update(|mut state| {
            state.is_initialized = true;
            state
        });
    }

    /// Present the modal UI. Completion is observed asynchronously through
    /// the account subscription, which clears the loading flag.
    pub fn open(&self) {
        let Some(modal) = &self.modal else { return };
        self.store.update(|mut state| {
            state.is_loading = true;
            state.error = None;
            state
        });
        modal.open();
    }

    /// Dismiss the modal UI. No state mutation.
    pub fn close(&self) {
        if let Some(modal) = &self.modal {
            modal.close();
        }
    }

    /// Request a switch to `chain_id`. Unsupported ids are ignored without
    /// touching the store or the modal.
    pub fn switch_network(&self, chain_id: u64) {
        let Some(modal) = &self.modal else { return };
        let Some(chain) = chains::supported_chain(chain_id) else {
            debug!(chain_id, "ignoring switch to unsupported chain");
            return;
        };
        self.store.update(|mut state| {
            state.is_loading = true;
            state.error = None;
            state
        });
        modal.switch_network(chain);
    }

    /// Tear down the current session. The loading flag is false on every exit
    /// path: success resets account and network to their initial values,
    /// failure records the modal's message in the store error.
    pub async fn disconnect(&self) {
        let Some(modal) = &self.modal else { return };
        self.store.update(|mut state| {
            state.is_loading = true;
            state.error = None;
            state
        });
        match modal.disconnect().await {
            Ok(()) => {
                self.store.update(|mut state| {
                    state.account = AccountState::default();
                    state.network = NetworkState::default();
                    state.is_loading = false;
                    state.error = None;
                    state
                });
            }
            Err(err) => {
                warn!(%err, "wallet disconnect failed");
                let message = err.to_string();
                self.store.update(|mut state| {
                    state.is_loading = false;
                    state.error = Some(message);
                    state
                });
            }
        }
    }

    /// Current raw connection handle, or `None` when no modal or no session
    /// exists. Never errors.
    pub fn provider_handle(&self) -> Option<RawConnection> {
        self.modal.as_ref().and_then(|modal| modal.wallet_provider())
    }

    pub fn clear_error(&self) {
        self.store.update(|mut state| {
            state.error = None;
            state
        });
    }
}
