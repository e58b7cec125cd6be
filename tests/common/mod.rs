#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use base_connect::chains::ChainInfo;
use base_connect::session::{
    AccountCallback, AccountUpdate, NetworkCallback, NetworkUpdate, RawConnection, ThemeCallback,
    ThemeUpdate, WalletModal,
};

/// Scripted wallet modal: records every imperative call and lets tests fire
/// the three subscription channels by hand.
#[derive(Default)]
pub struct MockModal {
    account_callbacks: Mutex<Vec<AccountCallback>>,
    network_callbacks: Mutex<Vec<NetworkCallback>>,
    theme_callbacks: Mutex<Vec<ThemeCallback>>,
    pub opens: AtomicUsize,
    pub closes: AtomicUsize,
    pub switches: Mutex<Vec<u64>>,
    pub disconnects: AtomicUsize,
    pub fail_disconnect: bool,
    pub connection: Mutex<Option<RawConnection>>,
}

impl MockModal {
    pub fn failing_disconnect() -> Self {
        Self { fail_disconnect: true, ..Default::default() }
    }

    pub fn with_connection(connection: RawConnection) -> Self {
        let modal = Self::default();
        *modal.connection.lock().unwrap() = Some(connection);
        modal
    }

    pub fn emit_account(&self, update: AccountUpdate) {
        for callback in self.account_callbacks.lock().unwrap().iter() {
            callback(update.clone());
        }
    }

    pub fn emit_network(&self, update: NetworkUpdate) {
        for callback in self.network_callbacks.lock().unwrap().iter() {
            callback(update.clone());
        }
    }

    pub fn emit_theme(&self, update: ThemeUpdate) {
        for callback in self.theme_callbacks.lock().unwrap().iter() {
            callback(update.clone());
        }
    }

    pub fn account_subscriptions(&self) -> usize {
        self.account_callbacks.lock().unwrap().len()
    }

    pub fn network_subscriptions(&self) -> usize {
        self.network_callbacks.lock().unwrap().len()
    }

    pub fn theme_subscriptions(&self) -> usize {
        self.theme_callbacks.lock().unwrap().len()
    }

    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn switch_calls(&self) -> Vec<u64> {
        self.switches.lock().unwrap().clone()
    }

    pub fn disconnect_count(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletModal for MockModal {
    fn subscribe_account(&self, callback: AccountCallback) {
        self.account_callbacks.lock().unwrap().push(callback);
    }

    fn subscribe_network(&self, callback: NetworkCallback) {
        self.network_callbacks.lock().unwrap().push(callback);
    }

    fn subscribe_theme(&self, callback: ThemeCallback) {
        self.theme_callbacks.lock().unwrap().push(callback);
    }

    fn open(&self) {
        self.opens.fetch_add(1, Ordering::SeqCst);
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }

    fn switch_network(&self, chain: &ChainInfo) {
        self.switches.lock().unwrap().push(chain.chain_id);
    }

    async fn disconnect(&self) -> Result<()> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        if self.fail_disconnect {
            Err(anyhow!("Failed to disconnect"))
        } else {
            Ok(())
        }
    }

    fn wallet_provider(&self) -> Option<RawConnection> {
        self.connection.lock().unwrap().clone()
    }
}
