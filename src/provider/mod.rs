//! Lazy read/write access to the chain backing the current wallet session.
//!
//! Every accessor follows the same policy: no session, malformed handle, or a
//! failed chain query all collapse to `None`, with the cause logged. Nothing
//! here ever surfaces an error into the store.

use ethers::providers::{Http, Middleware, PendingTransaction, Provider, ProviderError};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, TransactionReceipt, TransactionRequest, TxHash, U256};
use tracing::{debug, error};

use crate::session::adapter::SessionAdapter;

/// Read handle to the chain, built from whatever raw connection the adapter
/// currently holds.
pub fn get_provider(adapter: &SessionAdapter) -> Option<Provider<Http>> {
    let handle = adapter.provider_handle()?;
    match Provider::<Http>::try_from(handle.rpc_url.as_str()) {
        Ok(provider) => Some(provider),
        Err(err) => {
            error!(%err, rpc_url = %handle.rpc_url, "failed to build provider from session handle");
            None
        }
    }
}

/// Write handle bound to one session account.
///
/// Signing stays on the wallet side of the session; this type only routes
/// requests there over JSON-RPC.
#[derive(Debug, Clone)]
pub struct SessionSigner {
    provider: Provider<Http>,
    address: Address,
}

impl SessionSigner {
    pub fn address(&self) -> Address {
        self.address
    }

    /// Submit a transaction for signing by the connected wallet.
    pub async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, ProviderError> {
        let tx = tx.from(self.address);
        let tx_hash: TxHash = self.provider.request("eth_sendTransaction", [tx]).await?;
        debug!(tx_hash = %format!("0x{}", hex::encode(tx_hash.as_bytes())), "transaction submitted");
        Ok(tx_hash)
    }

    /// Ask the connected wallet to sign an arbitrary message.
    pub async fn sign_message(&self, message: &str) -> Result<String, ProviderError> {
        let payload = format!("0x{}", hex::encode(message.as_bytes()));
        let from = format!("{:#x}", self.address);
        self.provider.request("personal_sign", [payload, from]).await
    }
}

/// Signing handle for the session's primary account, or `None` when there is
/// no session, the session exposes no accounts, or the query fails.
pub async fn get_signer(adapter: &SessionAdapter) -> Option<SessionSigner> {
    let provider = get_provider(adapter)?;
    match provider.get_accounts().await {
        Ok(accounts) => match accounts.first() {
            Some(address) => Some(SessionSigner { address: *address, provider }),
            None => {
                error!("session exposes no accounts");
                None
            }
        },
        Err(err) => {
            error!(%err, "failed to get signer");
            None
        }
    }
}

/// Wait for a transaction to reach the requested confirmation depth.
pub async fn wait_for_transaction(
    adapter: &SessionAdapter,
    tx_hash: TxHash,
    confirmations: usize,
) -> Option<TransactionReceipt> {
    let provider = get_provider(adapter)?;
    match PendingTransaction::new(tx_hash, &provider).confirmations(confirmations).await {
        Ok(receipt) => receipt,
        Err(err) => {
            error!(%err, "failed to wait for transaction");
            None
        }
    }
}

/// Estimate gas for a transaction against the session's chain.
pub async fn estimate_gas(adapter: &SessionAdapter, tx: &TypedTransaction) -> Option<U256> {
    let provider = get_provider(adapter)?;
    match provider.estimate_gas(tx, None).await {
        Ok(gas) => Some(gas),
        Err(err) => {
            error!(%err, "failed to estimate gas");
            None
        }
    }
}

/// Current gas price on the session's chain.
pub async fn get_gas_price(adapter: &SessionAdapter) -> Option<U256> {
    let provider = get_provider(adapter)?;
    match provider.get_gas_price().await {
        Ok(price) => Some(price),
        Err(err) => {
            error!(%err, "failed to get gas price");
            None
        }
    }
}
