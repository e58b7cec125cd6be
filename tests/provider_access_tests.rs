mod common;

use std::sync::Arc;

use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{TransactionRequest, TxHash};

use base_connect::provider::{
    estimate_gas, get_gas_price, get_provider, get_signer, wait_for_transaction,
};
use base_connect::session::adapter::SessionAdapter;
use base_connect::session::RawConnection;

use common::MockModal;

fn adapter_with_connection(rpc_url: &str) -> SessionAdapter {
    let modal = Arc::new(MockModal::with_connection(RawConnection {
        rpc_url: rpc_url.to_string(),
        chain_id: Some(84532),
    }));
    let adapter = SessionAdapter::new(Some(modal));
    adapter.initialize();
    adapter
}

#[test]
fn get_provider_none_without_modal() {
    let adapter = SessionAdapter::new(None);
    assert!(get_provider(&adapter).is_none());
}

#[test]
fn get_provider_none_without_session() {
    let adapter = SessionAdapter::new(Some(Arc::new(MockModal::default())));
    adapter.initialize();
    assert!(get_provider(&adapter).is_none());
}

#[test]
fn get_provider_wraps_session_handle() {
    let adapter = adapter_with_connection("http://localhost:8545");
    assert!(get_provider(&adapter).is_some());
}

#[test]
fn get_provider_none_on_malformed_endpoint() {
    let adapter = adapter_with_connection("not a url");
    assert!(get_provider(&adapter).is_none());
}

#[tokio::test]
async fn get_signer_none_without_provider() {
    let adapter = SessionAdapter::new(None);
    assert!(get_signer(&adapter).await.is_none());
}

#[tokio::test]
async fn get_signer_none_on_unreachable_endpoint() {
    // nothing listens here; the accounts query fails and the accessor
    // swallows it
    let adapter = adapter_with_connection("http://127.0.0.1:59999");
    assert!(get_signer(&adapter).await.is_none());
}

#[tokio::test]
async fn chain_queries_none_without_provider() {
    let adapter = SessionAdapter::new(None);

    assert!(get_gas_price(&adapter).await.is_none());

    let tx: TypedTransaction = TransactionRequest::default().into();
    assert!(estimate_gas(&adapter, &tx).await.is_none());

    assert!(wait_for_transaction(&adapter, TxHash::zero(), 1).await.is_none());
}
