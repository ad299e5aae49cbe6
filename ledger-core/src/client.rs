use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    ClientError, LedgerError,
    model::{AccountInfo, ChainHeight, Heartbeat, NodeInfo, TransactionInfo},
    responder::{Endpoint, QueryParams, params},
};

/// Read access to a ledger node.
///
/// Implementors only provide [`LedgerClient::query`]; the typed helpers decode
/// its JSON payload into the model records. [`crate::MockResponder`] serves a
/// fixed table, a network client would issue the matching REST call.
pub trait LedgerClient: Send + Sync {
    fn query(&self, endpoint: &str, params: &QueryParams) -> Result<Value, LedgerError>;

    fn heartbeat(&self) -> Result<Heartbeat, ClientError> {
        typed(self.query(Endpoint::Heartbeat.name(), &QueryParams::new()))
    }

    fn chain_height(&self) -> Result<u64, ClientError> {
        typed::<ChainHeight>(self.query(Endpoint::ChainHeight.name(), &QueryParams::new()))
            .map(|h| h.height)
    }

    fn node_info(&self) -> Result<NodeInfo, ClientError> {
        typed(self.query(Endpoint::NodeInfo.name(), &QueryParams::new()))
    }

    /// `address` is expected in normalized form.
    fn account(&self, address: &str) -> Result<AccountInfo, ClientError> {
        typed(self.query(
            Endpoint::AccountLookup.name(),
            &params(&[("address", address)]),
        ))
    }

    fn transaction(&self, hash: &str) -> Result<TransactionInfo, ClientError> {
        typed(self.query(
            Endpoint::TransactionLookup.name(),
            &params(&[("hash", hash)]),
        ))
    }
}

impl<C: LedgerClient + ?Sized> LedgerClient for Arc<C> {
    fn query(&self, endpoint: &str, params: &QueryParams) -> Result<Value, LedgerError> {
        (**self).query(endpoint, params)
    }
}

fn typed<T: DeserializeOwned>(raw: Result<Value, LedgerError>) -> Result<T, ClientError> {
    Ok(serde_json::from_value(raw?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockResponder, SAMPLE_ADDRESS_NORMALIZED, SAMPLE_HASH};

    struct Broken;

    impl LedgerClient for Broken {
        fn query(&self, _endpoint: &str, _params: &QueryParams) -> Result<Value, LedgerError> {
            Ok(serde_json::json!({ "height": "tall" }))
        }
    }

    #[test]
    fn typed_account_lookup() {
        let info = MockResponder::new().account(SAMPLE_ADDRESS_NORMALIZED).unwrap();
        assert_eq!(info.account.balance, 123_456_789);
        assert_eq!(info.account.vested_balance, 100_000_000);
        assert_eq!(info.account.importance, 0.00012345);
        assert_eq!(info.account.harvested_blocks, 15);
        assert_eq!(info.meta.status, "LOCKED");
    }

    #[test]
    fn typed_transaction_lookup() {
        let info = MockResponder::new().transaction(SAMPLE_HASH).unwrap();
        let tx = &info.transaction;
        assert_eq!(tx.tx_type, 257);
        assert_eq!(tx.type_name(), "Transfer Transaction");
        assert_eq!(tx.fee, 100_000);
        assert_eq!(tx.amount, 50_000_000);
        assert_eq!(info.meta.height, 4_012_300);
        assert_eq!(info.meta.hash.data, SAMPLE_HASH);
    }

    #[test]
    fn typed_status_lookups() {
        let r = Arc::new(MockResponder::new());
        assert_eq!(r.heartbeat().unwrap().code, 1);
        assert_eq!(r.chain_height().unwrap(), 4_012_345);
        assert_eq!(r.node_info().unwrap().nis_info.network_id, 104);
    }

    #[test]
    fn lookup_errors_pass_through() {
        let err = MockResponder::new().account("NOPE").unwrap_err();
        assert!(matches!(err, ClientError::Ledger(LedgerError::AccountNotFound)));
    }

    #[test]
    fn malformed_payload_is_reported() {
        assert!(matches!(Broken.chain_height(), Err(ClientError::Payload(_))));
    }
}
