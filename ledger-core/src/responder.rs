use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    str::FromStr,
};

use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};
use tracing::debug;

use crate::{LedgerError, SAMPLE_ADDRESS_NORMALIZED, SAMPLE_HASH, client::LedgerClient};

pub type QueryParams = BTreeMap<String, String>;

/// Builds a parameter map from literal pairs.
pub fn params(pairs: &[(&str, &str)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    Heartbeat,
    ChainHeight,
    NodeInfo,
    AccountLookup,
    TransactionLookup,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Heartbeat,
        Endpoint::ChainHeight,
        Endpoint::NodeInfo,
        Endpoint::AccountLookup,
        Endpoint::TransactionLookup,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Heartbeat => "heartbeat",
            Endpoint::ChainHeight => "chain-height",
            Endpoint::NodeInfo => "node-info",
            Endpoint::AccountLookup => "account-lookup",
            Endpoint::TransactionLookup => "transaction-lookup",
        }
    }

    /// Path of the matching node REST call.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Heartbeat => "/heartbeat",
            Endpoint::ChainHeight => "/chain/height",
            Endpoint::NodeInfo => "/node/info",
            Endpoint::AccountLookup => "/account/get",
            Endpoint::TransactionLookup => "/transaction/get",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.name() == name || e.path() == name)
    }

    /// The lookup parameter, honouring the `id` alias for transactions.
    fn key_param(&self, params: &QueryParams) -> Option<String> {
        let non_empty = |k: &str| params.get(k).filter(|v| !v.is_empty()).cloned();
        match self {
            Endpoint::AccountLookup => non_empty("address"),
            Endpoint::TransactionLookup => non_empty("hash").or_else(|| non_empty("id")),
            _ => None,
        }
    }

    fn miss(&self) -> LedgerError {
        match self {
            Endpoint::AccountLookup => LedgerError::AccountNotFound,
            Endpoint::TransactionLookup => LedgerError::TransactionNotFound,
            other => LedgerError::UnconfiguredEndpoint(other.name().to_string()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::parse(s).ok_or_else(|| LedgerError::UnconfiguredEndpoint(s.to_string()))
    }
}

/// A pre-registered answer: a payload or an error, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum CannedResponse {
    Data(Value),
    Error(LedgerError),
}

impl CannedResponse {
    pub fn data(&self) -> Option<&Value> {
        match self {
            CannedResponse::Data(v) => Some(v),
            CannedResponse::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LedgerError> {
        match self {
            CannedResponse::Data(_) => None,
            CannedResponse::Error(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<Value, LedgerError> {
        match self {
            CannedResponse::Data(v) => Ok(v),
            CannedResponse::Error(e) => Err(e),
        }
    }
}

type EntryKey = (Endpoint, Option<String>);

/// Exact-match table of canned ledger responses, built once and never mutated.
#[derive(Debug, Clone)]
pub struct MockResponder {
    entries: HashMap<EntryKey, CannedResponse>,
}

impl Default for MockResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResponder {
    pub fn new() -> Self {
        Self::built_at(Utc::now())
    }

    /// `now` stamps the node-info block; the node pretends to have been up a day.
    pub fn built_at(now: DateTime<Utc>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            (Endpoint::Heartbeat, None),
            CannedResponse::Data(json!({ "code": 1, "type": 2, "message": "ok (mock data)" })),
        );
        entries.insert(
            (Endpoint::ChainHeight, None),
            CannedResponse::Data(json!({ "height": 4_012_345u64 })),
        );
        entries.insert(
            (Endpoint::NodeInfo, None),
            CannedResponse::Data(node_info_payload(now)),
        );
        entries.insert(
            (Endpoint::AccountLookup, Some(SAMPLE_ADDRESS_NORMALIZED.to_string())),
            CannedResponse::Data(sample_account_payload()),
        );
        entries.insert(
            (Endpoint::TransactionLookup, Some(SAMPLE_HASH.to_string())),
            CannedResponse::Data(sample_transaction_payload()),
        );
        debug!(entries = entries.len(), "mock ledger table built");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canned answer for a known endpoint. Lookups that miss get the
    /// endpoint's fixed not-found error.
    pub fn respond(&self, endpoint: Endpoint, params: &QueryParams) -> CannedResponse {
        let key = (endpoint, endpoint.key_param(params));
        match self.entries.get(&key) {
            Some(found) => found.clone(),
            None => CannedResponse::Error(endpoint.miss()),
        }
    }
}

impl LedgerClient for MockResponder {
    fn query(&self, endpoint: &str, params: &QueryParams) -> Result<Value, LedgerError> {
        let endpoint = endpoint.parse::<Endpoint>()?;
        let response = self.respond(endpoint, params);
        debug!(
            endpoint = endpoint.name(),
            hit = response.data().is_some(),
            "mock lookup"
        );
        response.into_result()
    }
}

fn node_info_payload(now: DateTime<Utc>) -> Value {
    let started = now - Duration::hours(24);
    json!({
        "node": { "protocol": "http", "host": "mock.nem.local", "port": 7890 },
        "nisInfo": {
            "currentTime": now.timestamp_millis(),
            "application": "NEM Infrastructure Server",
            "startTime": started.timestamp_millis(),
            "version": "0.6.99-MOCK",
            "signer": Value::Null,
            "networkId": 104
        }
    })
}

fn sample_account_payload() -> Value {
    json!({
        "meta": {
            "cosignatories": [],
            "cosignatoryOf": [],
            "status": "LOCKED",
            "remoteStatus": "INACTIVE"
        },
        "account": {
            "address": SAMPLE_ADDRESS_NORMALIZED,
            "harvestedBlocks": 15,
            "balance": 123_456_789u64,
            "importance": 0.00012345,
            "vestedBalance": 100_000_000u64,
            "publicKey": SAMPLE_HASH,
            "label": "Demo Mock Account",
            "multisigInfo": {}
        }
    })
}

fn sample_transaction_payload() -> Value {
    json!({
        "meta": {
            "innerHash": {},
            "id": 98765,
            "hash": { "data": SAMPLE_HASH },
            "height": 4_012_300u64
        },
        "transaction": {
            "timeStamp": 195_000_000u32,
            "amount": 50_000_000u64,
            "signature": "f1e2d3c4b5a6f1e2d3c4b5a6f1e2d3c4b5a6f1e2d3c4b5a6f1e2d3c4b5a6f1e2d3c4b5a6f1e2d3c4",
            "fee": 100_000u64,
            "recipient": "NBZDEE-37UHFG-QS3HEA-CQIP3W-XMYNP4-6HDPPA-Y2K4",
            "type": 257,
            "deadline": 195_003_600u32,
            "message": {
                // "Day la tin nhan giao dich gia."
                "payload": "446179206c612074696e206e68616e206769616f2064696368206769612e",
                "type": 1
            },
            "version": 1_744_830_465i64,
            "signer": SAMPLE_HASH
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> MockResponder {
        MockResponder::new()
    }

    #[test]
    fn endpoint_names_and_paths_parse() {
        for ep in Endpoint::ALL {
            assert_eq!(Endpoint::parse(ep.name()), Some(ep));
            assert_eq!(Endpoint::parse(ep.path()), Some(ep));
        }
        assert_eq!(Endpoint::parse("/account/transfers"), None);
    }

    #[test]
    fn sample_account_is_found() {
        let data = responder()
            .query("account-lookup", &params(&[("address", SAMPLE_ADDRESS_NORMALIZED)]))
            .unwrap();
        assert_eq!(data["account"]["balance"], 123_456_789u64);
        assert_eq!(data["account"]["importance"], 0.00012345);
    }

    #[test]
    fn other_addresses_are_not_found() {
        let r = responder();
        for addr in [
            "NBZDEE37UHFGQS3HEACQIP3WXMYNP46HDPPAY2K4",
            "nactuskr5khjswt4ekne55m7u74fkwkereeeysu5",
            crate::SAMPLE_ADDRESS,
            "",
        ] {
            let res = r.query("account-lookup", &params(&[("address", addr)]));
            assert_eq!(res, Err(LedgerError::AccountNotFound), "address {addr:?}");
        }
        assert_eq!(
            r.query("/account/get", &QueryParams::new()),
            Err(LedgerError::AccountNotFound)
        );
    }

    #[test]
    fn transaction_accepts_hash_or_id() {
        let r = responder();
        let by_hash = r.query("transaction-lookup", &params(&[("hash", SAMPLE_HASH)])).unwrap();
        let by_id = r.query("/transaction/get", &params(&[("id", SAMPLE_HASH)])).unwrap();
        assert_eq!(by_hash, by_id);
        assert_eq!(by_hash["transaction"]["type"], 257);
        let blank_hash = r
            .query("transaction-lookup", &params(&[("hash", ""), ("id", SAMPLE_HASH)]))
            .unwrap();
        assert_eq!(blank_hash, by_hash);
    }

    #[test]
    fn other_hashes_are_not_found() {
        let other = "0".repeat(64);
        let res = responder().query("transaction-lookup", &params(&[("hash", &other)]));
        assert_eq!(res, Err(LedgerError::TransactionNotFound));
    }

    #[test]
    fn status_endpoints_always_succeed() {
        let r = responder();
        for _ in 0..3 {
            for ep in [Endpoint::NodeInfo, Endpoint::ChainHeight, Endpoint::Heartbeat].iter() {
                let first = r.respond(*ep, &QueryParams::new());
                let again = r.respond(*ep, &params(&[("address", "ignored")]));
                assert!(first.error().is_none());
                assert!(first.data().is_some());
                assert_eq!(first, again);
            }
        }
        assert_eq!(r.query("chain-height", &QueryParams::new()).unwrap()["height"], 4_012_345u64);
    }

    #[test]
    fn unregistered_endpoint_is_its_own_error() {
        let res = responder().query("/account/harvests", &QueryParams::new());
        assert_eq!(
            res,
            Err(LedgerError::UnconfiguredEndpoint("/account/harvests".to_string()))
        );
        assert!(!res.unwrap_err().is_not_found());
    }

    #[test]
    fn node_info_uptime_is_one_day() {
        let now = Utc::now();
        let r = MockResponder::built_at(now);
        let info = r.respond(Endpoint::NodeInfo, &QueryParams::new());
        let nis = &info.data().unwrap()["nisInfo"];
        let up = nis["currentTime"].as_i64().unwrap() - nis["startTime"].as_i64().unwrap();
        assert_eq!(up, 24 * 3600 * 1000);
        assert_eq!(r.len(), 5);
    }
}
