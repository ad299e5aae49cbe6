//! Display-ready shapes of the ledger records, shared by the CLI and the dashboard.

use serde::Serialize;
use serde_json::Value;

use crate::{
    UNIT_TICKER,
    client::LedgerClient,
    decode::{self, DecodedMessage},
    input,
    model::{AccountInfo, TransactionInfo},
    responder::{Endpoint, QueryParams},
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountView {
    pub address: String,
    pub pretty_address: String,
    pub balance: String,
    pub balance_micro: u64,
    pub vested_balance: String,
    pub importance: String,
    pub harvested_blocks: u64,
    pub public_key: String,
    pub label: String,
    pub status: String,
    pub unit: &'static str,
}

impl AccountView {
    pub fn from_info(info: &AccountInfo) -> Self {
        let acc = &info.account;
        Self {
            address: acc.address.clone(),
            pretty_address: input::pretty_address(&acc.address),
            balance: decode::format_units(acc.balance),
            balance_micro: acc.balance,
            vested_balance: decode::format_units(acc.vested_balance),
            importance: format!("{:.8}", acc.importance),
            harvested_blocks: acc.harvested_blocks,
            public_key: acc.public_key.clone(),
            label: acc.label.clone().unwrap_or_else(|| "None".to_string()),
            status: info.meta.status.clone(),
            unit: UNIT_TICKER,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TransferView {
    pub recipient: String,
    pub amount: String,
    pub amount_micro: u64,
    pub message: Option<DecodedMessage>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionView {
    pub hash: String,
    pub short_hash: String,
    pub type_code: u32,
    pub type_name: &'static str,
    pub height: u64,
    pub time_utc: String,
    pub signer: String,
    pub fee: String,
    pub fee_micro: u64,
    /// Only set for transfer transactions.
    pub transfer: Option<TransferView>,
    pub unit: &'static str,
}

impl TransactionView {
    pub fn from_info(info: &TransactionInfo) -> Self {
        let tx = &info.transaction;
        let transfer = tx.is_transfer().then(|| TransferView {
            recipient: tx.recipient.clone().unwrap_or_default(),
            amount: decode::format_units(tx.amount),
            amount_micro: tx.amount,
            message: tx
                .message
                .as_ref()
                .filter(|m| !m.payload.is_empty())
                .map(decode::decode_message),
        });
        Self {
            hash: info.meta.hash.data.clone(),
            short_hash: input::short_id(&info.meta.hash.data),
            type_code: tx.tx_type,
            type_name: tx.type_name(),
            height: info.meta.height,
            time_utc: decode::format_utc(&decode::network_time_to_utc(tx.time_stamp)),
            signer: tx.signer.clone(),
            fee: decode::format_units(tx.fee),
            fee_micro: tx.fee,
            transfer,
            unit: UNIT_TICKER,
        }
    }
}

/// Outcome of one status call: payload or error message.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Probe {
    pub endpoint: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Probe {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub heartbeat: Probe,
    pub chain_height: Probe,
    pub node_info: Probe,
}

impl StatusReport {
    pub fn all_ok(&self) -> bool {
        self.heartbeat.is_ok() && self.chain_height.is_ok() && self.node_info.is_ok()
    }
}

pub fn status_report<C: LedgerClient + ?Sized>(client: &C) -> StatusReport {
    let probe = |endpoint: Endpoint| match client.query(endpoint.name(), &QueryParams::new()) {
        Ok(data) => Probe {
            endpoint: endpoint.name(),
            data: Some(data),
            error: None,
        },
        Err(e) => Probe {
            endpoint: endpoint.name(),
            data: None,
            error: Some(e.to_string()),
        },
    };
    StatusReport {
        heartbeat: probe(Endpoint::Heartbeat),
        chain_height: probe(Endpoint::ChainHeight),
        node_info: probe(Endpoint::NodeInfo),
    }
}
