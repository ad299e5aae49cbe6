use serde::{Deserialize, Serialize};

use crate::decode;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Heartbeat {
    pub code: i32,
    #[serde(rename = "type")]
    pub kind: i32,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainHeight {
    pub height: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NodeEndpoint {
    pub protocol: String,
    pub host: String,
    pub port: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NisInfo {
    /// Milliseconds since the Unix epoch.
    pub current_time: i64,
    pub application: String,
    pub start_time: i64,
    pub version: String,
    pub signer: Option<String>,
    /// 104 for mainnet, -104 for testnet.
    pub network_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub node: NodeEndpoint,
    pub nis_info: NisInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    #[serde(default)]
    pub cosignatories: Vec<String>,
    #[serde(default)]
    pub cosignatory_of: Vec<String>,
    pub status: String,
    pub remote_status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub address: String,
    pub public_key: String,
    /// Micro units.
    pub balance: u64,
    #[serde(default)]
    pub vested_balance: u64,
    #[serde(default)]
    pub importance: f64,
    #[serde(default)]
    pub harvested_blocks: u64,
    #[serde(default)]
    pub label: Option<String>,
}

/// Success payload of `account-lookup`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub meta: AccountMeta,
    pub account: AccountRecord,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HashData {
    pub data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionMeta {
    pub id: u64,
    pub hash: HashData,
    pub height: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Hex-encoded bytes.
    pub payload: String,
    #[serde(rename = "type", default = "default_message_type")]
    pub kind: u32,
}

fn default_message_type() -> u32 {
    MessageKind::PLAIN
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Plain,
    Other(u32),
}

impl MessageKind {
    pub const PLAIN: u32 = 1;

    pub fn from_code(code: u32) -> Self {
        if code == Self::PLAIN {
            MessageKind::Plain
        } else {
            MessageKind::Other(code)
        }
    }
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        MessageKind::from_code(self.kind)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Seconds since the network epoch.
    pub time_stamp: u32,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub signature: String,
    pub fee: u64,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(rename = "type")]
    pub tx_type: u32,
    #[serde(default)]
    pub deadline: u32,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub version: i64,
    /// Sender public key.
    pub signer: String,
}

impl TransactionRecord {
    pub const TRANSFER: u32 = 257;

    pub fn type_name(&self) -> &'static str {
        decode::transaction_type_name(self.tx_type)
    }

    pub fn is_transfer(&self) -> bool {
        self.tx_type == Self::TRANSFER
    }
}

/// Success payload of `transaction-lookup`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionInfo {
    pub meta: TransactionMeta,
    pub transaction: TransactionRecord,
}
