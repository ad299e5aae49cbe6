use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::{
    MICRO_PER_UNIT, NETWORK_EPOCH_UNIX,
    model::{Message, MessageKind},
};

pub const UNKNOWN_TRANSACTION_TYPE: &str = "Unknown Transaction Type";

/// Every transaction type code with a display name.
pub const TRANSACTION_TYPES: &[(u32, &str)] = &[
    (257, "Transfer Transaction"),
    (258, "Importance Transfer Transaction"),
    (259, "Aggregate Modification Transaction"),
    (4097, "Provision Namespace Transaction"),
    (4098, "Mosaic Creation Transaction"),
    (4099, "Mosaic Supply Change Transaction"),
    (8193, "Account Key Link Transaction"),
    (8194, "Node Key Link Transaction"),
    (8195, "VRF Key Link Transaction"),
    (16385, "Account Metadata Transaction"),
    (16386, "Mosaic Metadata Transaction"),
    (16387, "Namespace Metadata Transaction"),
    (32769, "Account Address Restriction Transaction"),
    (32770, "Account Mosaic Restriction Transaction"),
    (32771, "Account Operation Restriction Transaction"),
    (32772, "Mosaic Address Restriction Transaction"),
    (32773, "Mosaic Global Restriction Transaction"),
    (65537, "Aggregate Complete Transaction"),
    (65538, "Aggregate Bonded Transaction"),
    (131073, "Lock Transaction"),
    (131074, "Secret Lock Transaction"),
    (131075, "Secret Proof Transaction"),
    (196609, "Account Property Transaction"),
    (262145, "Mosaic Definition Transaction"),
    (262146, "Mosaic Supply Change Transaction"),
    (524289, "Address Alias Transaction"),
    (524290, "Mosaic Alias Transaction"),
    (786433, "Account Restriction Transaction"),
    (1048577, "Mosaic Restriction Transaction"),
    (1310721, "Exchange Offer Transaction"),
    (1310722, "Exchange Withdrawal Transaction"),
    (1310723, "Exchange Deposit Transaction"),
    (1310724, "Exchange Cancel Transaction"),
    (1310725, "Exchange Claim Transaction"),
];

/// Display name for a transaction type code. Never fails.
pub fn transaction_type_name(code: u32) -> &'static str {
    TRANSACTION_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_TRANSACTION_TYPE)
}

pub fn network_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(NETWORK_EPOCH_UNIX, 0).unwrap_or_default()
}

/// Converts seconds since the network epoch into an absolute UTC instant.
pub fn network_time_to_utc(timestamp: u32) -> DateTime<Utc> {
    network_epoch() + Duration::seconds(i64::from(timestamp))
}

pub fn format_utc(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "encoding", rename_all = "lowercase")]
pub enum DecodedMessage {
    Text { text: String },
    Raw { kind: u32, hex: String },
}

impl DecodedMessage {
    pub fn as_display(&self) -> &str {
        match self {
            DecodedMessage::Text { text } => text,
            DecodedMessage::Raw { hex, .. } => hex,
        }
    }
}

/// Plain messages are hex-decoded to text; anything else is passed through as hex.
pub fn decode_message(message: &Message) -> DecodedMessage {
    match message.kind() {
        MessageKind::Plain => DecodedMessage::Text {
            text: decode_hex_lossy(&message.payload),
        },
        MessageKind::Other(kind) => DecodedMessage::Raw {
            kind,
            hex: message.payload.clone(),
        },
    }
}

/// Hex to UTF-8 text. Bad digit pairs, a dangling nibble and invalid UTF-8
/// each come out as U+FFFD.
pub fn decode_hex_lossy(payload: &str) -> String {
    let payload = payload.trim();
    if let Ok(bytes) = hex::decode(payload) {
        return String::from_utf8_lossy(&bytes).into_owned();
    }

    let mut out = String::new();
    let mut run: Vec<u8> = Vec::new();
    for pair in payload.as_bytes().chunks(2) {
        match parse_hex_pair(pair) {
            Some(byte) => run.push(byte),
            None => {
                out.push_str(&String::from_utf8_lossy(&run));
                run.clear();
                out.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }
    out.push_str(&String::from_utf8_lossy(&run));
    out
}

fn parse_hex_pair(pair: &[u8]) -> Option<u8> {
    if pair.len() != 2 || !pair.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let digits = std::str::from_utf8(pair).ok()?;
    u8::from_str_radix(digits, 16).ok()
}

/// `123456789` -> `"123.456789"`, with thousands separators on the whole part.
pub fn format_units(micro: u64) -> String {
    let whole = micro / MICRO_PER_UNIT;
    let frac = micro % MICRO_PER_UNIT;
    format!("{}.{:06}", group_thousands(whole), frac)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
