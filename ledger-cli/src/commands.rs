use anyhow::Result;
use ledger_core::{
    LedgerClient, SAMPLE_ADDRESS, SAMPLE_HASH, UNIT_TICKER,
    decode::{self, DecodedMessage},
    input,
    model::Message,
    responder::{Endpoint, params},
    view::{AccountView, Probe, TransactionView, status_report},
};
use serde::Serialize;
use tracing::debug;

use crate::Command;

pub fn run<C: LedgerClient>(client: &C, command: Command, json: bool) -> Result<()> {
    debug!(?command, json, "running command");
    match command {
        Command::Status => status(client, json),
        Command::Account { address } => account(client, &address, json),
        Command::Tx { hash } => transaction(client, &hash, json),
        Command::TxType { code } => {
            let name = decode::transaction_type_name(code);
            if json {
                print_json(&serde_json::json!({ "code": code, "name": name }))
            } else {
                println!("{} ({})", code, name);
                Ok(())
            }
        }
        Command::DecodeMessage { payload, kind } => {
            let decoded = decode::decode_message(&Message { payload, kind });
            if json {
                return print_json(&decoded);
            }
            match decoded {
                DecodedMessage::Text { text } => println!("Message (plain text): {}", text),
                DecodedMessage::Raw { kind, hex } => println!("Message (hex, type {}): {}", kind, hex),
            }
            Ok(())
        }
        Command::Epoch { timestamp } => {
            let at = decode::network_time_to_utc(timestamp);
            if json {
                print_json(&serde_json::json!({ "network_time": timestamp, "utc": at }))
            } else {
                println!("{}", decode::format_utc(&at));
                Ok(())
            }
        }
        Command::Samples => {
            if json {
                return print_json(&samples());
            }
            println!("Sample address: {}", SAMPLE_ADDRESS);
            println!("Sample hash:    {}", SAMPLE_HASH);
            Ok(())
        }
        Command::Shell => Ok(()),
    }
}

fn samples() -> serde_json::Value {
    serde_json::json!({ "address": SAMPLE_ADDRESS, "hash": SAMPLE_HASH })
}

fn status<C: LedgerClient>(client: &C, json: bool) -> Result<()> {
    let report = status_report(client);
    if json {
        return print_json(&report);
    }
    print_probe("Heartbeat", &report.heartbeat, |d| {
        d.get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("-")
            .to_string()
    });
    print_probe("Chain height", &report.chain_height, |d| {
        d.get("height").map(|h| h.to_string()).unwrap_or_default()
    });
    print_probe("Node info", &report.node_info, |d| {
        let nis = &d["nisInfo"];
        format!(
            "{} {} on {}:{}",
            nis["application"].as_str().unwrap_or("-"),
            nis["version"].as_str().unwrap_or("-"),
            d["node"]["host"].as_str().unwrap_or("-"),
            d["node"]["port"]
        )
    });
    Ok(())
}

fn print_probe(label: &str, probe: &Probe, summary: impl Fn(&serde_json::Value) -> String) {
    match (&probe.data, &probe.error) {
        (_, Some(err)) => println!("✗ {}: {}", label, err),
        (Some(data), None) => println!("✓ {}: {}", label, summary(data)),
        (None, None) => println!("? {}: no data", label),
    }
}

fn account<C: LedgerClient>(client: &C, raw: &str, json: bool) -> Result<()> {
    let address = input::validate_address(raw)?;
    if json {
        let data = client.query(Endpoint::AccountLookup.name(), &params(&[("address", &address)]))?;
        return print_json(&data);
    }
    let view = AccountView::from_info(&client.account(&address)?);
    println!("✓ Account {}", view.pretty_address);
    println!("  Balance:          {} {}", view.balance, UNIT_TICKER);
    println!("  Vested balance:   {} {}", view.vested_balance, UNIT_TICKER);
    println!("  Importance:       {}", view.importance);
    println!("  Harvested blocks: {}", view.harvested_blocks);
    println!("  Public key:       {}", view.public_key);
    println!("  Label:            {}", view.label);
    Ok(())
}

fn transaction<C: LedgerClient>(client: &C, raw: &str, json: bool) -> Result<()> {
    let hash = input::validate_hash(raw)?;
    if json {
        let data = client.query(Endpoint::TransactionLookup.name(), &params(&[("hash", &hash)]))?;
        return print_json(&data);
    }
    let view = TransactionView::from_info(&client.transaction(&hash)?);
    println!("✓ Transaction {}", view.short_hash);
    println!("  Hash:    {}", view.hash);
    println!("  Type:    {} ({})", view.type_code, view.type_name);
    println!("  Height:  {}", view.height);
    println!("  Time:    {}", view.time_utc);
    println!("  Signer:  {}", view.signer);
    println!("  Fee:     {} {} ({} micro)", view.fee, UNIT_TICKER, view.fee_micro);
    match &view.transfer {
        Some(transfer) => {
            println!("  To:      {}", transfer.recipient);
            println!("  Amount:  {} {}", transfer.amount, UNIT_TICKER);
            match &transfer.message {
                Some(DecodedMessage::Text { text }) => println!("  Message: {}", text),
                Some(DecodedMessage::Raw { kind, hex }) => {
                    println!("  Message (hex, type {}): {}", kind, hex)
                }
                None => println!("  Message: none"),
            }
        }
        None => println!("  General details only for transaction type {}", view.type_code),
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
