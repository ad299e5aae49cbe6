use ledger_core::{InputError, input};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WatchedAccount {
    pub address: String,
    /// Truncated address for the account picker.
    pub short: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Per-process dashboard state. Handlers receive it explicitly; the ledger
/// layer never sees it. Accounts are only ever appended.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    accounts: Vec<WatchedAccount>,
    selected_address: Option<String>,
    selected_node: String,
}

impl SessionContext {
    pub fn new(node_url: &str) -> Self {
        Self {
            accounts: Vec::new(),
            selected_address: None,
            selected_node: node_url.to_string(),
        }
    }

    pub fn accounts(&self) -> &[WatchedAccount] {
        &self.accounts
    }

    pub fn selected_node(&self) -> &str {
        &self.selected_node
    }

    /// Adds (or re-selects) an address and makes it the selection.
    pub fn add_account(
        &mut self,
        raw_address: &str,
        label: Option<String>,
    ) -> Result<&WatchedAccount, InputError> {
        let address = input::validate_address(raw_address)?;
        let idx = match self.accounts.iter().position(|a| a.address == address) {
            Some(idx) => idx,
            None => {
                info!(address = %address, "watching account");
                self.accounts.push(WatchedAccount {
                    short: input::short_address(&address),
                    address: address.clone(),
                    label: label.filter(|l| !l.trim().is_empty()),
                });
                self.accounts.len() - 1
            }
        };
        self.selected_address = Some(address);
        Ok(&self.accounts[idx])
    }

    /// Selects `raw_address` if it is watched, otherwise falls back to the
    /// first watched account (or nothing when the list is empty).
    pub fn select(&mut self, raw_address: &str) -> Option<&WatchedAccount> {
        let address = input::normalize_address(raw_address);
        self.selected_address = if self.accounts.iter().any(|a| a.address == address) {
            Some(address)
        } else {
            self.accounts.first().map(|a| a.address.clone())
        };
        self.selected()
    }

    pub fn selected(&self) -> Option<&WatchedAccount> {
        let wanted = self.selected_address.as_deref()?;
        self.accounts.iter().find(|a| a.address == wanted)
    }

    /// Returns false and keeps the current node when `url` is blank.
    pub fn set_node(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }
        self.selected_node = url.to_string();
        true
    }
}
