use crate::{HASH_HEX_LEN, InputError};

const ADDRESS_GROUP: usize = 6;

/// Trim, upper-case and drop display hyphens.
pub fn normalize_address(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn normalize_hash(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn validate_address(raw: &str) -> Result<String, InputError> {
    let address = normalize_address(raw);
    if address.is_empty() {
        return Err(InputError::EmptyAddress);
    }
    Ok(address)
}

/// Only the length is checked; the digits themselves are left to the lookup.
pub fn validate_hash(raw: &str) -> Result<String, InputError> {
    let hash = normalize_hash(raw);
    if hash.is_empty() {
        return Err(InputError::EmptyHash);
    }
    let len = hash.chars().count();
    if len != HASH_HEX_LEN {
        return Err(InputError::HashLength(len));
    }
    Ok(hash)
}

/// `NACTUSKR5KHJ...` -> `NACTUS-KR5KHJ-...`
pub fn pretty_address(address: &str) -> String {
    let normalized = normalize_address(address);
    let chars: Vec<char> = normalized.chars().collect();
    chars
        .chunks(ADDRESS_GROUP)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn short_address(address: &str) -> String {
    let head: String = address.chars().take(8).collect();
    format!("{}...", head)
}

/// First eight and last four characters, for hashes in lists.
pub fn short_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 12 {
        return id.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
