use sha3::{Digest, Keccak256};

use crate::error::TxDisplayError;

/// Leading characters kept by [`truncate_address`].
pub const DEFAULT_PREFIX_CHARS: usize = 6;
/// Trailing characters kept by [`truncate_address`].
pub const DEFAULT_SUFFIX_CHARS: usize = 4;

const ELLIPSIS: &str = "...";

/// Shortens an address to its default chat-bubble form
/// (`0x5aAe...BeAed`).
pub fn truncate_address(address: &str) -> String {
    truncate_address_with(address, DEFAULT_PREFIX_CHARS, DEFAULT_SUFFIX_CHARS)
}

/// Shortens an address to `prefix` leading and `suffix` trailing
/// characters joined by an ellipsis.
///
/// Inputs shorter than `prefix + suffix` come back unchanged; truncating
/// them would produce a longer string than the original. Counts characters
/// rather than bytes so arbitrary display strings never split a UTF-8
/// sequence.
pub fn truncate_address_with(address: &str, prefix: usize, suffix: usize) -> String {
    if address.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = address.chars().collect();
    if chars.len() < prefix + suffix {
        return address.to_string();
    }

    let mut shortened = String::with_capacity(prefix + ELLIPSIS.len() + suffix);
    shortened.extend(&chars[..prefix]);
    shortened.push_str(ELLIPSIS);
    shortened.extend(&chars[chars.len() - suffix..]);
    shortened
}

/// Strips the `0x` prefix and checks the payload is exactly 40 hex
/// characters.
fn hex_payload(address: &str) -> Result<&str, TxDisplayError> {
    let payload = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| TxDisplayError::InvalidAddress("missing 0x prefix".into()))?;

    if payload.len() != 40 {
        return Err(TxDisplayError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            payload.len()
        )));
    }

    if let Some(bad) = payload.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(TxDisplayError::InvalidAddress(format!(
            "non-hex character '{bad}'"
        )));
    }

    Ok(payload)
}

/// Applies EIP-55 mixed-case checksum encoding to an address.
///
/// Accepts any casing on input and returns the canonical checksummed form:
/// a hex letter is uppercased exactly when the corresponding nibble of the
/// Keccak-256 hash of the lowercase payload is 8 or more.
pub fn checksum_address(address: &str) -> Result<String, TxDisplayError> {
    let payload = hex_payload(address)?.to_ascii_lowercase();
    let digest = Keccak256::digest(payload.as_bytes());

    let mut checksummed = String::with_capacity(2 + payload.len());
    checksummed.push_str("0x");
    for (i, c) in payload.chars().enumerate() {
        let shift = if i % 2 == 0 { 4 } else { 0 };
        let nibble = (digest[i / 2] >> shift) & 0x0f;
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }
    Ok(checksummed)
}

/// Validates an address string: `0x` plus 40 hex characters, with the
/// EIP-55 checksum verified when the payload is mixed-case.
///
/// Single-case payloads carry no checksum and validate as `true`;
/// structurally broken input is an error rather than `false`.
pub fn validate_address(address: &str) -> Result<bool, TxDisplayError> {
    let payload = hex_payload(address)?;

    let has_upper = payload.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = payload.chars().any(|c| c.is_ascii_lowercase());
    if !(has_upper && has_lower) {
        return Ok(true);
    }

    Ok(checksum_address(address)? == address)
}
