//! # tx-display
//!
//! Transaction-facing transforms for the chatpay display core:
//!
//! - Address truncation for chat bubbles, plus EIP-55 validation and
//!   checksum encoding
//! - Gas-cost estimation in USD
//! - Recipient classification (raw address vs ENS name) behind a
//!   pluggable resolver
//! - Strict validation of user-typed amounts
//! - Mock transaction-hash generation with an injectable random source

pub mod address;
pub mod amount;
pub mod error;
pub mod gas;
pub mod hash;
pub mod recipient;

pub use address::{
    checksum_address, truncate_address, truncate_address_with, validate_address,
    DEFAULT_PREFIX_CHARS, DEFAULT_SUFFIX_CHARS,
};
pub use amount::{is_valid_amount, parse_amount};
pub use error::TxDisplayError;
pub use gas::{calculate_gas_cost, GasEstimate, GasParams, NATIVE_TRANSFER_GAS_LIMIT};
pub use hash::{generate_tx_hash, generate_tx_hash_with, TX_HASH_LEN};
pub use recipient::{
    is_ens_name, parse_recipient, resolve_recipient, NameResolver, Recipient, StaticResolver,
    DEMO_RESOLVED_ADDRESS, ENS_SUFFIX,
};
