//! # chatpay-core
//!
//! The flat API surface the chatpay chat UI consumes. Everything the
//! frontend needs to render transfer drafts lives behind this one crate:
//! formatting ([`format_balance`], [`format_usd`], [`format_date`]),
//! address display ([`truncate_address`]), gas pricing
//! ([`calculate_gas_cost`]), recipient handling ([`parse_recipient`],
//! [`resolve_recipient`]), input validation ([`is_valid_amount`]), mock
//! hashes ([`generate_tx_hash`]), and the composed
//! [`preview_transaction`] flow.

pub mod error;
pub mod preview;
pub mod types;

pub use error::CoreError;
pub use preview::{preview_transaction, preview_transaction_demo};
pub use types::{PreviewRequest, TxPreview};

pub use format_utils::{
    format_balance, format_balance_with, format_date, format_usd, format_usd_with, DateInput,
    FormatError, FormatPolicy, NumericInput, DEFAULT_BALANCE_DECIMALS,
};
pub use tx_display::{
    calculate_gas_cost, checksum_address, generate_tx_hash, generate_tx_hash_with, is_ens_name,
    is_valid_amount, parse_amount, parse_recipient, resolve_recipient, truncate_address,
    truncate_address_with, validate_address, GasEstimate, GasParams, NameResolver, Recipient,
    StaticResolver, TxDisplayError, DEFAULT_PREFIX_CHARS, DEFAULT_SUFFIX_CHARS,
    DEMO_RESOLVED_ADDRESS, ENS_SUFFIX, NATIVE_TRANSFER_GAS_LIMIT, TX_HASH_LEN,
};
