use serde::{Deserialize, Serialize};

use tx_display::{GasEstimate, GasParams, Recipient};

/// What the chat UI hands over when the user drafts a transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Raw recipient string: an address or an ENS name.
    pub recipient: String,
    /// The amount exactly as the user typed it, in ETH.
    pub amount: String,
    /// Current gas pricing.
    pub gas: GasParams,
    /// Draft creation time, epoch milliseconds.
    pub timestamp_ms: i64,
}

/// A fully rendered transaction card for the chat UI.
///
/// Raw values ride along with their display strings so the frontend never
/// re-derives formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxPreview {
    pub recipient: Recipient,
    /// ENS name when one was typed, truncated address otherwise.
    pub recipient_display: String,
    pub amount_eth: f64,
    pub amount_display: String,
    pub amount_usd_display: String,
    pub gas: GasEstimate,
    pub gas_display: String,
    pub timestamp_display: String,
    /// Mock hash for the demo confirmation bubble.
    pub tx_hash: String,
}
