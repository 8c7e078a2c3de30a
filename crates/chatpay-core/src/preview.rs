use rand::RngCore;
use rand_core::OsRng;

use format_utils::{
    format_balance_with, format_date, format_usd_with, FormatPolicy, DEFAULT_BALANCE_DECIMALS,
};
use tx_display::{
    generate_tx_hash_with, parse_amount, resolve_recipient, truncate_address, NameResolver,
    StaticResolver,
};

use crate::error::CoreError;
use crate::types::{PreviewRequest, TxPreview};

/// Renders a draft transfer into a [`TxPreview`] card.
///
/// Validates the typed amount, resolves the recipient through `resolver`,
/// prices the gas, and formats every display string under `policy`. The
/// mock confirmation hash comes from `rng` so callers can seed it.
pub fn preview_transaction<R: RngCore>(
    request: &PreviewRequest,
    policy: &FormatPolicy,
    resolver: &dyn NameResolver,
    rng: &mut R,
) -> Result<TxPreview, CoreError> {
    let amount_eth = parse_amount(&request.amount)?;
    let recipient = resolve_recipient(&request.recipient, resolver)?;

    let recipient_display = match &recipient.ens_name {
        Some(name) => name.clone(),
        None => truncate_address(&recipient.address),
    };

    let gas = request.gas.estimate();
    let amount_usd = amount_eth * request.gas.eth_usd_price;

    Ok(TxPreview {
        recipient,
        recipient_display,
        amount_eth,
        amount_display: format_balance_with(policy, amount_eth, DEFAULT_BALANCE_DECIMALS),
        amount_usd_display: format_usd_with(policy, amount_usd),
        gas_display: format_usd_with(policy, gas.cost_usd),
        gas,
        timestamp_display: format_date(request.timestamp_ms),
        tx_hash: generate_tx_hash_with(rng),
    })
}

/// [`preview_transaction`] wired with the default policy, the demo
/// resolver, and the OS random source.
pub fn preview_transaction_demo(request: &PreviewRequest) -> Result<TxPreview, CoreError> {
    preview_transaction(
        request,
        &FormatPolicy::default(),
        &StaticResolver::default(),
        &mut OsRng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tx_display::{GasParams, TxDisplayError, DEMO_RESOLVED_ADDRESS, TX_HASH_LEN};

    // 2024-01-15T15:07:00Z
    const DRAFT_TS_MS: i64 = 1_705_331_220_000;

    fn request(recipient: &str, amount: &str) -> PreviewRequest {
        PreviewRequest {
            recipient: recipient.into(),
            amount: amount.into(),
            gas: GasParams::native_transfer(20.0, 1800.0),
            timestamp_ms: DRAFT_TS_MS,
        }
    }

    fn preview(request: &PreviewRequest) -> Result<TxPreview, CoreError> {
        let mut rng = StdRng::seed_from_u64(7);
        preview_transaction(
            request,
            &FormatPolicy::default(),
            &StaticResolver::default(),
            &mut rng,
        )
    }

    #[test]
    fn ens_recipient_renders_full_card() {
        let card = preview(&request("alice.eth", "1.5")).unwrap();

        assert_eq!(card.recipient.address, DEMO_RESOLVED_ADDRESS);
        assert_eq!(card.recipient_display, "alice.eth");
        assert_eq!(card.amount_eth, 1.5);
        assert_eq!(card.amount_display, "1.5");
        assert_eq!(card.amount_usd_display, "$2,700.00");
        assert_eq!(card.gas_display, "$0.76");
        assert_eq!(card.timestamp_display, "Jan 15, 3:07 PM");
        assert_eq!(card.tx_hash.len(), TX_HASH_LEN);
    }

    #[test]
    fn raw_address_recipient_is_truncated_for_display() {
        let card = preview(&request(DEMO_RESOLVED_ADDRESS, "0.25")).unwrap();

        assert_eq!(card.recipient.address, DEMO_RESOLVED_ADDRESS);
        assert_eq!(card.recipient.ens_name, None);
        assert_eq!(card.recipient_display, "0x5aAe...eAed");
        assert_eq!(card.amount_usd_display, "$450.00");
    }

    #[test]
    fn invalid_amount_is_rejected() {
        let err = preview(&request("alice.eth", "-1")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount(_)));

        let err = preview(&request("alice.eth", "0")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount(_)));
    }

    #[test]
    fn invalid_recipient_is_rejected() {
        let err = preview(&request("not-an-address", "1.0")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecipient(_)));
    }

    #[test]
    fn resolver_failure_propagates() {
        struct Unregistered;
        impl NameResolver for Unregistered {
            fn resolve(&self, name: &str) -> Result<String, TxDisplayError> {
                Err(TxDisplayError::ResolveFailed(format!("'{name}' unknown")))
            }
        }

        let mut rng = StdRng::seed_from_u64(7);
        let err = preview_transaction(
            &request("ghost.eth", "1.0"),
            &FormatPolicy::default(),
            &Unregistered,
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecipient(_)));
    }

    #[test]
    fn seeded_rng_makes_hash_deterministic() {
        let a = preview(&request("alice.eth", "1.5")).unwrap();
        let b = preview(&request("alice.eth", "1.5")).unwrap();
        assert_eq!(a.tx_hash, b.tx_hash);
    }

    #[test]
    fn custom_policy_flows_into_every_display_string() {
        let policy = FormatPolicy::new('.', ',', "\u{20ac}", 2).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let card = preview_transaction(
            &request("alice.eth", "1234.5"),
            &policy,
            &StaticResolver::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(card.amount_display, "1.234,5");
        assert!(card.amount_usd_display.starts_with('\u{20ac}'));
        assert!(card.gas_display.starts_with('\u{20ac}'));
    }

    #[test]
    fn demo_wrapper_produces_a_card() {
        let card = preview_transaction_demo(&request("alice.eth", "1.5")).unwrap();
        assert_eq!(card.recipient_display, "alice.eth");
        assert!(card.tx_hash.starts_with("0x"));
    }
}
