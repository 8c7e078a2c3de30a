use serde::{Deserialize, Serialize};

/// Gas consumed by a native ETH transfer.
pub const NATIVE_TRANSFER_GAS_LIMIT: u64 = 21_000;

const ETH_PER_GWEI: f64 = 1e-9;

/// USD cost of a transaction: `gas_price_gwei * 1e-9 * gas_limit *
/// eth_usd_price`.
///
/// No rounding is applied; display code rounds when rendering.
pub fn calculate_gas_cost(gas_price_gwei: f64, gas_limit: u64, eth_usd_price: f64) -> f64 {
    gas_price_gwei * ETH_PER_GWEI * gas_limit as f64 * eth_usd_price
}

/// The pricing triple a gas estimate is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasParams {
    pub gas_price_gwei: f64,
    pub gas_limit: u64,
    pub eth_usd_price: f64,
}

impl GasParams {
    /// Params for a plain ETH transfer at the given price levels.
    pub fn native_transfer(gas_price_gwei: f64, eth_usd_price: f64) -> Self {
        GasParams {
            gas_price_gwei,
            gas_limit: NATIVE_TRANSFER_GAS_LIMIT,
            eth_usd_price,
        }
    }

    /// Unrounded USD cost for these params.
    pub fn cost_usd(&self) -> f64 {
        calculate_gas_cost(self.gas_price_gwei, self.gas_limit, self.eth_usd_price)
    }

    /// Snapshot of the params together with their derived cost.
    pub fn estimate(&self) -> GasEstimate {
        GasEstimate {
            gas_price_gwei: self.gas_price_gwei,
            gas_limit: self.gas_limit,
            eth_usd_price: self.eth_usd_price,
            cost_usd: self.cost_usd(),
        }
    }
}

/// A priced gas estimate, ready to serialize toward the UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasEstimate {
    pub gas_price_gwei: f64,
    pub gas_limit: u64,
    pub eth_usd_price: f64,
    pub cost_usd: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_matches_reference_expression() {
        assert_eq!(
            calculate_gas_cost(20.0, 21_000, 1800.0),
            20.0 * 1e-9 * 21_000.0 * 1800.0
        );
    }

    #[test]
    fn typical_transfer_costs_under_a_dollar() {
        let cost = calculate_gas_cost(20.0, 21_000, 1800.0);
        assert!((cost - 0.756).abs() < 1e-12);
    }

    #[test]
    fn zero_inputs_cost_nothing() {
        assert_eq!(calculate_gas_cost(0.0, 21_000, 1800.0), 0.0);
        assert_eq!(calculate_gas_cost(20.0, 0, 1800.0), 0.0);
        assert_eq!(calculate_gas_cost(20.0, 21_000, 0.0), 0.0);
    }

    #[test]
    fn cost_scales_linearly_with_gas_price() {
        let base = calculate_gas_cost(10.0, 21_000, 1800.0);
        let doubled = calculate_gas_cost(20.0, 21_000, 1800.0);
        assert!((doubled - 2.0 * base).abs() < 1e-12);
    }

    #[test]
    fn params_and_estimate_agree() {
        let params = GasParams::native_transfer(20.0, 1800.0);
        assert_eq!(params.gas_limit, NATIVE_TRANSFER_GAS_LIMIT);

        let estimate = params.estimate();
        assert_eq!(estimate.cost_usd, params.cost_usd());
        assert_eq!(estimate.gas_price_gwei, 20.0);
    }

    #[test]
    fn estimate_serde_round_trip() {
        let estimate = GasParams::native_transfer(20.0, 1800.0).estimate();
        let json = serde_json::to_string(&estimate).unwrap();
        let back: GasEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, estimate);
    }
}
