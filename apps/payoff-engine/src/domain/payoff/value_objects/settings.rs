//! Analysis Settings Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the price axis below the lowest strike is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowerTailPolicy {
    /// Spot cannot settle below zero; the P&L at zero bounds the lower tail.
    #[default]
    Floored,
    /// The first interval's line extends indefinitely; a sloped lower tail is
    /// reported as unbounded.
    Unbounded,
}

/// Tunables of the payoff pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Shares per option contract applied to max profit / max loss.
    pub contract_multiplier: u32,
    /// Distance the plot extends beyond the outermost strike or break-even.
    pub plot_padding: Decimal,
    /// Upper sentinel is `(highest strike + 1) * sentinel_scale`.
    pub sentinel_scale: u32,
    /// Lower tail treatment.
    pub lower_tail: LowerTailPolicy,
}

impl AnalysisSettings {
    /// Standard equity option multiplier.
    pub const DEFAULT_CONTRACT_MULTIPLIER: u32 = 100;
    /// Default plot extension beyond the outermost vertex.
    pub const DEFAULT_PLOT_PADDING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
    /// Default upper sentinel scale.
    pub const DEFAULT_SENTINEL_SCALE: u32 = 1000;

    /// Set the lower tail policy.
    #[must_use]
    pub const fn with_lower_tail(mut self, lower_tail: LowerTailPolicy) -> Self {
        self.lower_tail = lower_tail;
        self
    }

    /// Set the contract multiplier.
    #[must_use]
    pub const fn with_contract_multiplier(mut self, contract_multiplier: u32) -> Self {
        self.contract_multiplier = contract_multiplier;
        self
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            contract_multiplier: Self::DEFAULT_CONTRACT_MULTIPLIER,
            plot_padding: Self::DEFAULT_PLOT_PADDING,
            sentinel_scale: Self::DEFAULT_SENTINEL_SCALE,
            lower_tail: LowerTailPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_settings() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.contract_multiplier, 100);
        assert_eq!(settings.plot_padding, dec!(5));
        assert_eq!(settings.sentinel_scale, 1000);
        assert_eq!(settings.lower_tail, LowerTailPolicy::Floored);
    }

    #[test]
    fn builder_methods() {
        let settings = AnalysisSettings::default()
            .with_lower_tail(LowerTailPolicy::Unbounded)
            .with_contract_multiplier(10);
        assert_eq!(settings.lower_tail, LowerTailPolicy::Unbounded);
        assert_eq!(settings.contract_multiplier, 10);
    }

    #[test]
    fn lower_tail_serde() {
        let json = serde_json::to_string(&LowerTailPolicy::Unbounded).unwrap();
        assert_eq!(json, "\"unbounded\"");
    }
}
