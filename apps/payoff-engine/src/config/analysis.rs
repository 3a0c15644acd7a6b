//! Payoff analysis configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::payoff::{AnalysisSettings, LowerTailPolicy};

/// Tunables of the payoff pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Shares per option contract.
    #[serde(default = "default_contract_multiplier")]
    pub contract_multiplier: u32,
    /// Plot extension beyond the outermost strike or break-even.
    #[serde(default = "default_plot_padding")]
    pub plot_padding: Decimal,
    /// Upper sentinel scale applied to the highest strike.
    #[serde(default = "default_sentinel_scale")]
    pub sentinel_scale: u32,
    /// Lower tail treatment.
    #[serde(default)]
    pub lower_tail: LowerTailPolicy,
}

impl AnalysisConfig {
    /// Convert into domain settings.
    #[must_use]
    pub const fn settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            contract_multiplier: self.contract_multiplier,
            plot_padding: self.plot_padding,
            sentinel_scale: self.sentinel_scale,
            lower_tail: self.lower_tail,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            contract_multiplier: default_contract_multiplier(),
            plot_padding: default_plot_padding(),
            sentinel_scale: default_sentinel_scale(),
            lower_tail: LowerTailPolicy::default(),
        }
    }
}

const fn default_contract_multiplier() -> u32 {
    AnalysisSettings::DEFAULT_CONTRACT_MULTIPLIER
}

const fn default_plot_padding() -> Decimal {
    AnalysisSettings::DEFAULT_PLOT_PADDING
}

const fn default_sentinel_scale() -> u32 {
    AnalysisSettings::DEFAULT_SENTINEL_SCALE
}
