use serde::{Deserialize, Serialize};

use crate::types::ZeroRatePolicy;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// prefix applied to currency-formatted output, e.g. "£"
    pub currency_symbol: String,
    pub zero_rate_policy: ZeroRatePolicy,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self::uk_mortgage()
    }
}

impl QuoteConfig {
    /// pound sterling quotes; a 0% repayment mortgage falls back to
    /// straight-line principal division
    pub fn uk_mortgage() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            zero_rate_policy: ZeroRatePolicy::StraightLine,
        }
    }

    /// treat a 0% rate as a data error instead of quoting it
    pub fn strict() -> Self {
        Self {
            zero_rate_policy: ZeroRatePolicy::Reject,
            ..Self::uk_mortgage()
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_ui() {
        let config = QuoteConfig::default();
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.zero_rate_policy, ZeroRatePolicy::StraightLine);
    }

    #[test]
    fn test_with_currency_symbol() {
        let config = QuoteConfig::strict().with_currency_symbol("$");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.zero_rate_policy, ZeroRatePolicy::Reject);
    }
}
