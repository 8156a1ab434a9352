//! CLI configuration

use std::str::FromStr;

use config::{Config, ConfigError, Environment, Source};
use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::{CoreError, Currency, RoundingMode};
use domain_split::SettlementPolicy;

use crate::error::SessionError;

/// Environment variable prefix, e.g. `SPLIT_CURRENCY`
pub const ENV_PREFIX: &str = "SPLIT";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CliConfig {
    /// Display currency code
    pub currency: String,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// `text` or `json`
    pub log_format: String,
    /// Zero threshold for settlement
    pub epsilon: Decimal,
    /// Fraction digits on payment amounts
    pub decimal_places: u32,
    /// Rounding mode name (`half_up`, `half_even`)
    pub rounding: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        let policy = SettlementPolicy::default();
        Self {
            currency: Currency::default().code().to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            epsilon: policy.epsilon(),
            decimal_places: policy.decimal_places(),
            rounding: "half_up".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `SPLIT_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from `source`, filling gaps with defaults
    pub fn load<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        Config::builder()
            .set_default("currency", defaults.currency)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", defaults.log_format)?
            .set_default("epsilon", defaults.epsilon.to_string())?
            .set_default("decimal_places", i64::from(defaults.decimal_places))?
            .set_default("rounding", defaults.rounding)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Returns true if logs should be written as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.trim().eq_ignore_ascii_case("json")
    }

    /// Returns the display currency
    pub fn display_currency(&self) -> Result<Currency, CoreError> {
        Ok(Currency::from_str(&self.currency)?)
    }

    /// Builds the settlement policy
    pub fn to_policy(&self) -> Result<SettlementPolicy, SessionError> {
        let rounding = RoundingMode::from_str(&self.rounding)?;
        Ok(SettlementPolicy::new(self.epsilon, self.decimal_places, rounding)?)
    }
}
