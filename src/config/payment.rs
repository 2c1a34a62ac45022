//! Payment configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Payment configuration. Only the simulated provider exists.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Delay before the simulated provider answers, in milliseconds
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl PaymentConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.simulated_delay_ms > 60_000 {
            return Err(ValidationError::PaymentDelayTooLong);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

fn default_simulated_delay_ms() -> u64 {
    1500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_defaults() {
        let config = PaymentConfig::default();
        assert_eq!(config.simulated_delay(), Duration::from_millis(1500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_delay_is_valid() {
        let config = PaymentConfig {
            simulated_delay_ms: 0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = PaymentConfig {
            simulated_delay_ms: 120_000,
        };
        assert_eq!(config.validate(), Err(ValidationError::PaymentDelayTooLong));
    }
}
