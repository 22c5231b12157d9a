//! Settings that are not tied to one backend feature.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Rows shown by listing commands when neither `--limit` flag is given.
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { default_limit: 20 }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::invalid("general.default_limit", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_is_rejected() {
        assert!(GeneralConfig { default_limit: 0 }.validate().is_err());
        assert!(GeneralConfig::default().validate().is_ok());
    }
}
