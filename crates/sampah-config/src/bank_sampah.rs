//! Bank sampah sale hand-off configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_whatsapp_number() -> String {
    "6281339684249".to_string()
}

const fn default_nearby() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BankSampahConfig {
    /// International-format number (no `+`) that receives sale requests.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// How many locations the home screen lists.
    #[serde(default = "default_nearby")]
    pub nearby: usize,
}

impl Default for BankSampahConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            nearby: default_nearby(),
        }
    }
}

impl BankSampahConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` unless the number is all digits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.whatsapp_number.is_empty()
            || !self.whatsapp_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::invalid(
                "bank_sampah.whatsapp_number",
                "must contain digits only",
            ));
        }
        Ok(())
    }
}
