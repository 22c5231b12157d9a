//! Credential storage configuration.

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "sampah-cli".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// OS keychain service name. Tests override this to stay away from real
    /// credentials.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
        }
    }
}
