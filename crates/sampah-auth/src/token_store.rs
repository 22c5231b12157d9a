//! Credential persistence.
//!
//! [`SystemStore`] resolves a token in priority order: OS keychain →
//! `SAMPAH_AUTH__TOKEN` env → `~/.sampah/credentials` (mode 0600).
//! [`MemoryStore`] keeps everything in-process for tests.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sampah_config::AuthConfig;
use sampah_core::Credential;
use serde::Serialize;

use crate::error::AuthError;

const KEYRING_USER: &str = "bearer-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Environment variable consulted when the keychain has nothing.
pub const TOKEN_ENV_VAR: &str = "SAMPAH_AUTH__TOKEN";

/// Where a loaded token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    Keyring,
    Env,
    File,
    Memory,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secure storage for the bearer credential.
pub trait CredentialStore: Send + Sync {
    /// The stored credential and the tier it came from.
    fn load(&self) -> Option<(Credential, TokenSource)>;

    /// Persist a credential, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if nothing could persist it.
    fn store(&self, credential: &Credential) -> Result<(), AuthError>;

    /// Erase the stored credential. Erasing nothing is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if a stored credential could not be removed.
    fn delete(&self) -> Result<(), AuthError>;
}

/// Plain-file store, the last tier of [`SystemStore`].
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.sampah/credentials`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if the home directory is unknown.
    pub fn in_home() -> Result<Self, AuthError> {
        dirs::home_dir()
            .map(|h| Self::new(h.join(".sampah").join(CREDENTIALS_FILE_NAME)))
            .ok_or_else(|| {
                AuthError::TokenStore("home directory not found; cannot store credentials".into())
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Option<(Credential, TokenSource)> {
        let content = fs::read_to_string(&self.path).ok()?;
        Credential::new(content).map(|c| (c, TokenSource::File))
    }

    fn store(&self, credential: &Credential) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStore(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, credential.expose())
            .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStore(format!("chmod {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }

    fn delete(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::TokenStore(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

/// Keychain → env → file.
#[derive(Debug, Clone)]
pub struct SystemStore {
    service: String,
    file: Option<FileStore>,
}

impl SystemStore {
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        let file = match FileStore::in_home() {
            Ok(file) => Some(file),
            Err(error) => {
                tracing::warn!(%error, "file fallback unavailable");
                None
            }
        };
        Self {
            service: config.keyring_service.clone(),
            file,
        }
    }

    fn entry(&self) -> Option<keyring::Entry> {
        keyring::Entry::new(&self.service, KEYRING_USER).ok()
    }

    fn keyring_holds(&self, credential: &Credential) -> bool {
        self.entry()
            .and_then(|entry| entry.get_password().ok())
            .is_some_and(|stored| stored == credential.expose())
    }

    fn store_file(&self, credential: &Credential) -> Result<(), AuthError> {
        self.file
            .as_ref()
            .ok_or_else(|| AuthError::TokenStore("no keychain and no home directory".into()))?
            .store(credential)
    }
}

impl CredentialStore for SystemStore {
    fn load(&self) -> Option<(Credential, TokenSource)> {
        if let Some(entry) = self.entry()
            && let Ok(token) = entry.get_password()
            && let Some(credential) = Credential::new(token)
        {
            return Some((credential, TokenSource::Keyring));
        }

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
            && let Some(credential) = Credential::new(token)
        {
            return Some((credential, TokenSource::Env));
        }

        self.file.as_ref().and_then(FileStore::load)
    }

    fn store(&self, credential: &Credential) -> Result<(), AuthError> {
        match keyring::Entry::new(&self.service, KEYRING_USER) {
            Ok(entry) => match entry.set_password(credential.expose()) {
                Ok(()) if self.keyring_holds(credential) => Ok(()),
                Ok(()) => {
                    // Platforms without a native backend get keyring's
                    // in-memory mock, which forgets the token on exit.
                    tracing::warn!("keyring did not retain the token; falling back to file");
                    self.store_file(credential)
                }
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    self.store_file(credential)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.store_file(credential)
            }
        }
    }

    fn delete(&self) -> Result<(), AuthError> {
        let keyring = self
            .entry()
            .map_or(Err(keyring::Error::NoEntry), |entry| entry.delete_credential());
        delete_tiers(keyring, self.file.as_ref())
    }
}

/// Clears the file tier even when the keychain refused, then reports the
/// keychain failure first. A missing keychain entry is not a failure.
fn delete_tiers(keyring: keyring::Result<()>, file: Option<&FileStore>) -> Result<(), AuthError> {
    let keyring = match keyring {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(error) => Err(AuthError::TokenStore(format!(
            "failed to remove token from keychain: {error}"
        ))),
    };
    let file = file.map_or(Ok(()), FileStore::delete);
    keyring.and(file)
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<Credential>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with(credential: Credential) -> Self {
        Self {
            token: Mutex::new(Some(credential)),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Credential>> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<(Credential, TokenSource)> {
        self.slot().clone().map(|c| (c, TokenSource::Memory))
    }

    fn store(&self, credential: &Credential) -> Result<(), AuthError> {
        *self.slot() = Some(credential.clone());
        Ok(())
    }

    fn delete(&self) -> Result<(), AuthError> {
        *self.slot() = None;
        Ok(())
    }
}
