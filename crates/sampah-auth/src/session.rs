//! The session store.
//!
//! A [`Session`] owns the current credential and broadcasts every change
//! through a `watch` channel. Observers (the biopori directory, the CLI)
//! hold a receiver and drop their cached state when it turns `None`.

use std::sync::Arc;

use sampah_client::ClientError;
use sampah_core::Credential;
use tokio::sync::watch;

use crate::claims::AuthStatus;
use crate::error::AuthError;
use crate::token_store::{CredentialStore, TokenSource};

pub struct Session {
    store: Arc<dyn CredentialStore>,
    current: watch::Sender<Option<Credential>>,
    source: std::sync::Mutex<Option<TokenSource>>,
}

impl Session {
    /// Open a session seeded from whatever `store` already holds.
    #[must_use]
    pub fn open(store: Arc<dyn CredentialStore>) -> Self {
        let loaded = store.load();
        if let Some((_, source)) = &loaded {
            tracing::debug!(%source, "restored credential");
        }
        let (credential, source) = loaded.map_or((None, None), |(c, s)| (Some(c), Some(s)));
        Self {
            store,
            current: watch::Sender::new(credential),
            source: std::sync::Mutex::new(source),
        }
    }

    /// The current credential, if signed in.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.current.borrow().clone()
    }

    /// The current credential, or `Unauthenticated` so callers can bail
    /// before sending anything.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Unauthenticated` when signed out.
    pub fn require(&self) -> Result<Credential, ClientError> {
        self.credential().ok_or(ClientError::Unauthenticated)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Tier the current credential was loaded from or stored to.
    #[must_use]
    pub fn source(&self) -> Option<TokenSource> {
        *self.source_slot()
    }

    /// Persist `credential` and make it current.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if the credential cannot be persisted;
    /// the session is left unchanged.
    pub fn sign_in(&self, credential: Credential) -> Result<(), AuthError> {
        self.store.store(&credential)?;
        let source = self.store.load().map(|(_, s)| s);
        *self.source_slot() = source;
        self.current.send_replace(Some(credential));
        tracing::debug!("signed in");
        Ok(())
    }

    /// Forget the credential and notify every subscriber.
    ///
    /// Subscribers are notified even if erasing the stored copy fails.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if the stored credential could not be removed.
    pub fn logout(&self) -> Result<(), AuthError> {
        *self.source_slot() = None;
        self.current.send_replace(None);
        tracing::debug!("signed out");
        self.store.delete()
    }

    /// Receiver that observes sign-in and logout.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Credential>> {
        self.current.subscribe()
    }

    /// Summary for status displays.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        AuthStatus::describe(self.credential().as_ref(), self.source())
    }

    fn source_slot(&self) -> std::sync::MutexGuard<'_, Option<TokenSource>> {
        self.source
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("source", &self.source())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::MemoryStore;

    fn credential(token: &str) -> Credential {
        Credential::new(token).expect("non-empty")
    }

    #[test]
    fn open_restores_stored_credential() {
        let session = Session::open(Arc::new(MemoryStore::with(credential("t1"))));
        assert_eq!(session.credential(), Some(credential("t1")));
        assert_eq!(session.source(), Some(TokenSource::Memory));
    }

    #[test]
    fn require_fails_fast_when_signed_out() {
        let session = Session::open(Arc::new(MemoryStore::default()));
        assert!(session.require().unwrap_err().is_unauthenticated());
    }

    #[test]
    fn sign_in_persists_and_broadcasts() {
        let store = Arc::new(MemoryStore::default());
        let session = Session::open(store.clone());
        let rx = session.subscribe();

        session.sign_in(credential("t2")).unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow(), Some(credential("t2")));
        assert_eq!(store.load().map(|(c, _)| c), Some(credential("t2")));
    }

    #[test]
    fn logout_erases_and_notifies_every_subscriber() {
        let store = Arc::new(MemoryStore::with(credential("t3")));
        let session = Session::open(store.clone());
        let first = session.subscribe();
        let second = session.subscribe();

        session.logout().unwrap();

        for rx in [first, second] {
            assert!(rx.has_changed().unwrap());
            assert!(rx.borrow().is_none());
        }
        assert!(store.load().is_none());
        assert!(!session.is_authenticated());
        assert_eq!(session.source(), None);
    }
}
