//! # sampah-auth
//!
//! Session state for the sampah client.
//!
//! Holds the bearer credential in a [`Session`], persists it through a
//! [`CredentialStore`] (OS keychain via `keyring`, env var, or a 0600 file),
//! and runs the login/register flows against any [`sampah_client::AccountApi`].

pub mod claims;
mod error;
pub mod flows;
mod session;
pub mod token_store;

pub use claims::AuthStatus;
pub use error::AuthError;
pub use session::Session;
pub use token_store::{CredentialStore, MemoryStore, SystemStore, TokenSource};
