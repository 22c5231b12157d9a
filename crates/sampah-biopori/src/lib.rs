//! # sampah-biopori
//!
//! Client-side state for biopori holes:
//! - [`Directory`]: cached listing, search, refresh, and the
//!   `Active → Full → Harvested` transitions
//! - [`BioporiForm`]: create/edit form with validation and the derived
//!   60-day end date
//!
//! Both are generic over [`sampah_client::BioporiApi`] and read the
//! credential from a shared [`sampah_auth::Session`].

pub mod directory;
mod error;
pub mod form;
mod guard;

pub use directory::{Directory, Refresh};
pub use error::BioporiError;
pub use form::{BioporiForm, FormMode, FormValues};
