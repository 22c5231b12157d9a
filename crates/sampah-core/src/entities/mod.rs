//! Entity structs for sampah domain objects.
//!
//! Entities that travel over the wire derive `Serialize`/`Deserialize` with
//! the backend's field names; all of them derive `JsonSchema` for schema
//! checks in tests.

mod account;
mod bank_sampah;
mod biopori;
mod education;

pub use account::{Login, Registration};
pub use bank_sampah::{BankSampahLocation, SaleRequest};
pub use biopori::{BioporiDraft, BioporiPayload, BioporiRecord};
pub use education::EducationItem;
