//! # sampah-core
//!
//! Core types and pure domain rules for the sampah client.
//!
//! This crate provides the foundational types shared across all sampah crates:
//! - Entity structs for biopori records, bank-sampah locations, sales, and
//!   education items
//! - The biopori lifecycle status with its one-way transitions
//! - The 60-day schedule derivation for biopori end dates
//! - Wire-format helpers for the backend's date, time, and id encodings
//! - The bearer credential newtype
//! - Cross-cutting error types
//! - CLI response types

pub mod catalog;
pub mod credential;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod greeting;
pub mod responses;
pub mod schedule;
pub mod wire;

pub use credential::Credential;
pub use errors::CoreError;
