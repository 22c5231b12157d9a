pub mod auth;
pub mod bank;
pub mod biopori;
pub mod dispatch;
pub mod edukasi;
pub mod home;
pub mod profile;
pub mod shared;
