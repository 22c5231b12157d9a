pub mod auth;
pub mod bank;
pub mod biopori;

pub use auth::AuthCommands;
pub use bank::BankCommands;
pub use biopori::BioporiCommands;
