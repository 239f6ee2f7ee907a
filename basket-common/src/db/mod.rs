//! Database access layer
//!
//! Basket keeps a single `settings` key-value table; the shopping list is
//! one row in it (see [`crate::persistence::SettingsPersistence`]).

pub mod init;

pub use init::init_database;
