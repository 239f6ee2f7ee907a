//! # Basket Common Library
//!
//! Shopping-list core shared by the Basket service:
//! - Recipe/ingredient data model
//! - Consolidation of ingredient occurrences into one checklist
//! - The shopping list store and its mutation operations
//! - Persistence backends (SQLite settings table, in-memory)
//! - Configuration loading and database initialization

pub mod config;
pub mod consolidate;
pub mod db;
pub mod error;
pub mod model;
pub mod mutations;
pub mod persistence;
pub mod render;
pub mod store;

pub use consolidate::consolidate;
pub use error::{Error, Result};
pub use model::{
    ConsolidatedIngredient, QuantityEntry, RawIngredient, RecipeListEntry, RecipeSummary,
    ShoppingListView,
};
pub use persistence::{ListPersistence, MemoryPersistence, SettingsPersistence};
pub use store::ShoppingListStore;
