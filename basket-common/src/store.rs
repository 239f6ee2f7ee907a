//! Shopping list store
//!
//! Owns the recipes currently on the list and writes the whole list back to
//! its persistence backend after every change. Persistence problems never
//! reach the caller:
//! - a missing, unreadable or unparseable saved list loads as an empty list
//! - a failed write is logged and the in-memory list stays authoritative
//!   for the rest of the session
//!
//! The consolidated view is not cached; [`ShoppingListStore::consolidated`]
//! recomputes it from the raw entries on every call.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::consolidate::consolidate;
use crate::model::{ConsolidatedIngredient, RecipeListEntry, RecipeSummary, ShoppingListView};
use crate::persistence::{ListPersistence, SHOPPING_LIST_KEY};

/// The user's shopping list
pub struct ShoppingListStore {
    entries: Vec<RecipeListEntry>,
    persistence: Arc<dyn ListPersistence>,
    degraded: bool,
}

impl ShoppingListStore {
    /// Restore the saved list, or start empty if there is nothing usable
    pub async fn load(persistence: Arc<dyn ListPersistence>) -> Self {
        let backend = persistence.backend_name();

        let entries = match persistence.read(SHOPPING_LIST_KEY).await {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<RecipeListEntry>>(&blob) {
                Ok(entries) => {
                    info!(
                        "Restored shopping list with {} recipe(s) from {} backend",
                        entries.len(),
                        backend
                    );
                    entries
                }
                Err(e) => {
                    warn!("Saved shopping list is unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No saved shopping list in {} backend", backend);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read saved shopping list, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            entries,
            persistence,
            degraded: false,
        }
    }

    /// Put a recipe on the list, replacing any entry with the same slug
    ///
    /// A replaced entry keeps its position in the list, so consolidated rows
    /// do not jump around when a recipe is re-added.
    pub async fn add_recipe(&mut self, entry: RecipeListEntry) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.recipe_slug == entry.recipe_slug)
        {
            Some(existing) => {
                debug!("Replacing recipe '{}' on shopping list", entry.recipe_slug);
                *existing = entry;
            }
            None => {
                debug!("Adding recipe '{}' to shopping list", entry.recipe_slug);
                self.entries.push(entry);
            }
        }
        self.persist().await;
    }

    /// Drop a recipe and all of its ingredients; returns false if it was not listed
    pub async fn remove_recipe(&mut self, recipe_slug: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.recipe_slug != recipe_slug);
        if self.entries.len() == before {
            return false;
        }
        debug!("Removed recipe '{}' from shopping list", recipe_slug);
        self.persist().await;
        true
    }

    /// Empty the list; returns false if it was already empty
    pub async fn clear_all(&mut self) -> bool {
        let had_entries = !self.entries.is_empty();
        self.entries.clear();
        // Persist even when already empty
        self.persist().await;
        had_entries
    }

    pub fn entries(&self) -> &[RecipeListEntry] {
        &self.entries
    }

    pub fn recipe(&self, recipe_slug: &str) -> Option<&RecipeListEntry> {
        self.entries.iter().find(|e| e.recipe_slug == recipe_slug)
    }

    pub fn contains(&self, recipe_slug: &str) -> bool {
        self.recipe(recipe_slug).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True while the last write to persistence failed
    pub fn is_persistence_degraded(&self) -> bool {
        self.degraded
    }

    pub fn recipe_summaries(&self) -> Vec<RecipeSummary> {
        self.entries.iter().map(RecipeListEntry::summary).collect()
    }

    /// Recompute the consolidated rows from the current entries
    pub fn consolidated(&self) -> Vec<ConsolidatedIngredient> {
        consolidate(&self.entries)
    }

    pub fn view(&self) -> ShoppingListView {
        ShoppingListView {
            recipes: self.recipe_summaries(),
            items: self.consolidated(),
        }
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<RecipeListEntry> {
        &mut self.entries
    }

    /// Write the whole list back; failures only flip the degraded flag
    pub(crate) async fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.entries) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Failed to serialize shopping list, keeping it in memory only: {}", e);
                self.degraded = true;
                return;
            }
        };

        match self.persistence.write(SHOPPING_LIST_KEY, &blob).await {
            Ok(()) => {
                if self.degraded {
                    info!("Shopping list persistence recovered");
                }
                self.degraded = false;
            }
            Err(e) => {
                warn!(
                    "Failed to save shopping list to {} backend, keeping it in memory only: {}",
                    self.persistence.backend_name(),
                    e
                );
                self.degraded = true;
            }
        }
    }
}
