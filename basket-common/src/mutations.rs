//! Ingredient removal
//!
//! Removals act on the raw per-recipe ingredient lists; the consolidated
//! view picks them up on its next recompute. Matching uses the same identity
//! rule as consolidation (trimmed, case-insensitive name). Removing something
//! that is not on the list is a no-op.

use tracing::debug;

use crate::model::{normalize_name, RawIngredient};
use crate::store::ShoppingListStore;

impl ShoppingListStore {
    /// Remove an ingredient from one recipe only
    ///
    /// The recipe stays on the list even when this empties its ingredients.
    /// Returns true if anything was removed.
    pub async fn remove_ingredient_from_recipe(&mut self, name: &str, recipe_slug: &str) -> bool {
        let identity = normalize_name(name);

        let removed = self
            .entries_mut()
            .iter_mut()
            .find(|e| e.recipe_slug == recipe_slug)
            .map(|entry| remove_matching(&mut entry.ingredients, &identity))
            .unwrap_or(0);

        if removed == 0 {
            return false;
        }
        debug!(
            "Removed {} occurrence(s) of '{}' from recipe '{}'",
            removed, identity, recipe_slug
        );
        self.persist().await;
        true
    }

    /// Remove an ingredient from every recipe on the list
    ///
    /// Returns true if anything was removed.
    pub async fn remove_ingredient_globally(&mut self, name: &str) -> bool {
        let identity = normalize_name(name);

        let removed: usize = self
            .entries_mut()
            .iter_mut()
            .map(|entry| remove_matching(&mut entry.ingredients, &identity))
            .sum();

        if removed == 0 {
            return false;
        }
        debug!("Removed {} occurrence(s) of '{}' from all recipes", removed, identity);
        self.persist().await;
        true
    }
}

/// Drop every ingredient with this identity; returns how many went
fn remove_matching(ingredients: &mut Vec<RawIngredient>, identity: &str) -> usize {
    let before = ingredients.len();
    ingredients.retain(|i| i.identity() != identity);
    before - ingredients.len()
}
