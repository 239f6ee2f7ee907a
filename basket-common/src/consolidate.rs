//! Consolidation engine
//!
//! Groups every ingredient occurrence on the list by identity (trimmed,
//! case-insensitive name) and produces one row per identity. Quantities are
//! listed side by side with their source recipe, never summed, because units
//! and forms differ between recipes.
//!
//! The engine is a pure recompute over the raw entries. Callers run it again
//! after every mutation instead of patching a cached result.

use std::collections::HashMap;

use crate::model::{normalize_name, ConsolidatedIngredient, QuantityEntry, RecipeListEntry};

/// Consolidate the raw recipe entries into the shopping-list rows
///
/// Rows appear in the order their identity was first seen while walking the
/// recipes (and each recipe's ingredients) in list order. The row name is the
/// first-seen spelling, trimmed.
pub fn consolidate(entries: &[RecipeListEntry]) -> Vec<ConsolidatedIngredient> {
    let mut rows: Vec<ConsolidatedIngredient> = Vec::new();
    // identity -> index into `rows`
    let mut index: HashMap<String, usize> = HashMap::new();
    // per-row normalized notes already taken
    let mut seen_notes: Vec<Vec<String>> = Vec::new();

    for entry in entries {
        for ingredient in &entry.ingredients {
            let identity = normalize_name(&ingredient.name);

            let row = *index.entry(identity).or_insert_with(|| {
                rows.push(ConsolidatedIngredient {
                    name: ingredient.name.trim().to_string(),
                    quantities: Vec::new(),
                    notes: Vec::new(),
                });
                seen_notes.push(Vec::new());
                rows.len() - 1
            });

            rows[row].quantities.push(QuantityEntry {
                quantity: ingredient.quantity.trim().to_string(),
                unit: ingredient.unit.trim().to_string(),
                from: entry.recipe_title.clone(),
                recipe_slug: entry.recipe_slug.clone(),
            });

            if let Some(note) = ingredient.notes.as_deref().map(str::trim) {
                if note.is_empty() {
                    continue;
                }
                let key = note.to_lowercase();
                if !seen_notes[row].contains(&key) {
                    seen_notes[row].push(key);
                    rows[row].notes.push(note.to_string());
                }
            }
        }
    }

    rows.retain(|row| !row.quantities.is_empty());
    rows
}
