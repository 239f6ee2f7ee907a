//! Shopping list data model
//!
//! Raw records (`RecipeListEntry`, `RawIngredient`) are what the store holds
//! and persists. `ConsolidatedIngredient` and the view types are derived on
//! every read and never persisted.
//!
//! All types use camelCase field names on the wire so the persisted blob and
//! the HTTP payloads share one format.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One ingredient line as authored in a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIngredient {
    /// Display name (not normalized)
    pub name: String,
    /// Free-text amount such as "250" or "1/2"; may be empty
    #[serde(default)]
    pub quantity: String,
    /// Unit such as "g" or "tbsp"; may be empty
    #[serde(default)]
    pub unit: String,
    /// Optional qualifier such as "softened" or "to taste"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RawIngredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: String::new(),
            unit: String::new(),
            notes: None,
        }
    }

    pub fn with_amount(mut self, quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self.unit = unit.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Normalized identity key of this ingredient
    pub fn identity(&self) -> String {
        normalize_name(&self.name)
    }

    /// True if this ingredient has the same identity as `name`
    pub fn matches(&self, name: &str) -> bool {
        self.identity() == normalize_name(name)
    }
}

/// One recipe currently on the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeListEntry {
    pub recipe_slug: String,
    pub recipe_title: String,
    #[serde(default)]
    pub ingredients: Vec<RawIngredient>,
}

impl RecipeListEntry {
    pub fn new(
        recipe_slug: impl Into<String>,
        recipe_title: impl Into<String>,
        ingredients: Vec<RawIngredient>,
    ) -> Self {
        Self {
            recipe_slug: recipe_slug.into(),
            recipe_title: recipe_title.into(),
            ingredients,
        }
    }

    /// Reject entries the store cannot key or group
    ///
    /// The store itself accepts anything; callers at the input boundary
    /// check entries here first.
    pub fn validate(&self) -> Result<()> {
        if self.recipe_slug.trim().is_empty() {
            return Err(Error::InvalidInput("recipeSlug must not be empty".to_string()));
        }
        if let Some(pos) = self.ingredients.iter().position(|i| i.name.trim().is_empty()) {
            return Err(Error::InvalidInput(format!(
                "ingredient #{} of '{}' has an empty name",
                pos + 1,
                self.recipe_slug
            )));
        }
        Ok(())
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            recipe_slug: self.recipe_slug.clone(),
            recipe_title: self.recipe_title.clone(),
            ingredient_count: self.ingredients.len(),
        }
    }
}

/// One contributing occurrence inside a consolidated row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityEntry {
    pub quantity: String,
    pub unit: String,
    /// Title of the recipe this occurrence belongs to
    pub from: String,
    pub recipe_slug: String,
}

/// One display row per ingredient identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedIngredient {
    /// First-seen spelling of the name
    pub name: String,
    pub quantities: Vec<QuantityEntry>,
    pub notes: Vec<String>,
}

/// Per-recipe row for the recipe list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub recipe_slug: String,
    pub recipe_title: String,
    pub ingredient_count: usize,
}

/// Everything the shopping-list page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListView {
    pub recipes: Vec<RecipeSummary>,
    pub items: Vec<ConsolidatedIngredient>,
}

/// Identity key: trimmed and case-folded
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name_trims_and_folds_case() {
        assert_eq!(normalize_name("  Garlic "), "garlic");
        assert_eq!(normalize_name("OLIVE oil"), "olive oil");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_matches_ignores_case_and_whitespace() {
        let salt = RawIngredient::new("Sea Salt");
        assert!(salt.matches("sea salt"));
        assert!(salt.matches("  SEA SALT\t"));
        assert!(!salt.matches("salt"));
    }

    #[test]
    fn test_deserialize_sparse_ingredient() {
        let json = r#"{ "name": "salt", "notes": "to taste" }"#;
        let ingredient: RawIngredient = serde_json::from_str(json).unwrap();

        assert_eq!(ingredient.name, "salt");
        assert!(ingredient.quantity.is_empty());
        assert!(ingredient.unit.is_empty());
        assert_eq!(ingredient.notes.as_deref(), Some("to taste"));
    }

    #[test]
    fn test_entry_uses_camel_case_fields() {
        let entry = RecipeListEntry::new("pesto", "Basil Pesto", vec![RawIngredient::new("Basil")]);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["recipeSlug"], "pesto");
        assert_eq!(value["recipeTitle"], "Basil Pesto");
        assert_eq!(value["ingredients"][0]["name"], "Basil");
        assert!(value["ingredients"][0].get("notes").is_none());
    }

    #[test]
    fn test_validate_rejects_blank_slug() {
        let entry = RecipeListEntry::new("  ", "Untitled", vec![]);
        assert!(matches!(entry.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_blank_ingredient_name() {
        let entry = RecipeListEntry::new(
            "soup",
            "Soup",
            vec![RawIngredient::new("Leek"), RawIngredient::new("   ")],
        );
        let err = entry.validate().unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_validate_accepts_empty_ingredient_list() {
        let entry = RecipeListEntry::new("toast", "Toast", vec![]);
        assert!(entry.validate().is_ok());
    }
}
