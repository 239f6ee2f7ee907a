//! Recipe and ingredient mutation endpoints
//!
//! Removals of things that are not on the list succeed as no-ops; the UI
//! never has to check existence first. Every mutation answers with the
//! recomputed shopping list view.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use basket_common::{RecipeListEntry, ShoppingListView};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/recipes
pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<RecipeListEntry>> {
    let store = state.store.lock().await;
    Json(store.entries().to_vec())
}

/// GET /api/recipes/:slug
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<RecipeListEntry>> {
    let store = state.store.lock().await;
    store
        .recipe(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("recipe '{}' is not on the shopping list", slug)))
}

/// POST /api/recipes
///
/// Adds the recipe, or replaces it if the slug is already listed.
pub async fn add_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeListEntry>, JsonRejection>,
) -> ApiResult<Json<ShoppingListView>> {
    let Json(entry) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    entry.validate()?;

    let mut store = state.store.lock().await;
    info!(
        "Adding recipe '{}' ({} ingredients) to shopping list",
        entry.recipe_slug,
        entry.ingredients.len()
    );
    store.add_recipe(entry).await;
    Ok(Json(store.view()))
}

/// DELETE /api/recipes/:slug
pub async fn remove_recipe(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<ShoppingListView> {
    let mut store = state.store.lock().await;
    if store.remove_recipe(&slug).await {
        info!("Removed recipe '{}' from shopping list", slug);
    }
    Json(store.view())
}

/// DELETE /api/recipes/:slug/ingredients/:name
pub async fn remove_ingredient_from_recipe(
    State(state): State<AppState>,
    Path((slug, name)): Path<(String, String)>,
) -> Json<ShoppingListView> {
    let mut store = state.store.lock().await;
    if store.remove_ingredient_from_recipe(&name, &slug).await {
        info!("Removed '{}' from recipe '{}'", name, slug);
    }
    Json(store.view())
}

/// DELETE /api/ingredients/:name
pub async fn remove_ingredient_globally(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<ShoppingListView> {
    let mut store = state.store.lock().await;
    if store.remove_ingredient_globally(&name).await {
        info!("Removed '{}' from every recipe", name);
    }
    Json(store.view())
}
