//! Database initialization and on-disk persistence of the shopping list

use std::sync::Arc;

use basket_common::db::init_database;
use basket_common::model::{RawIngredient, RecipeListEntry};
use basket_common::persistence::SHOPPING_LIST_KEY;
use basket_common::{ListPersistence, SettingsPersistence, ShoppingListStore};

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("data").join("basket.db");

    let pool = init_database(&db_path).await;

    assert!(pool.is_ok(), "Database initialization failed: {:?}", pool.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("basket.db");

    let pool1 = init_database(&db_path).await.unwrap();
    pool1.close().await;

    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());
}

#[tokio::test]
async fn test_settings_table_exists() {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&dir.path().join("basket.db")).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM settings")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_shopping_list_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("basket.db");

    {
        let pool = init_database(&db_path).await.unwrap();
        let mut store = ShoppingListStore::load(Arc::new(SettingsPersistence::new(pool.clone()))).await;
        store
            .add_recipe(RecipeListEntry::new(
                "shakshuka",
                "Shakshuka",
                vec![
                    RawIngredient::new("Eggs").with_amount("4", ""),
                    RawIngredient::new("Cumin").with_amount("1", "tsp"),
                ],
            ))
            .await;
        store.remove_ingredient_from_recipe("cumin", "shakshuka").await;
        pool.close().await;
    }

    let pool = init_database(&db_path).await.unwrap();
    let store = ShoppingListStore::load(Arc::new(SettingsPersistence::new(pool))).await;

    let rows = store.consolidated();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Eggs");
    assert_eq!(store.recipe("shakshuka").unwrap().ingredients.len(), 1);
}

#[tokio::test]
async fn test_corrupt_row_loads_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&dir.path().join("basket.db")).await.unwrap();
    let persistence = Arc::new(SettingsPersistence::new(pool));
    persistence.write(SHOPPING_LIST_KEY, "[{\"recipeSlug\": 42").await.unwrap();

    let mut store = ShoppingListStore::load(persistence.clone()).await;
    assert!(store.is_empty());

    store
        .add_recipe(RecipeListEntry::new("tea", "Tea", vec![RawIngredient::new("Tea bags")]))
        .await;

    let blob = persistence.read(SHOPPING_LIST_KEY).await.unwrap().unwrap();
    let saved: Vec<RecipeListEntry> = serde_json::from_str(&blob).unwrap();
    assert_eq!(saved.len(), 1);
}
