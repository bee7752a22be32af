//! Food Catalog
//!
//! The catalog keeps every food in memory, in insertion order, and writes the
//! whole collection back to a single JSON document after each mutation:
//!
//! ```text
//! <data_dir>/db.json
//! { "foods": [ { "id": 1, "name": ..., "available": true }, ... ] }
//! ```
//!
//! Thread-safe via Tokio's async RwLock for concurrent access.

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{Food, FoodId, FoodUpdate, NewFoodRecord};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Configuration for the catalog store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the database file
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("gofood_data"),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the JSON database file
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("db.json")
    }
}

/// On-disk layout of the database file
#[derive(Debug, Default, Serialize, Deserialize)]
struct Database {
    #[serde(default)]
    foods: Vec<Food>,
}

/// Persistent collection of foods
pub struct FoodCatalog {
    config: StoreConfig,
    foods: RwLock<Vec<Food>>,
}

impl FoodCatalog {
    /// Open the catalog, loading `db.json` if it exists
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let db_path = config.db_path();
        let foods = if db_path.exists() {
            let content = std::fs::read_to_string(&db_path)?;
            let db: Database = serde_json::from_str(&content)?;
            tracing::info!(path = ?db_path, count = db.foods.len(), "Loaded food catalog");
            db.foods
        } else {
            tracing::info!(path = ?db_path, "No database file found, starting empty");
            Vec::new()
        };

        Ok(Self {
            config,
            foods: RwLock::new(foods),
        })
    }

    /// All foods in insertion order
    pub async fn list(&self) -> Vec<Food> {
        self.foods.read().await.clone()
    }

    /// Look up a single food
    pub async fn get(&self, id: FoodId) -> StoreResult<Food> {
        self.foods
            .read()
            .await
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Number of stored foods
    pub async fn len(&self) -> usize {
        self.foods.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.foods.read().await.is_empty()
    }

    /// Append a new food, assigning the next id
    pub async fn create(&self, record: NewFoodRecord) -> StoreResult<Food> {
        record.validate()?;

        let mut foods = self.foods.write().await;
        let id = next_id(&foods);
        let food = record.into_food(id);

        let mut staged = foods.clone();
        staged.push(food.clone());
        self.persist(&staged)?;
        *foods = staged;

        tracing::debug!(food_id = id, name = %food.name, "Created food");
        Ok(food)
    }

    /// Replace an existing food in place
    pub async fn replace(&self, id: FoodId, update: FoodUpdate) -> StoreResult<Food> {
        update.validate()?;

        let mut foods = self.foods.write().await;
        let index = foods
            .iter()
            .position(|f| f.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(body_id) = update.id {
            if body_id != id {
                tracing::warn!(food_id = id, body_id, "Ignoring mismatched id in update body");
            }
        }

        let updated = update.apply_to(&foods[index]);

        let mut staged = foods.clone();
        staged[index] = updated.clone();
        self.persist(&staged)?;
        *foods = staged;

        tracing::debug!(food_id = id, "Replaced food");
        Ok(updated)
    }

    /// Remove a food, returning the removed record
    pub async fn delete(&self, id: FoodId) -> StoreResult<Food> {
        let mut foods = self.foods.write().await;
        let index = foods
            .iter()
            .position(|f| f.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut staged = foods.clone();
        let removed = staged.remove(index);
        self.persist(&staged)?;
        *foods = staged;

        tracing::debug!(food_id = id, "Deleted food");
        Ok(removed)
    }

    /// Fill an empty catalog with the demo menu. Returns how many were added.
    pub async fn seed(&self) -> StoreResult<usize> {
        let mut foods = self.foods.write().await;
        if !foods.is_empty() {
            return Ok(0);
        }

        let mut staged = Vec::new();
        for record in demo_menu() {
            let id = next_id(&staged);
            staged.push(record.into_food(id));
        }
        self.persist(&staged)?;
        *foods = staged;

        tracing::info!(count = foods.len(), "Seeded food catalog");
        Ok(foods.len())
    }

    /// Directory holding the database file
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Write the collection to disk (temp file + rename)
    fn persist(&self, foods: &[Food]) -> StoreResult<()> {
        #[derive(Serialize)]
        struct DatabaseRef<'a> {
            foods: &'a [Food],
        }

        let path = self.config.db_path();
        let tmp_path = path.with_extension("json.tmp");

        let content = serde_json::to_string_pretty(&DatabaseRef { foods })?;
        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &path)?;

        Ok(())
    }
}

fn next_id(foods: &[Food]) -> FoodId {
    foods.iter().map(|f| f.id).max().unwrap_or(0) + 1
}

fn demo_menu() -> Vec<NewFoodRecord> {
    vec![
        NewFoodRecord::new("Ao molho", 19.9)
            .image("https://storage.googleapis.com/golden-wind/bootcamp-gostack/desafio-food/food1.png")
            .description("Macarrão ao molho branco, fughi e cheiro verde das montanhas."),
        NewFoodRecord::new("Veggie", 21.9)
            .image("https://storage.googleapis.com/golden-wind/bootcamp-gostack/desafio-food/food2.png")
            .description("Macarrão com pimentão, ervilha e ervas finas colhidas no himalaia."),
        NewFoodRecord::new("A la Camarón", 25.9)
            .image("https://storage.googleapis.com/golden-wind/bootcamp-gostack/desafio-food/food3.png")
            .description("Macarrão com vegetais de primeira linha e camarão dos 7 mares."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn create_test_catalog() -> (FoodCatalog, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let catalog = FoodCatalog::open(StoreConfig::new(dir.path())).await.unwrap();
        (catalog, dir)
    }

    fn update(name: &str, price: f64) -> FoodUpdate {
        FoodUpdate {
            id: None,
            name: name.to_string(),
            image: String::new(),
            price,
            description: String::new(),
            available: None,
        }
    }

    #[tokio::test]
    async fn test_open_empty() {
        let (catalog, _dir) = create_test_catalog().await;
        assert!(catalog.is_empty().await);
        assert!(catalog.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let (catalog, _dir) = create_test_catalog().await;

        let a = catalog.create(NewFoodRecord::new("A", 1.0)).await.unwrap();
        let b = catalog.create(NewFoodRecord::new("B", 2.0)).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(a.available);

        let names: Vec<_> = catalog.list().await.into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete_of_middle() {
        let (catalog, _dir) = create_test_catalog().await;

        for name in ["A", "B", "C"] {
            catalog.create(NewFoodRecord::new(name, 1.0)).await.unwrap();
        }
        catalog.delete(2).await.unwrap();

        let d = catalog.create(NewFoodRecord::new("D", 1.0)).await.unwrap();
        assert_eq!(d.id, 4);
    }

    #[tokio::test]
    async fn test_replace_preserves_order_and_availability() {
        let (catalog, _dir) = create_test_catalog().await;

        catalog.create(NewFoodRecord::new("A", 1.0)).await.unwrap();
        catalog
            .create(NewFoodRecord::new("B", 2.0).available(false))
            .await
            .unwrap();
        catalog.create(NewFoodRecord::new("C", 3.0)).await.unwrap();

        let updated = catalog.replace(2, update("B2", 2.5)).await.unwrap();
        assert_eq!(updated.id, 2);
        assert!(!updated.available);

        let foods = catalog.list().await;
        assert_eq!(foods.len(), 3);
        assert_eq!(foods[1].name, "B2");
        assert_eq!(foods[0].name, "A");
        assert_eq!(foods[2].name, "C");
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let (catalog, _dir) = create_test_catalog().await;

        assert!(matches!(catalog.get(9).await, Err(StoreError::NotFound(9))));
        assert!(matches!(
            catalog.replace(9, update("X", 1.0)).await,
            Err(StoreError::NotFound(9))
        ));
        assert!(matches!(catalog.delete(9).await, Err(StoreError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_invalid_record_rejected() {
        let (catalog, _dir) = create_test_catalog().await;

        let result = catalog.create(NewFoodRecord::new("", 1.0)).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(catalog.is_empty().await);
    }

    #[tokio::test]
    async fn test_persistence_across_reopen() {
        let dir = tempdir().unwrap();

        {
            let catalog = FoodCatalog::open(StoreConfig::new(dir.path())).await.unwrap();
            catalog.create(NewFoodRecord::new("A", 1.0)).await.unwrap();
            catalog.create(NewFoodRecord::new("B", 2.0)).await.unwrap();
            catalog.delete(1).await.unwrap();
        }

        let catalog = FoodCatalog::open(StoreConfig::new(dir.path())).await.unwrap();
        let foods = catalog.list().await;
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].id, 2);
        assert_eq!(foods[0].name, "B");
    }

    #[tokio::test]
    async fn test_failed_write_leaves_catalog_unchanged() {
        let (catalog, dir) = create_test_catalog().await;
        catalog.create(NewFoodRecord::new("A", 1.0)).await.unwrap();
        let before = catalog.list().await;

        // A directory in the temp file's place makes every write fail
        std::fs::create_dir(dir.path().join("db.json.tmp")).unwrap();

        assert!(matches!(
            catalog.create(NewFoodRecord::new("B", 2.0)).await,
            Err(StoreError::Io(_))
        ));
        assert_eq!(catalog.list().await, before);

        assert!(catalog.replace(1, update("A2", 5.0)).await.is_err());
        assert_eq!(catalog.list().await, before);

        assert!(catalog.delete(1).await.is_err());
        assert_eq!(catalog.list().await, before);

        // The id sequence did not move either
        std::fs::remove_dir(dir.path().join("db.json.tmp")).unwrap();
        let b = catalog.create(NewFoodRecord::new("B", 2.0)).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_failed_seed_leaves_catalog_empty() {
        let (catalog, dir) = create_test_catalog().await;
        std::fs::create_dir(dir.path().join("db.json.tmp")).unwrap();

        assert!(catalog.seed().await.is_err());
        assert!(catalog.is_empty().await);
    }

    #[tokio::test]
    async fn test_seed_only_fills_empty_catalog() {
        let (catalog, _dir) = create_test_catalog().await;

        let added = catalog.seed().await.unwrap();
        assert_eq!(added, 3);
        assert_eq!(catalog.seed().await.unwrap(), 0);
        assert_eq!(catalog.len().await, 3);
    }
}
