//! GoFood Catalog Store
//!
//! Persistent storage for the `foods` collection served by the API:
//!
//! - **types**: Core data structures (Food, NewFoodRecord, FoodUpdate)
//! - **catalog**: The in-memory catalog with JSON file persistence
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use gofood::store::{FoodCatalog, NewFoodRecord, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = FoodCatalog::open(StoreConfig::new("./data")).await?;
//!
//!     let food = catalog
//!         .create(NewFoodRecord::new("Veggie", 21.9).description("Pasta with peppers"))
//!         .await?;
//!
//!     println!("Created food #{}", food.id);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{FoodCatalog, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use types::{Food, FoodId, FoodUpdate, NewFoodRecord};
