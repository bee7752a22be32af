//! # GoFood
//!
//! Food catalog backend for the GoFood dashboard: a small REST service over a
//! `foods` collection persisted as a JSON document.
//!
//! ## Modules
//!
//! - [`store`]: Food catalog with JSON file persistence
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gofood::store::{FoodCatalog, NewFoodRecord, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = FoodCatalog::open(StoreConfig::new("./gofood_data")).await?;
//!
//!     catalog.create(NewFoodRecord::new("Ao molho", 19.9)).await?;
//!
//!     for food in catalog.list().await {
//!         println!("#{} {} ({:.2})", food.id, food.name, food.price);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use store::{Food, FoodCatalog, FoodId, FoodUpdate, NewFoodRecord, StoreConfig, StoreError, StoreResult};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
