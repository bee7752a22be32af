//! Core data types for the food catalog
//!
//! - `Food`: A menu item as stored and served
//! - `NewFoodRecord`: Body of a create request (no id yet)
//! - `FoodUpdate`: Body of a replace request

use serde::{Deserialize, Serialize};

use crate::store::error::{StoreError, StoreResult};

/// Server-assigned food identifier
pub type FoodId = u64;

/// Maximum accepted length for a food name
pub const MAX_NAME_LEN: usize = 120;

/// A single menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    /// Unique identifier, assigned on creation
    pub id: FoodId,
    pub name: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// Whether the item can currently be ordered
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Food fields accepted when creating a record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewFoodRecord {
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub available: Option<bool>,
}

impl NewFoodRecord {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            image: String::new(),
            price,
            description: String::new(),
            available: None,
        }
    }

    /// Builder method: set image URL
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Builder method: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method: set availability
    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Turn into a stored record with the given id
    pub fn into_food(self, id: FoodId) -> Food {
        Food {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available: self.available.unwrap_or(true),
        }
    }

    pub fn validate(&self) -> StoreResult<()> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

/// Replacement body for an existing record
///
/// Clients that never see `available` (the edit form) send it absent; the
/// stored value is kept in that case. Any `id` in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FoodId>,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub available: Option<bool>,
}

impl FoodUpdate {
    pub fn validate(&self) -> StoreResult<()> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }

    /// Apply onto an existing record, keeping its id
    pub fn apply_to(self, existing: &Food) -> Food {
        Food {
            id: existing.id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available: self.available.unwrap_or(existing.available),
        }
    }
}

fn validate_name(name: &str) -> StoreResult<()> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("name cannot be empty".to_string()));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(StoreError::Validation(format!(
            "name exceeds maximum length of {} characters",
            MAX_NAME_LEN
        )));
    }

    Ok(())
}

fn validate_price(price: f64) -> StoreResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(StoreError::Validation(format!(
            "price must be a non-negative number, got {}",
            price
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_food_defaults_to_available() {
        let food = NewFoodRecord::new("Ao molho", 19.9).into_food(1);
        assert!(food.available);
        assert_eq!(food.id, 1);
    }

    #[test]
    fn test_update_keeps_availability_when_absent() {
        let existing = NewFoodRecord::new("Veggie", 21.9)
            .available(false)
            .into_food(4);

        let update: FoodUpdate = serde_json::from_str(
            r#"{"id": 99, "name": "Veggie Deluxe", "image": "", "price": 24.5, "description": ""}"#,
        )
        .unwrap();

        let updated = update.apply_to(&existing);
        assert_eq!(updated.id, 4);
        assert_eq!(updated.name, "Veggie Deluxe");
        assert!(!updated.available);
    }

    #[test]
    fn test_validation() {
        assert!(NewFoodRecord::new("Pizza", 0.0).validate().is_ok());
        assert!(NewFoodRecord::new("   ", 10.0).validate().is_err());
        assert!(NewFoodRecord::new("Pizza", -1.0).validate().is_err());
        assert!(NewFoodRecord::new("Pizza", f64::NAN).validate().is_err());
        assert!(NewFoodRecord::new("x".repeat(MAX_NAME_LEN + 1), 1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_food_deserialize_defaults() {
        let food: Food = serde_json::from_str(r#"{"id": 2, "name": "Massa", "price": 12}"#).unwrap();
        assert!(food.available);
        assert!(food.image.is_empty());
        assert_eq!(food.price, 12.0);
    }
}
