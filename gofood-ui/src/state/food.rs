//! Food Records
//!
//! Types exchanged with the `/foods` API and passed between the dashboard
//! and its child components.

use serde::{Deserialize, Serialize};

/// Server-assigned food identifier
pub type FoodId = u64;

/// A menu item as served by the API
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// The record loaded into the edit form: a food without `available`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct EditingFood {
    pub id: FoodId,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub description: String,
}

impl From<&Food> for EditingFood {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id,
            name: food.name.clone(),
            image: food.image.clone(),
            price: food.price,
            description: food.description.clone(),
        }
    }
}

impl EditingFood {
    /// Shallow merge: fields present in `patch` win, absent ones keep the
    /// stored value. The id is never patched.
    pub fn merged(&self, patch: FoodPatch) -> EditingFood {
        EditingFood {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            image: patch.image.unwrap_or_else(|| self.image.clone()),
            price: patch.price.unwrap_or(self.price),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
        }
    }
}

/// Fields submitted by the add form; the server assigns the id
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct NewFood {
    pub name: String,
    pub image: String,
    pub price: f64,
    pub description: String,
}

/// Fields submitted by the edit form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}
