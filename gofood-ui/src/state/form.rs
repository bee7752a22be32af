//! Food Form
//!
//! Raw text of the add/edit form fields and their conversion into request
//! payloads.

use thiserror::Error;

use crate::state::food::{EditingFood, FoodPatch, NewFood};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,

    #[error("Price must be a non-negative number, got '{0}'")]
    InvalidPrice(String),
}

/// Text currently typed into the food form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoodForm {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl FoodForm {
    /// Prefill from the record being edited
    pub fn from_editing(food: &EditingFood) -> Self {
        Self {
            image: food.image.clone(),
            name: food.name.clone(),
            price: format_price(food.price),
            description: food.description.clone(),
        }
    }

    pub fn to_new_food(&self) -> Result<NewFood, FormError> {
        Ok(NewFood {
            name: self.checked_name()?,
            image: self.image.trim().to_string(),
            price: self.parsed_price()?,
            description: self.description.trim().to_string(),
        })
    }

    /// Every form field is submitted; the dashboard merges it over the edit target
    pub fn to_patch(&self) -> Result<FoodPatch, FormError> {
        Ok(FoodPatch {
            name: Some(self.checked_name()?),
            image: Some(self.image.trim().to_string()),
            price: Some(self.parsed_price()?),
            description: Some(self.description.trim().to_string()),
        })
    }

    fn checked_name(&self) -> Result<String, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        Ok(name.to_string())
    }

    /// Accepts `19.90` as well as `19,90`
    fn parsed_price(&self) -> Result<f64, FormError> {
        let raw = self.price.trim();
        raw.replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| FormError::InvalidPrice(raw.to_string()))
    }
}

/// Price as shown on cards and in the edit form
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FoodForm {
        FoodForm {
            image: " https://img/a.png ".to_string(),
            name: " Ao molho ".to_string(),
            price: "19,90".to_string(),
            description: "Pasta".to_string(),
        }
    }

    #[test]
    fn test_to_new_food() {
        let food = filled().to_new_food().unwrap();
        assert_eq!(food.name, "Ao molho");
        assert_eq!(food.image, "https://img/a.png");
        assert_eq!(food.price, 19.9);
    }

    #[test]
    fn test_missing_name() {
        let form = FoodForm {
            name: "   ".to_string(),
            ..filled()
        };
        assert_eq!(form.to_new_food(), Err(FormError::MissingName));
    }

    #[test]
    fn test_invalid_price() {
        for price in ["", "abc", "-1", "inf"] {
            let form = FoodForm {
                price: price.to_string(),
                ..filled()
            };
            assert!(matches!(form.to_patch(), Err(FormError::InvalidPrice(_))), "{}", price);
        }
    }

    #[test]
    fn test_edit_prefill_round_trip() {
        let editing = EditingFood {
            id: 2,
            name: "Veggie".to_string(),
            image: "v.png".to_string(),
            price: 21.9,
            description: "Peppers".to_string(),
        };

        let form = FoodForm::from_editing(&editing);
        assert_eq!(form.price, "21.90");

        let merged = editing.merged(form.to_patch().unwrap());
        assert_eq!(merged, editing);
    }
}
