//! UI Components
//!
//! Presentation components rendered by the dashboard. They hold no catalog
//! state of their own; everything flows in through props and out through
//! callbacks.

pub mod food_card;
pub mod food_form;
pub mod header;
pub mod modal;
pub mod modal_add_food;
pub mod modal_edit_food;

pub use food_card::FoodCard;
pub use food_form::FoodFormFields;
pub use header::Header;
pub use modal::Modal;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
