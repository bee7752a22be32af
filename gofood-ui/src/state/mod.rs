//! State Management
//!
//! Food records, dashboard view state, and the async actions that keep the
//! cached list in step with the API.

pub mod actions;
pub mod dashboard;
pub mod food;
pub mod form;

pub use dashboard::{DashboardState, StateHandle};
pub use food::{EditingFood, Food, FoodId, FoodPatch, NewFood};
pub use form::{format_price, FoodForm};
