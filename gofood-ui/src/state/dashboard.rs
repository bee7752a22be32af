//! Dashboard State
//!
//! Everything the dashboard owns: the cached foods list, the edit target and
//! the two modal flags. Mutations here are synchronous and never do I/O; the
//! async side lives in [`crate::state::actions`].

use leptos::*;

use crate::state::food::{EditingFood, Food, FoodId, FoodPatch};

/// View state of the dashboard page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    /// Client copy of the server collection, in fetch/insertion order
    pub foods: Vec<Food>,
    /// Record loaded into the edit form; `None` until an edit begins
    pub editing: Option<EditingFood>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
}

impl DashboardState {
    /// Replace the whole list with a fresh server copy
    pub fn replace_all(&mut self, foods: Vec<Food>) {
        self.foods = foods;
    }

    /// Add a record created by the server.
    ///
    /// An id that is already cached is replaced in place so the list never
    /// holds two entries with the same id.
    pub fn append(&mut self, food: Food) {
        if !self.replace(food.clone()) {
            self.foods.push(food);
        }
    }

    /// Swap in the record whose id matches `food.id`. Returns false if absent.
    pub fn replace(&mut self, food: Food) -> bool {
        match self.foods.iter_mut().find(|f| f.id == food.id) {
            Some(slot) => {
                *slot = food;
                true
            }
            None => false,
        }
    }

    /// Drop every entry with the given id, returning how many were removed
    pub fn remove(&mut self, id: FoodId) -> usize {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        before - self.foods.len()
    }

    /// Load a record into the edit form and open it
    pub fn begin_edit(&mut self, food: EditingFood) {
        self.editing = Some(food);
        self.edit_modal_open = true;
    }

    /// Body of the next update request, or `None` when no edit has begun
    pub fn update_request(&self, patch: FoodPatch) -> Option<EditingFood> {
        self.editing.as_ref().map(|editing| editing.merged(patch))
    }

    pub fn toggle_add_modal(&mut self) {
        self.add_modal_open = !self.add_modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }
}

/// Access to dashboard state that may outlive its view.
///
/// Async actions resume after the page may have been unmounted, so every
/// access can fail; `None` means the state is gone and nothing was applied.
pub trait StateHandle {
    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R>;

    fn apply<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R>;
}

impl StateHandle for RwSignal<DashboardState> {
    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn apply<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        self.try_update(f)
    }
}
