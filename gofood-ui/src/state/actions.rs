//! Dashboard Actions
//!
//! The four remote operations of the dashboard. Each performs one request and
//! only then patches the cached list, so a failed request never leaves local
//! state ahead of the server.
//!
//! Every failure is handled the same way: logged, state left untouched.

use crate::api::{FoodsClient, Transport};
use crate::state::{FoodId, FoodPatch, NewFood, StateHandle};

/// Fetch the whole collection and replace the cached list
pub async fn load_foods<T: Transport>(client: &FoodsClient<T>, state: &impl StateHandle) {
    match client.list_foods().await {
        Ok(foods) => {
            log::debug!("Loaded {} foods", foods.len());
            apply_or_log(state.apply(|s| s.replace_all(foods)), "load");
        }
        Err(e) => log::error!("Failed to load foods: {}", e),
    }
}

/// Create a food (always available) and append the server's record
pub async fn add_food<T: Transport>(
    client: &FoodsClient<T>,
    state: &impl StateHandle,
    food: NewFood,
) {
    match client.create_food(&food).await {
        Ok(created) => {
            log::debug!("Created food {}", created.id);
            apply_or_log(state.apply(|s| s.append(created)), "add");
        }
        Err(e) => log::error!("Failed to add food '{}': {}", food.name, e),
    }
}

/// Send the edit target merged with `patch` and swap in the server's record
pub async fn update_food<T: Transport>(
    client: &FoodsClient<T>,
    state: &impl StateHandle,
    patch: FoodPatch,
) {
    let Some(request) = state.read(|s| s.update_request(patch)).flatten() else {
        log::warn!("Update requested with no food being edited");
        return;
    };

    match client.update_food(&request).await {
        Ok(updated) => {
            let id = updated.id;
            match state.apply(|s| s.replace(updated)) {
                Some(true) => log::debug!("Updated food {}", id),
                Some(false) => log::warn!("Updated food {} is no longer listed", id),
                None => log::debug!("Dashboard gone, dropping update result"),
            }
        }
        Err(e) => log::error!("Failed to update food {}: {}", request.id, e),
    }
}

/// Delete a food and drop it from the cached list
pub async fn delete_food<T: Transport>(
    client: &FoodsClient<T>,
    state: &impl StateHandle,
    id: FoodId,
) {
    match client.delete_food(id).await {
        Ok(()) => {
            log::debug!("Deleted food {}", id);
            apply_or_log(state.apply(|s| s.remove(id)), "delete");
        }
        Err(e) => log::error!("Failed to delete food {}: {}", id, e),
    }
}

fn apply_or_log<R>(applied: Option<R>, action: &str) {
    if applied.is_none() {
        log::debug!("Dashboard gone, dropping {} result", action);
    }
}
