//! Foods API Client
//!
//! Typed calls against the `/foods` collection, on top of any [`Transport`].

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::api::transport::Transport;
use crate::state::food::{EditingFood, Food, FoodId, NewFood};

/// Errors surfaced by API calls
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request body could not be built
    #[error("Request build error: {0}")]
    Encode(String),

    /// The response body did not have the expected shape
    #[error("Parse error: {0}")]
    Decode(String),
}

/// Create body: the submitted fields with `available` forced on
#[derive(Serialize)]
struct CreateFoodRequest<'a> {
    #[serde(flatten)]
    food: &'a NewFood,
    available: bool,
}

/// Client for the `foods` resource
pub struct FoodsClient<T> {
    transport: T,
}

impl<T: Transport> FoodsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET /foods
    pub async fn list_foods(&self) -> Result<Vec<Food>, ClientError> {
        let body = self.transport.get("/foods").await?;
        decode(body)
    }

    /// POST /foods, always as available
    pub async fn create_food(&self, food: &NewFood) -> Result<Food, ClientError> {
        let body = encode(&CreateFoodRequest {
            food,
            available: true,
        })?;

        let created = self.transport.post("/foods", &body).await?;
        decode(created)
    }

    /// PUT /foods/{id} with the full edit record
    pub async fn update_food(&self, food: &EditingFood) -> Result<Food, ClientError> {
        let body = encode(food)?;

        let updated = self.transport.put(&food_path(food.id), &body).await?;
        decode(updated)
    }

    /// DELETE /foods/{id}
    pub async fn delete_food(&self, id: FoodId) -> Result<(), ClientError> {
        self.transport.delete(&food_path(id)).await
    }
}

fn food_path(id: FoodId) -> String {
    format!("/foods/{}", id)
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body).map_err(|e| ClientError::Encode(e.to_string()))
}

fn decode<R: serde::de::DeserializeOwned>(body: Value) -> Result<R, ClientError> {
    serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))
}
