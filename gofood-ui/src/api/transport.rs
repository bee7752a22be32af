//! HTTP Transport
//!
//! The dashboard never talks to `gloo-net` directly. It goes through
//! [`Transport`], a JSON-over-HTTP capability rooted at the API base URL,
//! so tests can substitute an in-memory double.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::api::client::ClientError;

/// JSON requests against a resource path such as `/foods/3`
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<Value, ClientError>;

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError>;

    async fn put(&self, path: &str, body: &Value) -> Result<Value, ClientError>;

    /// Response body is discarded
    async fn delete(&self, path: &str) -> Result<(), ClientError>;
}

/// Browser `fetch` transport
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ClientError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        let response = Request::put(&self.url(path))
            .json(body)
            .map_err(|e| ClientError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = Request::delete(&self.url(path))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        check_status(&response).await
    }
}

async fn read_json(response: Response) -> Result<Value, ClientError> {
    check_status(&response).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

async fn check_status(response: &Response) -> Result<(), ClientError> {
    if response.ok() {
        return Ok(());
    }

    let message = match response.json::<Value>().await {
        Ok(body) => body["error"]["message"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| response.status_text()),
        Err(_) => response.status_text(),
    };

    Err(ClientError::Status {
        status: response.status(),
        message,
    })
}
