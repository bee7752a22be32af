//! API Access
//!
//! Base URL configuration, the injectable HTTP transport, and the typed
//! client for the `foods` resource.

pub mod client;
pub mod transport;

pub use client::{ClientError, FoodsClient};
pub use transport::{GlooTransport, Transport};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3333";

/// Local storage key overriding the API base URL
const API_URL_KEY: &str = "gofood_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Trim whitespace and trailing slashes; blank falls back to the default
fn normalize_base(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://api.local:3333/"), "http://api.local:3333");
        assert_eq!(normalize_base("  http://api.local//  "), "http://api.local");
        assert_eq!(normalize_base(""), DEFAULT_API_BASE);
    }
}
