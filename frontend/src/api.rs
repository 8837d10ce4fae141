// Re-export all API modules
pub mod bookings;
pub mod courts;
pub mod feedback;
pub mod list_query;
pub mod packages;
pub mod playmates;
pub mod slots;
pub mod utils;
pub mod wallet;

use gloo_net::http::Response;
use shared::ErrorResponse;
use thiserror::Error;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}

/// Error surfaced by every API call; screens report it through a toast.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(error: gloo_net::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}

/// Decodes a non-2xx response body into an [`ApiError::Http`].
pub(crate) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| "Unknown error occurred".to_string());
    ApiError::Http { status, message }
}

pub type ApiResult<T> = Result<T, ApiError>;
