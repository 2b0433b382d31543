use reqwest::{header, StatusCode};
use thiserror::Error;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

#[derive(Debug, Error)]
pub enum RapidApiError {
    #[error("invalid API key header: {0}")]
    InvalidApiKey(#[from] header::InvalidHeaderValue),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("RapidAPI error: {} {}", .status.as_u16(), .status_text)]
    Upstream {
        status: StatusCode,
        status_text: String,
    },
    #[error("failed to deserialize response: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl From<RapidApiError> for ApiError {
    fn from(e: RapidApiError) -> Self {
        tracing::error!("Error in API route: {}", e);
        DefaultApiError::InternalServerError.value()
    }
}
