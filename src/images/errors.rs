use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    MissingConfiguration,
    InvalidPrompt,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingConfiguration => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Missing API key or URL in environment variables".to_string(),
            },
            Self::InvalidPrompt => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid prompt provided".to_string(),
            },
        }
    }
}
