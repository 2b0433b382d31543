use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use bytes::Bytes;
use validator::Validate;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    dtos::generate_image_dto::GenerateImageDto, errors::ImagesApiError,
    models::generated_image::GeneratedImage, service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<GeneratedImage>, ApiError> {
    let Some(api_key) = state.rapidapi.api_key()
    else {
        return Err(ImagesApiError::MissingConfiguration.value());
    };

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let Some(dto) = GenerateImageDto::from_body(content_type, &body)
    else {
        return Err(ImagesApiError::InvalidPrompt.value());
    };

    match dto.validate() {
        Ok(_) => match service::generate_image(&dto, api_key, &state).await {
            Ok(generated_image) => Ok(Json(generated_image)),
            Err(e) => Err(e),
        },
        Err(_) => Err(ImagesApiError::InvalidPrompt.value()),
    }
}
