use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::rapidapi, dtos::generate_image_dto::GenerateImageDto,
    models::generated_image::GeneratedImage,
};

pub async fn generate_image(
    dto: &GenerateImageDto,
    api_key: &str,
    state: &AppState,
) -> Result<GeneratedImage, ApiError> {
    let response =
        rapidapi::service::generate_image(&dto.prompt, api_key, &state.rapidapi, &state.client)
            .await?;

    Ok(GeneratedImage::from_url(response.generated_image))
}
