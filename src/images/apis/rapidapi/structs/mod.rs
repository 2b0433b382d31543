pub mod rapidapi_generate_image_response;
