use serde::Serialize;

pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/600x400?text=Image+Unavailable";

#[derive(Debug, Serialize)]
pub struct GeneratedImage {
    pub message: String,
}

impl GeneratedImage {
    pub fn from_url(url: Option<String>) -> Self {
        Self {
            message: url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
        }
    }
}
