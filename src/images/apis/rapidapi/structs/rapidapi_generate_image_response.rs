use serde_json::Value;

#[derive(Debug)]
pub struct RapidApiGenerateImageResponse {
    pub generated_image: Option<String>,
}

impl RapidApiGenerateImageResponse {
    /// Only a string `generated_image` on a JSON object counts as an image.
    /// Arrays, scalars, `null` and other field types all read as absent.
    pub fn from_value(value: &Value) -> Self {
        Self {
            generated_image: value
                .get("generated_image")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}
