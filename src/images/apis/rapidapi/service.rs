use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, Response,
};
use serde_json::Value;

use super::{
    config::{RapidApiConfig, API_HOST, HEIGHT, WIDTH},
    errors::RapidApiError,
    models::input_spec::InputSpec,
    structs::rapidapi_generate_image_response::RapidApiGenerateImageResponse,
};

pub async fn generate_image(
    prompt: &str,
    api_key: &str,
    config: &RapidApiConfig,
    client: &Client,
) -> Result<RapidApiGenerateImageResponse, RapidApiError> {
    let input_spec = provide_input_spec(prompt);

    let mut headers = HeaderMap::new();
    headers.insert("x-rapidapi-key", HeaderValue::from_str(api_key.trim())?);
    headers.insert("x-rapidapi-host", HeaderValue::from_static(API_HOST));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let res = client
        .post(&config.url)
        .headers(headers)
        .json(&input_spec)
        .send()
        .await?;

    parse_response_to_rapidapi_generate_image_response(res).await
}

fn provide_input_spec(prompt: &str) -> InputSpec {
    InputSpec {
        text: prompt.to_string(),
        width: WIDTH,
        height: HEIGHT,
    }
}

async fn parse_response_to_rapidapi_generate_image_response(
    res: Response,
) -> Result<RapidApiGenerateImageResponse, RapidApiError> {
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let text = res.text().await?;

    if !status.is_success() {
        let message = describe_failure(content_type.as_deref(), &text)?;
        tracing::error!("Failed fetch response: {}", message);

        return Err(RapidApiError::Upstream {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let value: Value = serde_json::from_str(&text)?;

    Ok(RapidApiGenerateImageResponse::from_value(&value))
}

/// JSON error bodies are re-serialized compactly; anything else is kept verbatim.
fn describe_failure(content_type: Option<&str>, text: &str) -> Result<String, RapidApiError> {
    let is_json = content_type
        .map(|content_type| content_type.contains(mime::APPLICATION_JSON.essence_str()))
        .unwrap_or(false);

    if !is_json {
        return Ok(text.to_string());
    }

    let value: Value = serde_json::from_str(text)?;

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_failure_reserializes_json_bodies() {
        let message = describe_failure(
            Some("application/json; charset=utf-8"),
            "{ \"error\" : \"rate limited\" }",
        )
        .unwrap();

        assert_eq!(message, r#"{"error":"rate limited"}"#);
    }

    #[test]
    fn describe_failure_keeps_text_bodies() {
        let message = describe_failure(Some("text/plain"), "Bad Gateway").unwrap();
        assert_eq!(message, "Bad Gateway");

        let message = describe_failure(None, "{\"error\":1}").unwrap();
        assert_eq!(message, "{\"error\":1}");
    }

    #[test]
    fn describe_failure_rejects_malformed_json() {
        let result = describe_failure(Some("application/json"), "<html>");
        assert!(matches!(result, Err(RapidApiError::Deserialize(_))));
    }

    #[test]
    fn input_spec_uses_fixed_dimensions() {
        let input_spec = provide_input_spec("a red fox");

        assert_eq!(input_spec.text, "a red fox");
        assert_eq!(input_spec.width, WIDTH);
        assert_eq!(input_spec.height, HEIGHT);
    }
}
