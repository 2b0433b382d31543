use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[validate(length(min = 1, message = "prompt must not be empty."))]
    pub prompt: String,
}

impl GenerateImageDto {
    /// Reads `prompt` from a raw body. Bodies not sent as JSON are left
    /// unparsed, so they never carry a prompt. Anything other than an object
    /// with a string `prompt` yields `None`; other fields are ignored.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Option<Self> {
        let is_json = content_type
            .and_then(|content_type| content_type.parse::<mime::Mime>().ok())
            .map(|parsed| parsed.essence_str() == mime::APPLICATION_JSON.essence_str())
            .unwrap_or(false);

        if !is_json {
            return None;
        }

        let value: Value = serde_json::from_slice(body).ok()?;

        let Some(Value::String(prompt)) = value.get("prompt")
        else {
            return None;
        };

        Some(Self {
            prompt: prompt.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn reads_string_prompt_and_ignores_other_fields() {
        let dto = GenerateImageDto::from_body(JSON, br#"{"prompt":"a red fox","seed":4}"#).unwrap();

        assert_eq!(dto.prompt, "a red fox");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_missing_or_non_string_prompts() {
        let bodies: [&[u8]; 7] = [
            b"{}",
            br#"{"prompt":null}"#,
            br#"{"prompt":42}"#,
            br#"{"prompt":["a"]}"#,
            br#"["a red fox"]"#,
            b"a red fox",
            b"",
        ];

        for body in bodies {
            assert!(GenerateImageDto::from_body(JSON, body).is_none());
        }
    }

    #[test]
    fn ignores_bodies_not_sent_as_json() {
        let body = br#"{"prompt":"a red fox"}"#;

        assert!(GenerateImageDto::from_body(Some("text/plain"), body).is_none());
        assert!(GenerateImageDto::from_body(None, body).is_none());
    }

    #[test]
    fn empty_prompt_fails_validation() {
        let dto = GenerateImageDto::from_body(JSON, br#"{"prompt":""}"#).unwrap();

        assert!(dto.validate().is_err());
    }
}
