use crate::app::envy::Envy;

pub const API_URL: &str = "https://chatgpt-42.p.rapidapi.com/texttoimage";
pub const API_HOST: &str = "chatgpt-42.p.rapidapi.com";

pub const WIDTH: u16 = 512;
pub const HEIGHT: u16 = 512;

#[derive(Debug, Clone)]
pub struct RapidApiConfig {
    pub api_key: Option<String>,
    pub url: String,
}

impl RapidApiConfig {
    pub fn from_envy(envy: &Envy) -> Self {
        Self {
            api_key: envy.gpt_api_key.to_owned(),
            url: API_URL.to_string(),
        }
    }

    /// Returns the key as configured. An empty value counts as missing,
    /// but surrounding whitespace is only stripped when the header is built.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}
