use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    // Checked per request so a missing key surfaces as a 500 instead of a boot failure.
    pub gpt_api_key: Option<String>,
}

fn default_app_env() -> String {
    "development".to_string()
}
