use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub text: String,
    pub width: u16,
    pub height: u16,
}
