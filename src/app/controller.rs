use axum::extract::State;

use crate::AppState;

use super::models::api_error::ApiError;

pub async fn get_root(State(_state): State<AppState>) -> Result<(), ApiError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{images::apis::rapidapi::config::RapidApiConfig, AppState};

    #[tokio::test]
    async fn root_responds_ok() {
        let state = AppState {
            rapidapi: Arc::new(RapidApiConfig {
                api_key: None,
                url: String::new(),
            }),
            client: reqwest::Client::new(),
        };

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = crate::create_router(state).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
