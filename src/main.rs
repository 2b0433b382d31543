use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{app::envy::Envy, images::apis::rapidapi::config::RapidApiConfig};

mod app;
mod images;

#[derive(Clone)]
pub struct AppState {
    pub rapidapi: Arc<RapidApiConfig>,
    pub client: reqwest::Client,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // images
        .route("/api/generate-image", post(images::controller::generate_image))
        // layers
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    if envy.gpt_api_key.is_none() {
        tracing::warn!("GPT_API_KEY is not set, image generation requests will fail");
    }

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    let state = AppState {
        rapidapi: Arc::new(RapidApiConfig::from_envy(&envy)),
        client: reqwest::Client::new(),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {} ({})", addr, envy.app_env);

    axum::Server::bind(&addr)
        .serve(create_router(state).into_make_service())
        .await
        .expect("failed to start server");
}
