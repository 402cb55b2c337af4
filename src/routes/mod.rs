use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use novatech_notification::Dispatcher;

use crate::template::{self, NotFoundTemplate};

pub mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

impl AppState {
    /// Resolves the email provider once; a broken provider is reported, not fatal.
    pub fn new(config: &crate::config::Config) -> Self {
        Self {
            dispatcher: Dispatcher::from_config(&config.email),
        }
    }
}

pub async fn fallback() -> impl IntoResponse {
    template::render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route(
            "/api/contact",
            post(contact::action).options(contact::preflight),
        )
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
