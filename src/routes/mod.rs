use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

mod composer;
mod contact;
mod health;
mod index;
mod language;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            language: template.language(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/composer/send", post(composer::send))
        .route("/composer/schedule", post(composer::schedule))
        .route("/language/{lang}", get(language::switch))
        .route("/static/{*path}", get(crate::assets::serve))
        .fallback(fallback)
        .with_state(app_state)
}
