pub mod assets;
pub mod cli;
pub mod config;
pub mod language;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

rust_i18n::i18n!("locales", fallback = "en");

/// Router with every page and the HTTP layers the server runs with.
pub fn app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify before compressing
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
