//! Shared helpers for router-level tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use portfolio::{
    AppState,
    config::{
        ComposerConfig, Config, ContactConfig, ObservabilityConfig, ServerConfig, SiteConfig,
    },
};
use tower::ServiceExt;

pub const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
pub const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Mobile Safari/537.36";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig::default(),
        contact: ContactConfig::default(),
        composer: ComposerConfig { latency_ms: 10 },
        observability: ObservabilityConfig::default(),
    }
}

pub fn test_app() -> Router {
    test_app_with(test_config())
}

pub fn test_app_with(config: Config) -> Router {
    portfolio::app(AppState { config })
}

pub async fn get(app: Router, uri: &str, headers: &[(header::HeaderName, &str)]) -> Response<Body> {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(name, *value);
    }

    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form<T: serde::Serialize>(
    app: Router,
    uri: &str,
    form: &T,
    headers: &[(header::HeaderName, &str)],
) -> Response<Body> {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    for (name, value) in headers {
        request = request.header(name, *value);
    }

    let body = serde_urlencoded::to_string(form).unwrap();

    app.oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
